use std::collections::BTreeMap;

use super::text::is_blank;

/// Heading name → zero-based line number of the heading.
pub type SectionIndex = BTreeMap<String, usize>;

pub const HEADINGS: &[&str] = &[
    "summary",
    "profile",
    "about",
    "experience",
    "work experience",
    "education",
    "skills",
    "projects",
    "contact",
    "certifications",
];

const MAX_CAPS_HEADING_CHARS: usize = 60;

/// Build the section index: known headings first, then ALL-CAPS lines for
/// names the vocabulary pass did not claim.
pub fn locate_sections(lines: &[String]) -> SectionIndex {
    let mut idx = vocabulary_headings(lines);
    for (name, line) in capitalized_headings(lines) {
        idx.entry(name).or_insert(line);
    }
    idx
}

/// Lines that normalize to one of [`HEADINGS`]. Repeats keep the last line.
pub fn vocabulary_headings(lines: &[String]) -> SectionIndex {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let name = normalize_heading(line);
            HEADINGS.contains(&name.as_str()).then_some((name, i))
        })
        .collect()
}

/// Short non-empty lines that equal their own upper-cased form. Repeats keep
/// the last line.
///
/// Lines without any letters ("2019 - 2021", "----") qualify too.
pub fn capitalized_headings(lines: &[String]) -> SectionIndex {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_capitalized(line))
        .map(|(i, line)| (normalize_heading(line), i))
        .collect()
}

fn is_capitalized(line: &str) -> bool {
    let s = line.trim();
    !s.is_empty() && s == s.to_uppercase() && s.chars().count() < MAX_CAPS_HEADING_CHARS
}

fn normalize_heading(line: &str) -> String {
    line.trim().to_lowercase().trim_end_matches(':').to_string()
}

/// Line where the section starting at `start` ends: the nearest heading of
/// any kind after it, or `len`.
pub fn next_boundary(idx: &SectionIndex, start: usize, len: usize) -> usize {
    idx.values()
        .copied()
        .filter(|&v| v > start)
        .min()
        .unwrap_or(len)
        .min(len)
}

/// Non-blank lines of the section under heading `key`, joined by `\n`.
pub fn section_body(lines: &[String], idx: &SectionIndex, key: &str) -> Option<String> {
    let heading = *idx.get(key)?;
    let start = (heading + 1).min(lines.len());
    let end = next_boundary(idx, heading, lines.len()).max(start);
    let body = lines[start..end]
        .iter()
        .filter(|l| !is_blank(l))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    Some(body)
}
