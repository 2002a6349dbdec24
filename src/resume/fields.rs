use super::sections::{section_body, SectionIndex};
use super::text::is_blank;

const SUMMARY_KEYS: &[&str] = &["summary", "profile", "about"];
const FALLBACK_SUMMARY_LINES: usize = 8;

/// Body of the first summary-like section; falls back to the opening lines
/// of the document when there is none or it is empty.
pub fn extract_summary(lines: &[String], idx: &SectionIndex) -> String {
    let summary = SUMMARY_KEYS
        .iter()
        .find(|key| idx.contains_key(**key))
        .and_then(|key| section_body(lines, idx, key))
        .map(|body| body.trim().to_string())
        .unwrap_or_default();

    if summary.is_empty() {
        fallback_summary(lines)
    } else {
        summary
    }
}

fn fallback_summary(lines: &[String]) -> String {
    lines
        .iter()
        .filter(|l| !is_blank(l))
        .take(FALLBACK_SUMMARY_LINES)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Comma/newline separated entries of the skills section, bullets stripped.
pub fn extract_skills(lines: &[String], idx: &SectionIndex) -> Vec<String> {
    section_body(lines, idx, "skills")
        .map(|body| split_skills(&body))
        .unwrap_or_default()
}

pub fn split_skills(body: &str) -> Vec<String> {
    body.split([',', '\n'])
        .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '-' || c == '•'))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::sections::locate_sections;

    fn lines(s: &[&str]) -> Vec<String> {
        s.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn summary_and_skills_spans() {
        let l = lines(&["Summary", "I build things.", "", "Skills", "Python, Go"]);
        let idx = locate_sections(&l);
        assert_eq!(extract_summary(&l, &idx), "I build things.");
        assert_eq!(extract_skills(&l, &idx), vec!["Python", "Go"]);
    }

    #[test]
    fn summary_prefers_summary_over_profile() {
        let l = lines(&["Profile", "profile text", "Summary", "summary text"]);
        let idx = locate_sections(&l);
        assert_eq!(extract_summary(&l, &idx), "summary text");
    }

    #[test]
    fn summary_from_about_keeps_line_breaks() {
        let l = lines(&["Jane", "About:", "  first", "second  ", "EXPERIENCE", "Acme"]);
        let idx = locate_sections(&l);
        assert_eq!(extract_summary(&l, &idx), "first\nsecond");
    }

    #[test]
    fn summary_ends_at_caps_heading() {
        let l = lines(&["Summary", "Backend engineer.", "LANGUAGES", "English"]);
        let idx = locate_sections(&l);
        assert_eq!(extract_summary(&l, &idx), "Backend engineer.");
    }

    #[test]
    fn fallback_takes_first_eight_lines() {
        let l: Vec<String> = (1..=10).map(|i| format!("line {i}")).collect();
        let idx = locate_sections(&l);
        assert_eq!(
            extract_summary(&l, &idx),
            "line 1 line 2 line 3 line 4 line 5 line 6 line 7 line 8"
        );
    }

    #[test]
    fn empty_summary_section_falls_back() {
        let l = lines(&["Jane Doe", "Engineer", "Summary", "", "Skills", "Rust"]);
        let idx = locate_sections(&l);
        assert_eq!(
            extract_summary(&l, &idx),
            "Jane Doe Engineer Summary Skills Rust"
        );
    }

    #[test]
    fn skills_missing_is_empty() {
        let l = lines(&["Summary", "hello"]);
        let idx = locate_sections(&l);
        assert!(extract_skills(&l, &idx).is_empty());
    }

    #[test]
    fn skills_bullets_trimmed() {
        assert_eq!(split_skills("- Python\n• Go , C++ "), vec!["Python", "Go", "C++"]);
    }

    #[test]
    fn skills_drop_empty_fragments() {
        assert_eq!(split_skills("Rust,, ,\n-\n•  •\nSQL"), vec!["Rust", "SQL"]);
    }

    #[test]
    fn skills_multiline_section() {
        let l = lines(&[
            "Skills:",
            "- Rust, Go",
            "",
            "• Kubernetes",
            "Projects",
            "resume_sync, a site tool",
        ]);
        let idx = locate_sections(&l);
        assert_eq!(extract_skills(&l, &idx), vec!["Rust", "Go", "Kubernetes"]);
    }

    #[test]
    fn inner_hyphens_survive() {
        assert_eq!(split_skills("CI-CD, front-end"), vec!["CI-CD", "front-end"]);
    }
}
