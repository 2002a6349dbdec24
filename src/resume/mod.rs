pub mod contact;
pub mod fields;
pub mod sections;
pub mod text;

use serde::Serialize;
use tracing::debug;

/// Fields pulled out of a resume, handed to the site renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedProfile {
    pub email: String,
    pub phone: String,
    pub summary: String,
    pub skills: Vec<String>,
}

/// Lines → contact scan + section index → summary/skills slices.
pub fn extract(raw: &str) -> ExtractedProfile {
    let lines = text::split_lines(raw);
    extract_lines(&lines)
}

pub fn extract_lines(lines: &[String]) -> ExtractedProfile {
    let idx = sections::locate_sections(lines);
    debug!(lines = lines.len(), sections = ?idx, "located resume sections");

    ExtractedProfile {
        email: contact::find_email(lines),
        phone: contact::find_phone(lines),
        summary: fields::extract_summary(lines, &idx),
        skills: fields::extract_skills(lines, &idx),
    }
}

impl ExtractedProfile {
    /// First `max` characters of the summary.
    pub fn summary_preview(&self, max: usize) -> &str {
        match self.summary.char_indices().nth(max) {
            Some((end, _)) => &self.summary[..end],
            None => &self.summary,
        }
    }
}
