use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.[A-Za-z]{2,}").unwrap());
// Loose on purpose: any run of 8+ digits/dashes/spaces/parens counts.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\-\s()]{6,}\d").unwrap());

/// First email-looking token in document order, or empty.
pub fn find_email(lines: &[String]) -> String {
    first_match(&EMAIL_RE, lines)
}

/// First phone-looking run in document order, or empty.
pub fn find_phone(lines: &[String]) -> String {
    first_match(&PHONE_RE, lines)
}

fn first_match(re: &Regex, lines: &[String]) -> String {
    lines
        .iter()
        .find_map(|line| re.find(line))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
