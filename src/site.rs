use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{info, warn};

use crate::error::{Result, SyncError};
use crate::resume::ExtractedProfile;
use crate::settings::PageSet;

static MAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(<main[^>]*>)(.*?)(</main>)").unwrap());

/// Swap the inner content of every `<main>` region, keeping its attributes.
/// `None` when the document has no `<main>`.
pub fn replace_main(html: &str, inner: &str) -> Option<String> {
    if !MAIN_RE.is_match(html) {
        return None;
    }
    let replaced = MAIN_RE.replace_all(html, |caps: &Captures| {
        format!("{}{}{}", &caps[1], inner, &caps[3])
    });
    Some(replaced.into_owned())
}

pub fn about_html(profile: &ExtractedProfile) -> String {
    format!("<h1>About Me</h1>\n      <p>{}</p>\n", profile.summary)
}

pub fn skills_html(profile: &ExtractedProfile) -> String {
    let items = if profile.skills.is_empty() {
        "<li>—</li>".to_string()
    } else {
        profile
            .skills
            .iter()
            .map(|s| format!("<li>{}</li>", s))
            .collect::<Vec<_>>()
            .join("\n")
    };
    format!("<h1>Skills</h1>\n      <ul>\n      {}\n      </ul>\n", items)
}

pub fn contact_html(profile: &ExtractedProfile) -> String {
    let phone = if profile.phone.is_empty() {
        String::new()
    } else {
        format!("<br>Phone: {}", profile.phone)
    };
    format!(
        "<h1>Contact</h1>\n      <p>Reach out via email: <a href=\"mailto:{email}\">{email}</a>{phone}</p>\n",
        email = profile.email,
    )
}

/// Rewrite the about, skills and contact pages. Returns the pages that were
/// actually changed on disk.
pub fn update_site(pages: &PageSet, profile: &ExtractedProfile) -> Result<Vec<PathBuf>> {
    let targets = [
        (&pages.about, about_html(profile)),
        (&pages.skills, skills_html(profile)),
        (&pages.contact, contact_html(profile)),
    ];

    let mut updated = Vec::new();
    for (path, inner) in targets {
        if update_page(path, &inner)? {
            updated.push(path.clone());
        }
    }
    Ok(updated)
}

fn update_page(path: &Path, inner: &str) -> Result<bool> {
    let html = fs::read_to_string(path).map_err(|source| SyncError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(new_html) = replace_main(&html, inner) else {
        warn!(page = %path.display(), "no <main> element, page left unchanged");
        return Ok(false);
    };

    fs::write(path, new_html).map_err(|source| SyncError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(page = %path.display(), bytes = inner.len(), "updated page");
    Ok(true)
}
