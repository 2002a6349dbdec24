use std::path::{Path, PathBuf};

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Site root holding the resume and the HTML pages.
    pub root: PathBuf,
    /// Resume text file, relative to `root` unless absolute.
    pub resume: PathBuf,
    pub pages: PageSet,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PageSet {
    pub about: PathBuf,
    pub skills: PathBuf,
    pub contact: PathBuf,
}

/// Command-line values that take precedence over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub resume: Option<PathBuf>,
}

impl Settings {
    /// Defaults, then `RESUME_*` environment variables, then CLI overrides.
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::from_env(Environment::with_prefix("RESUME"), overrides)
    }

    fn from_env(env: Environment, overrides: Overrides) -> Result<Self> {
        let settings = Config::builder()
            .set_default("root", ".")?
            .set_default("resume", "resume.txt")?
            .set_default("pages.about", "about.html")?
            .set_default("pages.skills", "skills.html")?
            .set_default("pages.contact", "contact.html")?
            .add_source(env.prefix_separator("_").separator("__"))
            .set_override_option("root", path_value(overrides.root))?
            .set_override_option("resume", path_value(overrides.resume))?
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn resume_path(&self) -> PathBuf {
        self.resolve(&self.resume)
    }

    /// Absolute-or-root-relative paths of the about, skills and contact pages.
    pub fn page_paths(&self) -> PageSet {
        PageSet {
            about: self.resolve(&self.pages.about),
            skills: self.resolve(&self.pages.skills),
            contact: self.resolve(&self.pages.contact),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

fn path_value(path: Option<PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load_with(vars: &[(&str, &str)], overrides: Overrides) -> Settings {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let env = Environment::with_prefix("RESUME").source(Some(source));
        Settings::from_env(env, overrides).unwrap()
    }

    #[test]
    fn defaults() {
        let s = load_with(&[], Overrides::default());
        assert_eq!(s.root, PathBuf::from("."));
        assert_eq!(s.resume_path(), PathBuf::from("./resume.txt"));
        assert_eq!(s.page_paths().skills, PathBuf::from("./skills.html"));
    }

    #[test]
    fn environment_overrides_defaults() {
        let s = load_with(
            &[("RESUME_ROOT", "site"), ("RESUME_PAGES__ABOUT", "me.html")],
            Overrides::default(),
        );
        assert_eq!(s.root, PathBuf::from("site"));
        assert_eq!(s.page_paths().about, PathBuf::from("site/me.html"));
        assert_eq!(s.page_paths().contact, PathBuf::from("site/contact.html"));
    }

    #[test]
    fn cli_overrides_environment() {
        let s = load_with(
            &[("RESUME_ROOT", "site")],
            Overrides {
                root: Some("public".into()),
                resume: Some("/tmp/cv.txt".into()),
            },
        );
        assert_eq!(s.root, PathBuf::from("public"));
        assert_eq!(s.resume_path(), PathBuf::from("/tmp/cv.txt"));
    }
}
