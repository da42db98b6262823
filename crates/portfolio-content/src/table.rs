//! The site content table.
//!
//! The literal data the pages render lives in one TOML document, embedded in
//! the binary and deserialized once at startup. A replacement table can be
//! loaded from disk with `--content`.

use std::path::Path;

use serde::Deserialize;

use crate::error::ContentError;
use crate::types::{ExperienceEntry, HomeContent, ProfileEntry};

/// Built-in content, compiled into the binary.
const BUILTIN_TOML: &str = include_str!("../content/site.toml");

/// The whole content table.
///
/// Record order is authored order; nothing is sorted at runtime. The
/// experience list in the built-in table is reverse-chronological.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    /// Home panel content
    pub home: HomeContent,
    /// Work experience records
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    /// Online/gaming profile records
    #[serde(default)]
    pub profiles: Vec<ProfileEntry>,
}

impl SiteContent {
    /// Parse and check the built-in table.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_toml_str(BUILTIN_TOML)
    }

    /// Load a replacement table from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Parse a table from a TOML string and run structural checks.
    pub fn from_toml_str(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Structural checks on a parsed table.
    ///
    /// A table that fails here is a defect in the content file, not a
    /// runtime condition, so loading aborts instead of rendering it.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (idx, exp) in self.experiences.iter().enumerate() {
            if exp.title.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "experience entry {idx} has an empty title"
                )));
            }
            if exp.company.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "experience entry {idx} ({}) has an empty company",
                    exp.title
                )));
            }
        }

        for (idx, profile) in self.profiles.iter().enumerate() {
            if profile.platform.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "profile entry {idx} has an empty platform name"
                )));
            }
            if profile.image.trim().is_empty() {
                return Err(ContentError::Validation(format!(
                    "profile entry {idx} ({}) has an empty image reference",
                    profile.platform
                )));
            }
            if let Some(link) = &profile.link {
                if !link.starts_with("http://") && !link.starts_with("https://") {
                    return Err(ContentError::Validation(format!(
                        "profile entry {idx} ({}) has a non-absolute link: {link}",
                        profile.platform
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_table() -> String {
        r#"
        [home]
        greeting = "Hi"
        about = "About me."
        "#
        .to_string()
    }

    #[test]
    fn minimal_table_parses() {
        let content = SiteContent::from_toml_str(&minimal_table()).unwrap();
        assert_eq!(content.home.greeting, "Hi");
        assert!(content.experiences.is_empty());
        assert!(content.profiles.is_empty());
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = SiteContent::from_toml_str("not toml at all [[").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn empty_experience_title_is_rejected() {
        let raw = format!(
            "{}\n{}",
            minimal_table(),
            r#"
            [[experiences]]
            title = "  "
            company = "Acme"
            duration = "2024"
            description = "Did things."
            "#
        );
        let err = SiteContent::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn relative_profile_link_is_rejected() {
        let raw = format!(
            "{}\n{}",
            minimal_table(),
            r#"
            [[profiles]]
            platform = "Steam"
            uid = "someone"
            image = "/img/steam.jpg"
            link = "steamcommunity.com/id/someone"
            "#
        );
        let err = SiteContent::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SiteContent::load("/nonexistent/site.toml").unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
