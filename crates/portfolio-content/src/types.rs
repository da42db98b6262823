//! Record types for the content table.
//!
//! Everything here is plain display data: deserialized once at startup and
//! never mutated afterwards.

use serde::Deserialize;

/// One work experience record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExperienceEntry {
    /// Role title, e.g. "Teaching Assistant"
    pub title: String,
    /// Employer or organization
    pub company: String,
    /// Free-text duration, e.g. "April 2025 - June 2025"
    pub duration: String,
    /// One-paragraph description of the role
    pub description: String,
}

/// One online/gaming profile record shown as a showcase card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileEntry {
    /// Platform label, e.g. "Steam"
    pub platform: String,
    /// Identifier text shown under the card image
    pub uid: String,
    /// Image reference, resolved by the asset layer
    pub image: String,
    /// Outbound profile link; when absent the uid renders as plain text
    #[serde(default)]
    pub link: Option<String>,
}

impl ProfileEntry {
    /// Whether the uid should render as a hyperlink.
    pub fn has_link(&self) -> bool {
        self.link.is_some()
    }
}

/// A titled grouping of skills on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub items: Vec<String>,
}

/// Content for the home (profile/about) panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeContent {
    /// Heading shown at the top of the panel
    pub greeting: String,
    /// About prose
    pub about: String,
    /// Skill groupings, rendered as a grid in authored order
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Bullet list of projects and achievements
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_link_reflects_presence() {
        let linked = ProfileEntry {
            platform: "github".to_string(),
            uid: "@VStev".to_string(),
            image: "/img/github.jpg".to_string(),
            link: Some("https://github.com/VStev".to_string()),
        };
        assert!(linked.has_link());

        let plain = ProfileEntry {
            link: None,
            ..linked
        };
        assert!(!plain.has_link());
    }

    #[test]
    fn link_field_is_optional_in_toml() {
        let entry: ProfileEntry = toml::from_str(
            r#"
            platform = "Steam"
            uid = "Aprilla"
            image = "/img/steam.jpg"
            "#,
        )
        .unwrap();
        assert!(entry.link.is_none());
    }
}
