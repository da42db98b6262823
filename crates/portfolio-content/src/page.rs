//! Page identifiers for the view switcher.

/// Identifier for one of the four content panels.
///
/// The set is closed: navigation only ever produces these four values. Any
/// name outside the set resolves to [`Page::Main`], so page selection is
/// total and never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Profile / about panel (the default on launch)
    Main,
    /// Work experience panel
    Experience,
    /// Hobby / gaming profile panel
    Hobbies,
    /// Gallery panel (placeholder, currently empty)
    Gallery,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [Page::Main, Page::Experience, Page::Hobbies, Page::Gallery];

    /// Canonical name used in the content table and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Main => "main",
            Page::Experience => "experience",
            Page::Hobbies => "hobbies",
            Page::Gallery => "gallery",
        }
    }

    /// Label shown in the navigation sidebar.
    pub fn label(&self) -> &'static str {
        match self {
            Page::Main => "Profile",
            Page::Experience => "Experience",
            Page::Hobbies => "Linktree",
            Page::Gallery => "Gallery",
        }
    }

    /// Resolve a page name, falling back to [`Page::Main`] for anything
    /// outside the closed set.
    pub fn from_name(name: &str) -> Page {
        match name {
            "experience" => Page::Experience,
            "hobbies" => Page::Hobbies,
            "gallery" => Page::Gallery,
            _ => Page::Main,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Main
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), page);
        }
    }

    #[test]
    fn unknown_names_fall_back_to_main() {
        assert_eq!(Page::from_name("settings"), Page::Main);
        assert_eq!(Page::from_name("MAIN"), Page::Main);
        assert_eq!(Page::from_name(""), Page::Main);
    }

    #[test]
    fn default_is_main() {
        assert_eq!(Page::default(), Page::Main);
    }

    #[test]
    fn navigation_order_and_labels() {
        let labels: Vec<_> = Page::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["Profile", "Experience", "Linktree", "Gallery"]);

        let mut names: Vec<_> = Page::ALL.iter().map(|p| p.name()).collect();
        names.dedup();
        assert_eq!(names.len(), Page::ALL.len());
    }
}
