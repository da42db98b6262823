//! Checks on the built-in content table.
//!
//! The table is authored data; these tests pin the shape the pages rely on
//! so an edit that breaks a panel fails here instead of rendering wrong.

use std::io::Write;

use portfolio_content::{ContentError, SiteContent};

#[test]
fn builtin_table_loads_and_validates() {
    let content = SiteContent::builtin().expect("built-in table must parse");
    content.validate().expect("built-in table must validate");
}

#[test]
fn home_panel_content_is_complete() {
    let content = SiteContent::builtin().unwrap();
    assert_eq!(content.home.greeting, "Hello!");
    assert!(content.home.about.starts_with("Cloud & backend engineer"));
    assert_eq!(content.home.achievements.len(), 3);

    let skill_titles: Vec<_> = content.home.skills.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(skill_titles, ["Front End", "Back End", "Other"]);
    for group in &content.home.skills {
        assert!(!group.items.is_empty(), "skill group {} is empty", group.title);
    }
}

#[test]
fn experiences_keep_authored_order() {
    let content = SiteContent::builtin().unwrap();
    assert_eq!(content.experiences.len(), 4);
    assert_eq!(content.experiences[0].title, "Teaching Assistant");
    assert_eq!(content.experiences[3].title, "Volunteer Technical Advisor");
}

#[test]
fn profile_links_match_authored_data() {
    let content = SiteContent::builtin().unwrap();
    assert_eq!(content.profiles.len(), 6);

    let discord = content
        .profiles
        .iter()
        .find(|p| p.platform == "discord")
        .expect("discord profile present");
    assert!(discord.has_link());
    assert_eq!(
        discord.link.as_deref(),
        Some("https://discord.com/users/stellarstellarizu")
    );

    // Placeholder uid, no link supplied as authored.
    let wilds = content
        .profiles
        .iter()
        .find(|p| p.platform == "Monster Hunter: Wilds")
        .expect("Monster Hunter: Wilds profile present");
    assert!(!wilds.has_link());
    assert_eq!(wilds.uid, "xxxxxx");

    let linked = content.profiles.iter().filter(|p| p.has_link()).count();
    assert_eq!(linked, 4);
}

#[test]
fn external_file_loads_like_builtin() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"
        [home]
        greeting = "Hey"
        about = "Short bio."

        [[experiences]]
        title = "Engineer"
        company = "Acme"
        duration = "2024"
        description = "Built things."
        "#,
    )
    .unwrap();

    let content = SiteContent::load(file.path()).unwrap();
    assert_eq!(content.home.greeting, "Hey");
    assert_eq!(content.experiences.len(), 1);
}

#[test]
fn broken_external_file_aborts_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[home]\ngreeting = 42\n").unwrap();

    let err = SiteContent::load(file.path()).unwrap_err();
    assert!(matches!(err, ContentError::Parse(_)));
}
