//! Section layout wrappers.
//!
//! Titled containers used by every panel; composition only, no logic.

use dioxus::prelude::*;

/// Top-level titled card section.
#[component]
pub fn Section(
    /// Section heading
    title: String,
    /// Section body
    children: Element,
) -> Element {
    rsx! {
        div { class: "section-card",
            h2 { class: "section-card__title", "{title}" }
            {children}
        }
    }
}

/// Nested titled container, used inside grid cells.
#[component]
pub fn InnerSection(title: String, children: Element) -> Element {
    rsx! {
        div { class: "inner-section",
            h3 { class: "inner-section__title", "{title}" }
            {children}
        }
    }
}
