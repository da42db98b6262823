//! Work experience panel.
//!
//! One card per experience record, in table order (authored
//! reverse-chronologically), keyed by position.

use dioxus::prelude::*;

use crate::context::site_content;

#[component]
pub fn ExperiencePage() -> Element {
    let experiences = &site_content().experiences;

    rsx! {
        div { class: "page",
            h2 { class: "page-heading", "Work Experiences" }

            for (index, exp) in experiences.iter().enumerate() {
                div { key: "{index}", class: "experience-card",
                    h3 { class: "experience-card__title", "{exp.title}" }
                    p { class: "experience-card__company", "{exp.company}" }
                    p { class: "experience-card__duration", "{exp.duration}" }
                    p { class: "experience-card__description", "{exp.description}" }
                }
            }
        }
    }
}
