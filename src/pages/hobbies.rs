//! Hobby panel - online/gaming profiles as a grid of showcase cards.

use dioxus::prelude::*;

use crate::components::{Section, ShowcaseCard};
use crate::context::site_content;

#[component]
pub fn HobbyPage() -> Element {
    let profiles = &site_content().profiles;

    rsx! {
        div { class: "page",
            h2 { class: "page-heading", "Connect with me" }

            Section { title: "Online Profiles".to_string(),
                div { class: "showcase-grid",
                    for (index, profile) in profiles.iter().enumerate() {
                        ShowcaseCard {
                            key: "{index}",
                            title: profile.platform.clone(),
                            image: profile.image.clone(),
                            uid: profile.uid.clone(),
                            link: profile.link.clone(),
                        }
                    }
                }
            }
        }
    }
}
