//! Home panel - greeting, about prose, skill groupings, achievements.

use dioxus::prelude::*;

use crate::components::{InnerSection, Section};
use crate::context::site_content;

#[component]
pub fn HomePage() -> Element {
    let home = &site_content().home;

    rsx! {
        div { class: "page",
            h2 { class: "page-heading", "{home.greeting}" }

            Section { title: "About".to_string(),
                p { class: "about-text", "{home.about}" }
            }

            Section { title: "Frameworks and Languages".to_string(),
                div { class: "skill-grid",
                    for group in home.skills.iter() {
                        div { key: "{group.title}", class: "skill-grid__cell",
                            InnerSection { title: group.title.clone(),
                                ul { class: "bullet-list",
                                    for item in group.items.iter() {
                                        li { "{item}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Section { title: "Projects and Achievements".to_string(),
                ul { class: "bullet-list",
                    for item in home.achievements.iter() {
                        li { "{item}" }
                    }
                }
            }
        }
    }
}
