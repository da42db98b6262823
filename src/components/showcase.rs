//! Showcase card component.
//!
//! Labeled image card for one online/gaming profile. The identifier text
//! under the image is a hyperlink when a link was supplied, plain text
//! otherwise - the only conditional branch in the presentational layer.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ShowcaseCardProps {
    /// Platform label drawn over the image
    pub title: String,
    /// Image reference, resolved by the asset layer
    pub image: String,
    /// Identifier text shown under the image
    pub uid: String,
    /// Outbound profile link
    #[props(default = None)]
    pub link: Option<String>,
}

/// Showcase card: cover image with a gradient scrim and title, identifier
/// text underneath.
#[component]
pub fn ShowcaseCard(props: ShowcaseCardProps) -> Element {
    rsx! {
        div { class: "showcase-card",
            div {
                class: "showcase-card__image",
                style: "background-image: url('{props.image}');",

                div { class: "showcase-card__scrim" }
                div { class: "showcase-card__title", "{props.title}" }
            }

            if let Some(url) = props.link {
                a {
                    class: "showcase-card__uid showcase-card__uid--link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{props.uid}"
                }
            } else {
                p { class: "showcase-card__uid", "{props.uid}" }
            }
        }
    }
}
