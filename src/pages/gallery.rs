//! Gallery panel.
//!
//! Declared placeholder: renders an empty container.
//! TODO: populate once a photo set is picked and image assets exist.

use dioxus::prelude::*;

#[component]
pub fn Gallery() -> Element {
    rsx! {
        div { class: "page gallery" }
    }
}
