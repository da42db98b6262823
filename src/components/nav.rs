//! Navigation item component.
//!
//! One entry in the fixed sidebar. Clicking it overwrites the current page
//! signal with its target; repeat clicks are harmless.

use dioxus::prelude::*;
use portfolio_content::Page;

use crate::context::use_current_page;

#[derive(Props, Clone, PartialEq)]
pub struct NavItemProps {
    /// Page this item activates
    pub target: Page,
}

/// Sidebar navigation item.
///
/// Exactly one item is active at a time: the one whose target matches the
/// current page signal. Active and inactive styling are mutually exclusive,
/// and the active item carries a marker dot.
#[component]
pub fn NavItem(props: NavItemProps) -> Element {
    let mut current = use_current_page();
    let target = props.target;
    let is_active = current() == target;

    rsx! {
        div {
            class: if is_active { "nav-item active" } else { "nav-item" },
            onclick: move |_| current.set(target),

            if is_active {
                span { class: "nav-item__marker", "\u{2022}" }
            }
            span { class: "nav-item__label", "{target.label()}" }
        }
    }
}
