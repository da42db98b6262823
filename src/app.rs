//! Root application component.
//!
//! Owns the single piece of application state (the current page) and maps it
//! to the matching content panel.

use dioxus::prelude::*;
use portfolio_content::Page;

use crate::components::NavItem;
use crate::context;
use crate::pages::{ExperiencePage, Gallery, HobbyPage, HomePage};
use crate::theme::GLOBAL_STYLES;

/// Root component: fixed sidebar navigation plus the active content panel.
///
/// `current` starts at [`Page::Main`] on every fresh launch (or the panel
/// picked with `--page`) and is only ever written by navigation items.
#[component]
pub fn App() -> Element {
    let current: Signal<Page> = use_signal(context::initial_page);

    // Hand the page signal to navigation items
    use_context_provider(|| current);

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "shell",
            aside { class: "sidebar",
                for page in Page::ALL {
                    NavItem { target: page }
                }
            }

            main { class: "content-column",
                {render_page(current())}
            }
        }
    }
}

/// Select the panel for a page.
///
/// Total over the closed [`Page`] set; the unrecognized-name fallback lives
/// in [`Page::from_name`], so by the time a value reaches here it is always
/// one of the four variants.
fn render_page(page: Page) -> Element {
    match page {
        Page::Main => rsx! { HomePage {} },
        Page::Experience => rsx! { ExperiencePage {} },
        Page::Hobbies => rsx! { HobbyPage {} },
        Page::Gallery => rsx! { Gallery {} },
    }
}
