//! Shared state for the UI.
//!
//! The content table is loaded once in `main` before the framework launches
//! and is immutable afterwards, so it lives in a `OnceLock` rather than in
//! component state. The current page is the only mutable application state;
//! it is a `Signal<Page>` owned by the root `App` component and handed to
//! children via Dioxus context.

use std::sync::OnceLock;

use dioxus::prelude::*;
use portfolio_content::{Page, SiteContent};

static CONTENT: OnceLock<SiteContent> = OnceLock::new();
static INITIAL_PAGE: OnceLock<Page> = OnceLock::new();

/// Store the loaded content table and launch page. Called once from `main`
/// before the UI starts; later calls are ignored.
pub fn init(content: SiteContent, initial_page: Page) {
    let _ = CONTENT.set(content);
    let _ = INITIAL_PAGE.set(initial_page);
}

/// The loaded content table.
///
/// Falls back to an empty table if `init` was never called, so component
/// code cannot panic on access.
pub fn site_content() -> &'static SiteContent {
    CONTENT.get_or_init(SiteContent::default)
}

/// Page to show when the window first opens.
pub fn initial_page() -> Page {
    INITIAL_PAGE.get().copied().unwrap_or_default()
}

/// Hook to access the current page signal from context.
///
/// Reading it subscribes the component to page changes; setting it switches
/// the rendered panel.
pub fn use_current_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}
