//! Portfolio Content Library
//!
//! Data model and content table for the portfolio desktop app.
//!
//! ## Overview
//!
//! The UI renders four static panels; the literal records behind them
//! (experience entries, profile showcase entries, skill groupings) live here
//! as a declarative TOML table rather than inline in the view code. The table
//! is loaded and checked once at startup and is immutable afterwards, so the
//! page components stay pure functions over this data.
//!
//! ## Quick Start
//!
//! ```
//! use portfolio_content::{Page, SiteContent};
//!
//! let content = SiteContent::builtin().expect("built-in table is valid");
//! assert_eq!(content.experiences.len(), 4);
//! assert_eq!(Page::from_name("nonsense"), Page::Main);
//! ```

pub mod error;
pub mod page;
pub mod table;
pub mod types;

// Re-exports
pub use error::ContentError;
pub use page::Page;
pub use table::SiteContent;
pub use types::{ExperienceEntry, HomeContent, ProfileEntry, SkillGroup};
