//! UI components for the portfolio.

mod nav;
mod section;
mod showcase;

pub use nav::NavItem;
pub use section::{InnerSection, Section};
pub use showcase::ShowcaseCard;
