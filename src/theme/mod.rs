//! Theme for the portfolio UI.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
