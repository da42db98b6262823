//! Color constants for the portfolio palette.
//!
//! Neutral resume palette with a dark-scheme counterpart; the same values
//! appear as CSS custom properties in `styles.rs`.

#![allow(dead_code)]

// === LIGHT SCHEME ===
pub const PAPER: &str = "#fafafa";
pub const INK: &str = "#1f2937";
pub const INK_MUTED: &str = "#6b7280";
pub const INK_FAINT: &str = "#9ca3af";
pub const CARD_BORDER: &str = "#e5e7eb";

// === DARK SCHEME ===
pub const PAPER_DARK: &str = "#111827";
pub const INK_DARK: &str = "#e5e7eb";
pub const INK_MUTED_DARK: &str = "#9ca3af";
pub const CARD_BORDER_DARK: &str = "#374151";

// === ACCENT ===
pub const LINK: &str = "#2563eb";
pub const LINK_DARK: &str = "#60a5fa";
