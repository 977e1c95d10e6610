//! # Commons Testkit
//!
//! Deterministic fixtures for exercising the composition core:
//!
//! - [`SeededBoardContent`] — the mock board-content provider; same seed,
//!   same posts, every run.
//! - [`tree`] — scripted UI-tree builders matching the shapes the composed
//!   screens actually render (bottom nav bars, icon-only buttons).

pub mod content;
pub mod tree;

pub use content::SeededBoardContent;
