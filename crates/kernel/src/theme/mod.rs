//! Theme engine and page snapshots.
//!
//! Provides Tera-based rendering of the menu region into a standalone page.

mod engine;

pub use engine::{PAGE_TEMPLATE, ThemeEngine};
