//! Site Menu Kernel Library
//!
//! Builds the documentation site navigation menu, picks the markup variant
//! for the visiting browser and mounts it into a page.
//! The `sitemenu` binary exposes the same operations on the command line.

pub mod browser;
pub mod config;
pub mod dom;
pub mod error;
pub mod helpers;
pub mod menu;
pub mod render;
pub mod scroll;
pub mod theme;

pub use browser::{BrowserClassification, BrowserName, Navigator, classify};
pub use dom::Document;
pub use error::{MenuError, MenuResult};
pub use render::{MenuRenderer, RenderReport, menu_init, sub_menu_init};
