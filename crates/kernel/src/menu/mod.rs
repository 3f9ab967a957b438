//! Navigation menu: the site tree and its markup.
//!
//! The menu provides:
//! - The fixed documentation site tree ([`SITE_MENU`])
//! - A registry over that tree for lookups and invariant checks
//! - The standard and legacy serializations for a path context

mod entry;
mod markup;
mod registry;

pub use entry::{NavEntry, ROOT_LIST_ID, SITE_MENU, Tier};
pub use markup::{
    HandlerWiring, MarkupVariant, MenuMarkup, PathContext, build_markup, build_site_markup,
};
pub use registry::MenuRegistry;
