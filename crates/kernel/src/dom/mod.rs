//! In-memory page model the menu is rendered into.
//!
//! A [`Document`] holds identified elements with their presentational style
//! and inner markup, the viewport scroll offsets, and the hover bindings of
//! the currently mounted menu fragment. Hover behavior is registered against
//! element ids instead of being embedded as script in the markup.

mod document;
mod events;

pub use document::{Display, Document, Element, Fragment, Style};
pub use events::{HoverBinding, HoverTrigger};
