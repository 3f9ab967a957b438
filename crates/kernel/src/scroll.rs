//! Scroll offset probe.
//!
//! Engines disagree on whether the page scroll offset is tracked on the body
//! or on the root document element. The probe nudges the viewport by one
//! pixel and back, watching the body offset; if the body did not move, the
//! root element's offset is the one to read.

use serde::Serialize;
use tracing::debug;

/// Element whose `scrollTop` reflects the page scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollSource {
    #[default]
    Body,
    DocumentElement,
}

/// Minimal scrollable viewport.
pub trait Viewport {
    /// Scroll by a relative amount.
    fn scroll_by(&mut self, dx: i64, dy: i64);

    /// Current vertical offset as reported by `source`.
    fn scroll_top(&self, source: ScrollSource) -> i64;
}

/// Detects the authoritative scroll offset source.
pub struct ScrollProbe;

impl ScrollProbe {
    /// Minimum body movement for the body offset to be trusted.
    const THRESHOLD: i64 = 1;

    /// Run the probe. The viewport always ends where it started: the step
    /// back is skipped when the nudge moved neither offset.
    ///
    /// A body-scrolled page already at the bottom cannot move, so it reads
    /// as [`ScrollSource::DocumentElement`].
    pub fn run<V: Viewport + ?Sized>(viewport: &mut V) -> ScrollSource {
        let before = viewport.scroll_top(ScrollSource::Body);
        let root_before = viewport.scroll_top(ScrollSource::DocumentElement);
        viewport.scroll_by(0, 1);
        let after = viewport.scroll_top(ScrollSource::Body);
        let root_after = viewport.scroll_top(ScrollSource::DocumentElement);
        if after != before || root_after != root_before {
            viewport.scroll_by(0, -1);
        }

        let source = if after - before < Self::THRESHOLD {
            ScrollSource::DocumentElement
        } else {
            ScrollSource::Body
        };
        debug!(delta = after - before, ?source, "scroll probe");
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn body_scrolling_page() {
        let mut doc = Document::new().with_scrolling(ScrollSource::Body, 500);
        assert_eq!(ScrollProbe::run(&mut doc), ScrollSource::Body);
        assert_eq!(doc.scroll_top(ScrollSource::Body), 0);
    }

    #[test]
    fn root_scrolling_page() {
        let mut doc = Document::new().with_scrolling(ScrollSource::DocumentElement, 500);
        assert_eq!(ScrollProbe::run(&mut doc), ScrollSource::DocumentElement);
        assert_eq!(doc.scroll_top(ScrollSource::DocumentElement), 0);
    }

    #[test]
    fn page_that_cannot_scroll_reads_root() {
        let mut doc = Document::new().with_scrolling(ScrollSource::Body, 0);
        assert_eq!(ScrollProbe::run(&mut doc), ScrollSource::DocumentElement);
    }

    #[test]
    fn probe_at_bottom_keeps_position() {
        let mut doc = Document::new().with_scrolling(ScrollSource::Body, 50);
        doc.scroll_by(0, 50);

        assert_eq!(ScrollProbe::run(&mut doc), ScrollSource::DocumentElement);
        assert_eq!(doc.scroll_top(ScrollSource::Body), 50);
    }

    #[test]
    fn probe_mid_page_keeps_position() {
        let mut doc = Document::new().with_scrolling(ScrollSource::DocumentElement, 50);
        doc.scroll_by(0, 20);

        assert_eq!(ScrollProbe::run(&mut doc), ScrollSource::DocumentElement);
        assert_eq!(doc.scroll_top(ScrollSource::DocumentElement), 20);
    }

    #[test]
    fn default_source_is_body() {
        assert_eq!(Document::new().scroll_source(), ScrollSource::Body);
    }
}
