//! Document, elements and the visibility toggle.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{trace, warn};

use super::events::{HoverBinding, HoverTrigger};
use crate::scroll::{ScrollSource, Viewport};

/// CSS `display` state of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Left to the stylesheet.
    #[default]
    Unset,
    Block,
    None,
}

/// Inline style the menu manipulates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub display: Display,
    pub margin_left_px: Option<i32>,
}

impl Style {
    /// Inline `style` attribute value; empty when nothing is set.
    pub fn to_css(&self) -> String {
        let mut css = Vec::new();
        if let Some(px) = self.margin_left_px {
            css.push(format!("margin-left: {px}px;"));
        }
        match self.display {
            Display::Unset => {}
            Display::Block => css.push("display: block;".to_string()),
            Display::None => css.push("display: none;".to_string()),
        }
        css.join(" ")
    }
}

/// An identified element of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub style: Style,
    pub inner_html: String,
    /// Container this element was mounted into, if it came from a fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mounted_in: Option<String>,
}

impl Element {
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            style: Style::default(),
            inner_html: String::new(),
            mounted_in: None,
        }
    }

    /// Whether the element's own style makes it visible.
    pub fn is_visible(&self) -> bool {
        self.style.display != Display::None
    }
}

/// Markup plus the identified elements and hover bindings it introduces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub html: String,
    /// Ids of the `ul` elements created by the markup, in document order.
    pub element_ids: Vec<&'static str>,
    pub bindings: Vec<HoverBinding>,
}

/// A page: elements by id, hover bindings and viewport state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    bindings: Vec<HoverBinding>,
    /// Offset the engine moves when scrolled; browsers disagree on this.
    scrolling_element: ScrollSource,
    scroll_height: i64,
    body_scroll_top: i64,
    root_scroll_top: i64,
    scroll_source: ScrollSource,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element (builder form).
    pub fn with_element(mut self, id: &str, tag: &str) -> Self {
        self.insert(Element::new(id, tag));
        self
    }

    /// Configure which offset scrolling moves and how far the page can scroll.
    pub fn with_scrolling(mut self, scrolling_element: ScrollSource, scroll_height: i64) -> Self {
        self.scrolling_element = scrolling_element;
        self.scroll_height = scroll_height.max(0);
        self
    }

    /// Insert or replace an element.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// All elements, ordered by id.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Make an element visible with zero left margin. No-op when absent.
    pub fn show(&mut self, id: &str) {
        let Some(element) = self.elements.get_mut(id) else {
            trace!(id = %id, "show: no such element");
            return;
        };
        element.style.margin_left_px = Some(0);
        element.style.display = Display::Block;
    }

    /// Hide an element. No-op when absent.
    pub fn hide(&mut self, id: &str) {
        let Some(element) = self.elements.get_mut(id) else {
            trace!(id = %id, "hide: no such element");
            return;
        };
        element.style.display = Display::None;
    }

    /// Replace the inner markup of an element. Returns false when absent.
    pub fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.inner_html = html.to_string();
                true
            }
            None => false,
        }
    }

    /// Write a fragment into a container.
    ///
    /// Elements and bindings from the previous fragment mounted in the same
    /// container are dropped first. Returns false, leaving the document
    /// untouched, when the container is absent or when a fragment id is
    /// already taken by an element that did not come from this container.
    pub fn mount(&mut self, container_id: &str, fragment: &Fragment) -> bool {
        if !self.contains(container_id) {
            return false;
        }

        let conflicts = self.mount_conflicts(container_id, fragment);
        if !conflicts.is_empty() {
            warn!(
                container = %container_id,
                ids = ?conflicts,
                "fragment ids collide with page elements; not mounted"
            );
            return false;
        }

        self.set_inner_html(container_id, &fragment.html);

        let stale: Vec<String> = self
            .elements
            .values()
            .filter(|e| e.mounted_in.as_deref() == Some(container_id))
            .map(|e| e.id.clone())
            .collect();
        for id in &stale {
            self.elements.remove(id);
        }
        self.bindings
            .retain(|b| !stale.iter().any(|id| id == b.group_id));

        for id in &fragment.element_ids {
            let mut element = Element::new(id, "ul");
            element.mounted_in = Some(container_id.to_string());
            self.insert(element);
        }
        self.bindings.extend(fragment.bindings.iter().copied());

        trace!(
            container = %container_id,
            removed = stale.len(),
            added = fragment.element_ids.len(),
            "mounted fragment"
        );
        true
    }

    /// Fragment ids already used by the container itself or by elements
    /// not mounted into it.
    pub fn mount_conflicts(&self, container_id: &str, fragment: &Fragment) -> Vec<&'static str> {
        fragment
            .element_ids
            .iter()
            .copied()
            .filter(|&id| {
                id == container_id
                    || self
                        .elements
                        .get(id)
                        .is_some_and(|e| e.mounted_in.as_deref() != Some(container_id))
            })
            .collect()
    }

    /// Registered hover bindings.
    pub fn bindings(&self) -> &[HoverBinding] {
        &self.bindings
    }

    /// Dispatch pointer-enter on a group's trigger. Returns whether a binding fired.
    pub fn pointer_enter(&mut self, group_id: &str, trigger: HoverTrigger) -> bool {
        if !self.has_binding(group_id, trigger) {
            return false;
        }
        self.show(group_id);
        true
    }

    /// Dispatch pointer-leave on a group's trigger. Returns whether a binding fired.
    pub fn pointer_leave(&mut self, group_id: &str, trigger: HoverTrigger) -> bool {
        if !self.has_binding(group_id, trigger) {
            return false;
        }
        self.hide(group_id);
        true
    }

    fn has_binding(&self, group_id: &str, trigger: HoverTrigger) -> bool {
        self.bindings
            .iter()
            .any(|b| b.group_id == group_id && b.trigger == trigger)
    }

    /// Which scroll offset is authoritative, as last decided by the probe.
    pub fn scroll_source(&self) -> ScrollSource {
        self.scroll_source
    }

    pub fn set_scroll_source(&mut self, source: ScrollSource) {
        self.scroll_source = source;
    }
}

impl Viewport for Document {
    fn scroll_by(&mut self, _dx: i64, dy: i64) {
        let height = self.scroll_height;
        let offset = match self.scrolling_element {
            ScrollSource::Body => &mut self.body_scroll_top,
            ScrollSource::DocumentElement => &mut self.root_scroll_top,
        };
        *offset = (*offset + dy).clamp(0, height);
    }

    fn scroll_top(&self, source: ScrollSource) -> i64 {
        match source {
            ScrollSource::Body => self.body_scroll_top,
            ScrollSource::DocumentElement => self.root_scroll_top,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn page() -> Document {
        Document::new()
            .with_element("menu", "div")
            .with_element("zone", "div")
            .with_element("doc", "ul")
    }

    #[test]
    fn show_sets_block_and_zero_margin() {
        let mut doc = page();
        doc.show("doc");
        let style = doc.element("doc").unwrap().style;
        assert_eq!(style.display, Display::Block);
        assert_eq!(style.margin_left_px, Some(0));
    }

    #[test]
    fn hide_sets_none() {
        let mut doc = page();
        doc.hide("doc");
        assert!(!doc.element("doc").unwrap().is_visible());
    }

    #[test]
    fn toggles_on_missing_element_change_nothing() {
        let mut doc = page();
        let before: Vec<_> = doc.elements().cloned().collect();
        doc.show("nope");
        doc.hide("nope");
        let after: Vec<_> = doc.elements().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn last_toggle_wins() {
        let mut a = page();
        a.show("doc");
        a.hide("doc");
        let mut b = page();
        b.hide("doc");

        // Visibility matches; the margin set by show is left in place.
        assert_eq!(
            a.element("doc").unwrap().style,
            Style {
                display: Display::None,
                margin_left_px: Some(0),
            }
        );
        assert_eq!(
            b.element("doc").unwrap().style,
            Style {
                display: Display::None,
                margin_left_px: None,
            }
        );
        assert_eq!(
            a.element("doc").unwrap().is_visible(),
            b.element("doc").unwrap().is_visible()
        );

        a.show("doc");
        assert_eq!(a.element("doc").unwrap().style.display, Display::Block);
    }

    #[test]
    fn style_css() {
        let style = Style {
            display: Display::Block,
            margin_left_px: Some(0),
        };
        assert_eq!(style.to_css(), "margin-left: 0px; display: block;");
        assert_eq!(Style::default().to_css(), "");
    }

    fn fragment(ids: &[&'static str]) -> Fragment {
        Fragment {
            html: format!("<ul>{}</ul>", ids.join(",")),
            element_ids: ids.to_vec(),
            bindings: ids
                .iter()
                .map(|&id| HoverBinding::new(id, HoverTrigger::Item))
                .collect(),
        }
    }

    #[test]
    fn mount_into_missing_container_is_rejected() {
        let mut doc = Document::new();
        assert!(!doc.mount("zone", &fragment(&["a"])));
        assert!(!doc.contains("a"));
        assert!(doc.bindings().is_empty());
    }

    #[test]
    fn mount_replaces_previous_fragment() {
        let mut doc = page();
        assert!(doc.mount("zone", &fragment(&["a", "b"])));
        assert!(doc.contains("a"));
        assert_eq!(doc.bindings().len(), 2);

        assert!(doc.mount("zone", &fragment(&["c"])));
        assert!(!doc.contains("a"));
        assert!(!doc.contains("b"));
        assert!(doc.contains("c"));
        assert_eq!(doc.bindings(), &[HoverBinding::new("c", HoverTrigger::Item)]);
        assert_eq!(doc.element("zone").unwrap().inner_html, "<ul>c</ul>");
    }

    #[test]
    fn mount_leaves_page_elements_alone() {
        let mut doc = page();
        doc.set_inner_html("doc", "<p>page body</p>");

        assert_eq!(doc.mount_conflicts("zone", &fragment(&["a", "doc"])), vec!["doc"]);
        assert!(!doc.mount("zone", &fragment(&["a", "doc"])));

        let own = doc.element("doc").unwrap();
        assert_eq!(own.tag, "ul");
        assert_eq!(own.inner_html, "<p>page body</p>");
        assert!(own.mounted_in.is_none());
        assert!(!doc.contains("a"));
        assert!(doc.bindings().is_empty());
        assert!(doc.element("zone").unwrap().inner_html.is_empty());
    }

    #[test]
    fn mount_rejects_fragment_reusing_container_id() {
        let mut doc = page();
        assert!(!doc.mount("zone", &fragment(&["zone"])));
        assert_eq!(doc.element("zone").unwrap().tag, "div");
    }

    #[test]
    fn remount_reuses_own_ids() {
        let mut doc = page();
        assert!(doc.mount("zone", &fragment(&["a"])));
        assert!(doc.mount_conflicts("zone", &fragment(&["a"])).is_empty());
        assert!(doc.mount("zone", &fragment(&["a"])));
        assert_eq!(doc.bindings().len(), 1);
    }

    #[test]
    fn pointer_events_follow_bindings() {
        let mut doc = page();
        doc.mount("zone", &fragment(&["a"]));

        assert!(doc.pointer_enter("a", HoverTrigger::Item));
        assert_eq!(doc.element("a").unwrap().style.display, Display::Block);

        // No list binding was registered for "a".
        assert!(!doc.pointer_leave("a", HoverTrigger::List));
        assert!(doc.element("a").unwrap().is_visible());

        assert!(doc.pointer_leave("a", HoverTrigger::Item));
        assert!(!doc.element("a").unwrap().is_visible());
    }

    #[test]
    fn scrolling_clamps_to_page() {
        let mut doc = Document::new().with_scrolling(ScrollSource::Body, 10);
        doc.scroll_by(0, -5);
        assert_eq!(doc.scroll_top(ScrollSource::Body), 0);
        doc.scroll_by(0, 25);
        assert_eq!(doc.scroll_top(ScrollSource::Body), 10);
        assert_eq!(doc.scroll_top(ScrollSource::DocumentElement), 0);
    }
}
