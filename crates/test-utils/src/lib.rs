//! Site menu test utilities.
//!
//! Helpers for integration testing: navigator fixtures for common
//! browsers, a page builder, and markup comparison helpers.

use serde_json::Value as JsonValue;
use sitemenu_kernel::browser::Navigator;
use sitemenu_kernel::dom::Document;
use sitemenu_kernel::scroll::ScrollSource;

/// Chrome on Linux.
pub fn chrome() -> Navigator {
    Navigator::new(
        "Netscape",
        Some("Google Inc."),
        "5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    )
}

/// Safari on macOS.
pub fn safari() -> Navigator {
    Navigator::new(
        "Netscape",
        Some("Apple Computer, Inc."),
        "5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15",
    )
}

/// Firefox, which reports an empty vendor.
pub fn firefox() -> Navigator {
    Navigator::new("Netscape", Some(""), "5.0 (X11)")
}

/// Internet Explorer 6.
pub fn msie6() -> Navigator {
    Navigator::new(
        "Microsoft Internet Explorer",
        None,
        "4.0 (compatible; MSIE 6.0; Windows NT 5.1)",
    )
}

/// A browser the classifier does not know.
pub fn unknown_browser() -> Navigator {
    Navigator::new("Opera", None, "9.80 (Windows NT 6.1; U; en)")
}

/// Build a navigator from a JSON fixture. Panics on a malformed fixture.
#[allow(clippy::expect_used)]
pub fn navigator_from_json(json: JsonValue) -> Navigator {
    serde_json::from_value(json).expect("navigator fixture must be valid JSON")
}

/// A test page builder.
#[derive(Debug, Clone)]
pub struct TestPage {
    container: Option<String>,
    zone: Option<String>,
    extra: Vec<(String, String)>,
    scrolling: Option<(ScrollSource, i64)>,
}

/// Page with the default `menu` container and `zone` target.
pub fn test_page() -> TestPage {
    TestPage {
        container: Some("menu".to_string()),
        zone: Some("zone".to_string()),
        extra: Vec::new(),
        scrolling: None,
    }
}

impl TestPage {
    /// Drop the menu container.
    pub fn without_container(mut self) -> Self {
        self.container = None;
        self
    }

    /// Drop the zone the markup is written into.
    pub fn without_zone(mut self) -> Self {
        self.zone = None;
        self
    }

    /// Add another element.
    pub fn with_element(mut self, id: &str, tag: &str) -> Self {
        self.extra.push((id.to_string(), tag.to_string()));
        self
    }

    /// Make the page scrollable.
    pub fn scrollable(mut self, source: ScrollSource, height: i64) -> Self {
        self.scrolling = Some((source, height));
        self
    }

    pub fn build(self) -> Document {
        let mut document = Document::new();
        if let Some(id) = &self.container {
            document = document.with_element(id, "div");
        }
        if let Some(id) = &self.zone {
            document = document.with_element(id, "div");
        }
        for (id, tag) in &self.extra {
            document = document.with_element(id, tag);
        }
        if let Some((source, height)) = self.scrolling {
            document = document.with_scrolling(source, height);
        }
        document
    }
}

/// Replace every `href="../` with `href="`, undoing the nested-context prefix.
pub fn strip_parent_prefix(html: &str) -> String {
    html.replace(r#"href="../"#, r#"href=""#)
}

/// Tag and class skeleton of a markup string: attribute values other than
/// `class` and `id` are blanked, text content is dropped.
pub fn skeleton(html: &str) -> String {
    let mut out = String::new();
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        let Some(len) = rest[start..].find('>') else {
            break;
        };
        let tag = &rest[start..=start + len];
        out.push_str(&blank_href(tag));
        rest = &rest[start + len + 1..];
    }
    out
}

fn blank_href(tag: &str) -> String {
    match tag.find(r#"href=""#) {
        Some(pos) => {
            let value_start = pos + r#"href=""#.len();
            let value_end = tag[value_start..]
                .find('"')
                .map(|i| value_start + i)
                .unwrap_or(tag.len());
            format!("{}{}", &tag[..value_start], &tag[value_end..])
        }
        None => tag.to_string(),
    }
}
