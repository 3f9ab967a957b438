//! Theme engine rendering page snapshots with Tera.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use crate::dom::{Document, Element};
use crate::error::{MenuError, MenuResult};
use crate::render::RenderReport;

/// Template used for page snapshots.
pub const PAGE_TEMPLATE: &str = "page.html";

const BUILTIN_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
</head>
<body>
<div id="{{ container.id }}"{% if container.style %} style="{{ container.style }}"{% endif %}>
<div id="{{ zone.id }}">{{ zone.inner_html | safe }}</div>
</div>
<!-- menu: {{ report.variant }} variant, {{ report.context }} context -->
</body>
</html>
"#;

/// Element view passed to templates.
#[derive(Debug, Serialize)]
struct ElementView<'a> {
    id: &'a str,
    style: String,
    inner_html: &'a str,
}

impl<'a> From<&'a Element> for ElementView<'a> {
    fn from(element: &'a Element) -> Self {
        Self {
            id: &element.id,
            style: element.style.to_css(),
            inner_html: &element.inner_html,
        }
    }
}

/// Theme engine for rendering the menu region into a page.
pub struct ThemeEngine {
    /// Tera template engine instance.
    tera: Tera,
}

impl ThemeEngine {
    /// Create a theme engine with only the built-in page template.
    pub fn builtin() -> MenuResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, BUILTIN_PAGE)?;
        Ok(Self { tera })
    }

    /// Create a theme engine loading templates from the given directory.
    ///
    /// A `page.html` in the directory replaces the built-in page.
    pub fn new(template_dir: &Path) -> MenuResult<Self> {
        let pattern = template_dir.join("**/*.html");
        let pattern_str = pattern.to_str().ok_or_else(|| MenuError::InvalidConfig {
            key: "template directory".to_string(),
            value: template_dir.display().to_string(),
        })?;

        let mut tera = Tera::new(pattern_str)?;
        if tera.get_template(PAGE_TEMPLATE).is_err() {
            tera.add_raw_template(PAGE_TEMPLATE, BUILTIN_PAGE)?;
        }

        let template_names: Vec<_> = tera.get_template_names().collect();
        debug!(count = template_names.len(), "loaded templates");

        Ok(Self { tera })
    }

    /// Get the underlying Tera instance.
    pub fn tera(&self) -> &Tera {
        &self.tera
    }

    /// Render a page snapshot showing the menu container after a render.
    pub fn render_page(
        &self,
        document: &Document,
        container_id: &str,
        zone_id: &str,
        report: &RenderReport,
        title: &str,
    ) -> MenuResult<String> {
        let container = document
            .element(container_id)
            .ok_or_else(|| MenuError::ElementNotFound(container_id.to_string()))?;
        let zone = document
            .element(zone_id)
            .ok_or_else(|| MenuError::ElementNotFound(zone_id.to_string()))?;

        let mut context = Context::new();
        context.insert("title", title);
        context.insert("container", &ElementView::from(container));
        context.insert("zone", &ElementView::from(zone));
        context.insert("report", report);

        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::browser::Navigator;
    use crate::render::menu_init;

    fn rendered() -> (Document, RenderReport) {
        let mut doc = Document::new()
            .with_element("menu", "div")
            .with_element("zone", "div");
        let report = menu_init(&mut doc, &Navigator::new("Netscape", None, "5.0"));
        (doc, report)
    }

    #[test]
    fn builtin_page_contains_menu() {
        let engine = ThemeEngine::builtin().unwrap();
        let (doc, report) = rendered();
        let html = engine
            .render_page(&doc, "menu", "zone", &report, "Docs")
            .unwrap();

        assert!(html.contains("<title>Docs</title>"));
        assert!(html.contains(r#"<div id="menu" style="margin-left: 0px; display: block;">"#));
        assert!(html.contains(r#"<div id="zone"><ul class="top" id="top">"#));
        assert!(html.contains("standard variant, root context"));
        assert!(!html.contains("<link"));
    }

    #[test]
    fn missing_container_is_reported() {
        let engine = ThemeEngine::builtin().unwrap();
        let (doc, report) = rendered();
        let err = engine
            .render_page(&doc, "sidebar", "zone", &report, "Docs")
            .unwrap_err();
        assert!(matches!(err, MenuError::ElementNotFound(id) if id == "sidebar"));
    }
}
