//! Menu renderer - picks a markup variant for the browser and mounts it.

use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, warn};

use crate::browser::{BrowserClassification, BrowserName, Navigator};
use crate::config::Config;
use crate::dom::Document;
use crate::error::MenuError;
use crate::menu::{HandlerWiring, MarkupVariant, PathContext, build_site_markup};
use crate::scroll::{ScrollProbe, ScrollSource};

/// Highest MSIE version bucket still served the legacy markup.
pub const LEGACY_MSIE_MAX_BUCKET: u8 = 7;

/// How the markup variant is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantPolicy {
    /// Classify the browser and apply [`select_variant`].
    #[default]
    Detect,
    /// Always serve the given variant.
    Force(MarkupVariant),
}

impl FromStr for VariantPolicy {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("auto") {
            return Ok(VariantPolicy::Detect);
        }
        s.parse().map(VariantPolicy::Force)
    }
}

/// Choose the markup variant for a classified browser.
///
/// Only MSIE at or below [`LEGACY_MSIE_MAX_BUCKET`] gets the legacy markup.
/// Because the bucket never exceeds 6, every MSIE classification lands there.
pub fn select_variant(classification: &BrowserClassification) -> MarkupVariant {
    match classification.name {
        BrowserName::Netscape | BrowserName::Safari | BrowserName::Chrome => {
            MarkupVariant::Standard
        }
        BrowserName::Msie if classification.version_bucket <= LEGACY_MSIE_MAX_BUCKET => {
            MarkupVariant::Legacy
        }
        BrowserName::Msie => MarkupVariant::Standard,
        BrowserName::Unknown => MarkupVariant::Standard,
    }
}

/// Outcome of one render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub context: PathContext,
    pub classification: BrowserClassification,
    pub variant: MarkupVariant,
    pub scroll_source: ScrollSource,
    /// False when nothing was written: the zone container was missing or
    /// the menu's element ids collide with page elements.
    pub mounted: bool,
}

/// Renders the site menu into a document.
#[derive(Debug, Clone)]
pub struct MenuRenderer {
    container_id: String,
    zone_id: String,
    wiring: HandlerWiring,
    policy: VariantPolicy,
}

impl MenuRenderer {
    pub fn new(config: &Config) -> Self {
        Self {
            container_id: config.container_id.clone(),
            zone_id: config.zone_id.clone(),
            wiring: config.handler_wiring,
            policy: config.variant_policy,
        }
    }

    /// Render the menu for a page in `context`.
    pub fn render_menu(
        &self,
        document: &mut Document,
        navigator: &Navigator,
        context: PathContext,
    ) -> RenderReport {
        document.show(&self.container_id);

        let markup = build_site_markup(context, self.wiring);

        let scroll_source = ScrollProbe::run(document);
        document.set_scroll_source(scroll_source);

        let classification = navigator.classify();
        let variant = match self.policy {
            VariantPolicy::Detect => select_variant(&classification),
            VariantPolicy::Force(variant) => variant,
        };
        debug!(
            browser = %classification.name,
            bucket = classification.version_bucket,
            %variant,
            ?context,
            "selected menu variant"
        );

        let mounted = if document.contains(&self.zone_id) {
            document.mount(&self.zone_id, markup.get(variant))
        } else {
            warn!(zone = %self.zone_id, "menu zone element missing; menu not written");
            false
        };

        RenderReport {
            context,
            classification,
            variant,
            scroll_source,
            mounted,
        }
    }

    /// Entry point for pages at the site root.
    pub fn menu_init(&self, document: &mut Document, navigator: &Navigator) -> RenderReport {
        self.render_menu(document, navigator, PathContext::Root)
    }

    /// Entry point for pages one directory below the site root.
    pub fn sub_menu_init(&self, document: &mut Document, navigator: &Navigator) -> RenderReport {
        self.render_menu(document, navigator, PathContext::Nested)
    }
}

impl Default for MenuRenderer {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Render the root-context menu with default configuration.
pub fn menu_init(document: &mut Document, navigator: &Navigator) -> RenderReport {
    MenuRenderer::default().menu_init(document, navigator)
}

/// Render the nested-context menu with default configuration.
pub fn sub_menu_init(document: &mut Document, navigator: &Navigator) -> RenderReport {
    MenuRenderer::default().sub_menu_init(document, navigator)
}
