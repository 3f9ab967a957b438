//! Markup builder - serializes the navigation tree into list markup.
//!
//! Both variants come out of the same traversal; they differ only in the
//! class names, the centering wrapper on top-level labels, the `#`
//! placeholder for empty targets, and the legacy short labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entry::{NavEntry, ROOT_LIST_ID, SITE_MENU, Tier};
use crate::dom::{Fragment, HoverBinding, HoverTrigger};
use crate::error::MenuError;
use crate::helpers::{html_escape, text_escape};

/// Which of the two serializations to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkupVariant {
    Standard,
    /// For old Internet Explorer releases.
    Legacy,
}

impl MarkupVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkupVariant::Standard => "standard",
            MarkupVariant::Legacy => "legacy",
        }
    }
}

impl fmt::Display for MarkupVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarkupVariant {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(MarkupVariant::Standard),
            "legacy" => Ok(MarkupVariant::Legacy),
            other => Err(MenuError::InvalidConfig {
                key: "variant".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Where the hosting page lives relative to the site root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathContext {
    Root,
    /// One directory below the root.
    Nested,
}

impl PathContext {
    /// Prefix applied to every non-empty link target.
    pub fn prefix(&self) -> &'static str {
        match self {
            PathContext::Root => "",
            PathContext::Nested => "../",
        }
    }

    /// Resolve a site-relative target for this context. Empty stays empty.
    pub fn resolve(&self, target: &str) -> String {
        if target.is_empty() {
            String::new()
        } else {
            format!("{}{target}", self.prefix())
        }
    }
}

impl FromStr for PathContext {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "root" => Ok(PathContext::Root),
            "nested" | "sub" => Ok(PathContext::Nested),
            other => Err(MenuError::InvalidConfig {
                key: "context".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// How hover behavior reaches the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerWiring {
    /// Bindings are registered on the document only.
    #[default]
    Structured,
    /// Additionally emit `onmouseover`/`onmouseout` attributes.
    Inline,
}

impl FromStr for HandlerWiring {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "structured" => Ok(HandlerWiring::Structured),
            "inline" => Ok(HandlerWiring::Inline),
            other => Err(MenuError::InvalidConfig {
                key: "handler wiring".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Both serializations of the menu for one path context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuMarkup {
    pub context: PathContext,
    pub standard: Fragment,
    pub legacy: Fragment,
}

impl MenuMarkup {
    /// Borrow one variant.
    pub fn get(&self, variant: MarkupVariant) -> &Fragment {
        match variant {
            MarkupVariant::Standard => &self.standard,
            MarkupVariant::Legacy => &self.legacy,
        }
    }

    /// Take one variant, dropping the other.
    pub fn into_variant(self, variant: MarkupVariant) -> Fragment {
        match variant {
            MarkupVariant::Standard => self.standard,
            MarkupVariant::Legacy => self.legacy,
        }
    }
}

/// Build both variants of the site menu.
pub fn build_site_markup(context: PathContext, wiring: HandlerWiring) -> MenuMarkup {
    build_markup(SITE_MENU, context, wiring)
}

/// Build both variants of an arbitrary entry tree.
pub fn build_markup(
    entries: &[NavEntry],
    context: PathContext,
    wiring: HandlerWiring,
) -> MenuMarkup {
    MenuMarkup {
        context,
        standard: MarkupBuilder::new(MarkupVariant::Standard, context, wiring).build(entries),
        legacy: MarkupBuilder::new(MarkupVariant::Legacy, context, wiring).build(entries),
    }
}

/// Single-variant serializer.
struct MarkupBuilder {
    variant: MarkupVariant,
    context: PathContext,
    wiring: HandlerWiring,
    out: Fragment,
}

impl MarkupBuilder {
    fn new(variant: MarkupVariant, context: PathContext, wiring: HandlerWiring) -> Self {
        Self {
            variant,
            context,
            wiring,
            out: Fragment::default(),
        }
    }

    fn legacy(&self) -> bool {
        self.variant == MarkupVariant::Legacy
    }

    fn build(mut self, entries: &[NavEntry]) -> Fragment {
        self.open_list(Tier::Top, ROOT_LIST_ID, false);
        self.write_items(entries, Tier::Top);
        self.out.html.push_str("</ul>");
        self.out
    }

    fn write_items(&mut self, entries: &[NavEntry], tier: Tier) {
        for (index, entry) in entries.iter().enumerate() {
            self.write_item(entry, tier, index);
        }
    }

    fn write_item(&mut self, entry: &NavEntry, tier: Tier, index: usize) {
        let home = tier == Tier::Top && index == 0;
        let group = entry.group_id.filter(|_| entry.is_group());

        let item_open = format!(r#"<li class="{}""#, self.item_class(tier, index, home));
        self.out.html.push_str(&item_open);
        if let Some(id) = group {
            self.hover(id, HoverTrigger::Item);
        }
        self.out.html.push('>');

        let anchor = format!(
            r#"<a class="{}" href="{}">{}</a>"#,
            self.anchor_class(tier, home, group.is_some()),
            html_escape(&self.href(entry.target)),
            self.label(entry, tier, home),
        );
        self.out.html.push_str(&anchor);

        if let Some(id) = group {
            let child_tier = tier.child();
            self.open_list(child_tier, id, true);
            self.write_items(entry.children, child_tier);
            self.out.html.push_str("</ul>");
        }

        self.out.html.push_str("</li>");
    }

    fn open_list(&mut self, tier: Tier, id: &'static str, hover: bool) {
        let list_open = format!(
            r#"<ul class="{}" id="{}""#,
            self.list_class(tier),
            html_escape(id)
        );
        self.out.html.push_str(&list_open);
        if hover {
            self.hover(id, HoverTrigger::List);
        }
        self.out.html.push('>');
        self.out.element_ids.push(id);
    }

    fn hover(&mut self, group_id: &'static str, trigger: HoverTrigger) {
        if self.wiring == HandlerWiring::Inline {
            self.out
                .html
                .push_str(&HoverBinding::inline_attributes(&html_escape(group_id)));
        }
        self.out.bindings.push(HoverBinding::new(group_id, trigger));
    }

    fn list_class(&self, tier: Tier) -> &'static str {
        match (self.variant, tier) {
            (MarkupVariant::Standard, Tier::Top) => "top",
            (MarkupVariant::Standard, Tier::List) => "list",
            (MarkupVariant::Standard, Tier::Sublist) => "sublist",
            (MarkupVariant::Legacy, Tier::Top) => "etop",
            (MarkupVariant::Legacy, Tier::List) => "elist",
            (MarkupVariant::Legacy, Tier::Sublist) => "esublist",
        }
    }

    fn item_class(&self, tier: Tier, index: usize, home: bool) -> &'static str {
        match (self.variant, tier) {
            (MarkupVariant::Standard, _) => self.list_class(tier),
            // The legacy home item keeps the plain class.
            (MarkupVariant::Legacy, Tier::Top) if home => "top",
            (MarkupVariant::Legacy, Tier::Top) => "etop",
            (MarkupVariant::Legacy, Tier::List) if index == 0 => "efirst",
            (MarkupVariant::Legacy, Tier::List) => "elist",
            (MarkupVariant::Legacy, Tier::Sublist) if index == 0 => "esubfirst",
            (MarkupVariant::Legacy, Tier::Sublist) => "esublist",
        }
    }

    fn anchor_class(&self, tier: Tier, home: bool, group: bool) -> &'static str {
        match (self.variant, tier) {
            (MarkupVariant::Standard, Tier::Top) if home => "toph",
            (MarkupVariant::Standard, Tier::Top) => "top",
            (MarkupVariant::Legacy, Tier::Top) => "etop",
            (MarkupVariant::Legacy, _) if group => "non",
            _ => "list",
        }
    }

    fn href(&self, target: &str) -> String {
        let resolved = self.context.resolve(target);
        if resolved.is_empty() && self.legacy() {
            "#".to_string()
        } else {
            resolved
        }
    }

    fn label(&self, entry: &NavEntry, tier: Tier, home: bool) -> String {
        let text = text_escape(entry.label_for(self.legacy()));
        match tier {
            Tier::Top if self.legacy() && home => format!("<center> {text} </center>"),
            Tier::Top if self.legacy() => format!("<center>{text}</center>"),
            _ => text,
        }
    }
}
