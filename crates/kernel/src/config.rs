//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::menu::{HandlerWiring, MenuRegistry, ROOT_LIST_ID};
use crate::render::VariantPolicy;

/// Menu configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Id of the element wrapping the menu, made visible on render (default: menu).
    pub container_id: String,

    /// Id of the element the markup is written into (default: zone).
    pub zone_id: String,

    /// "structured" (default) or "inline" hover handlers.
    pub handler_wiring: HandlerWiring,

    /// "auto" (default) detects the browser; "standard"/"legacy" force a variant.
    pub variant_policy: VariantPolicy,

    /// Optional directory of Tera templates overriding the built-in page.
    pub template_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            container_id: "menu".to_string(),
            zone_id: "zone".to_string(),
            handler_wiring: HandlerWiring::Structured,
            variant_policy: VariantPolicy::Detect,
            template_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let container_id = lookup("MENU_CONTAINER_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.container_id);

        let zone_id = lookup("MENU_ZONE_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.zone_id);

        let registry = MenuRegistry::site();
        for (key, id) in [
            ("MENU_CONTAINER_ID", &container_id),
            ("MENU_ZONE_ID", &zone_id),
        ] {
            if id == ROOT_LIST_ID || registry.get(id).is_some() {
                bail!("{key} must not reuse the menu element id '{id}'");
            }
        }

        let handler_wiring = lookup("MENU_HANDLER_WIRING")
            .unwrap_or_else(|| "structured".to_string())
            .trim()
            .parse()
            .context("MENU_HANDLER_WIRING must be 'structured' or 'inline'")?;

        let variant_policy = lookup("MENU_VARIANT")
            .unwrap_or_else(|| "auto".to_string())
            .trim()
            .parse()
            .context("MENU_VARIANT must be 'auto', 'standard' or 'legacy'")?;

        let template_dir = lookup("MENU_TEMPLATE_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            container_id,
            zone_id,
            handler_wiring,
            variant_policy,
            template_dir,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::menu::MarkupVariant;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.container_id, "menu");
        assert_eq!(config.zone_id, "zone");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("MENU_CONTAINER_ID", "nav"),
            ("MENU_ZONE_ID", "nav-zone"),
            ("MENU_HANDLER_WIRING", "Inline"),
            ("MENU_VARIANT", "legacy"),
            ("MENU_TEMPLATE_DIR", "/srv/templates"),
        ]))
        .unwrap();
        assert_eq!(config.container_id, "nav");
        assert_eq!(config.zone_id, "nav-zone");
        assert_eq!(config.handler_wiring, HandlerWiring::Inline);
        assert_eq!(
            config.variant_policy,
            VariantPolicy::Force(MarkupVariant::Legacy)
        );
        assert_eq!(config.template_dir, Some(PathBuf::from("/srv/templates")));
    }

    #[test]
    fn blank_ids_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("MENU_ZONE_ID", "  ")])).unwrap();
        assert_eq!(config.zone_id, "zone");
    }

    #[test]
    fn ids_reused_by_the_menu_are_rejected() {
        for (key, id) in [
            ("MENU_ZONE_ID", "top"),
            ("MENU_ZONE_ID", "doc"),
            ("MENU_CONTAINER_ID", "reference"),
        ] {
            let err = Config::from_lookup(lookup(&[(key, id)])).unwrap_err();
            assert!(err.to_string().contains(key), "{err}");
        }
    }

    #[test]
    fn invalid_wiring_is_an_error() {
        let err = Config::from_lookup(lookup(&[("MENU_HANDLER_WIRING", "script")])).unwrap_err();
        assert!(err.to_string().contains("MENU_HANDLER_WIRING"));
    }

    #[test]
    fn invalid_variant_is_an_error() {
        let err = Config::from_lookup(lookup(&[("MENU_VARIANT", "ie")])).unwrap_err();
        assert!(err.to_string().contains("MENU_VARIANT"));
    }
}
