//! Site menu command line.
//!
//! Usage:
//!   sitemenu render --context nested --app-name "Microsoft Internet Explorer" --app-version "4.0"
//!   sitemenu tree --json

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sitemenu_kernel::browser::Navigator;
use sitemenu_kernel::config::Config;
use sitemenu_kernel::dom::Document;
use sitemenu_kernel::menu::{MenuRegistry, NavEntry, PathContext, SITE_MENU};
use sitemenu_kernel::render::{MenuRenderer, RenderReport, VariantPolicy};
use sitemenu_kernel::theme::ThemeEngine;

/// Render and inspect the documentation site menu.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the menu markup selected for a browser.
    Render {
        #[command(flatten)]
        browser: BrowserArgs,

        /// Page location: root or nested.
        #[arg(long, default_value = "root")]
        context: PathContext,

        /// Variant policy: auto, standard or legacy (overrides MENU_VARIANT).
        #[arg(long)]
        variant: Option<VariantPolicy>,
    },

    /// Print the browser classification.
    Classify {
        #[command(flatten)]
        browser: BrowserArgs,
    },

    /// Print the navigation tree.
    Tree {
        /// Emit JSON instead of an indented outline.
        #[arg(long)]
        json: bool,
    },

    /// Render a standalone HTML page holding the menu.
    Page {
        #[command(flatten)]
        browser: BrowserArgs,

        /// Page location: root or nested.
        #[arg(long, default_value = "root")]
        context: PathContext,

        /// Page title.
        #[arg(long, default_value = "Documentation")]
        title: String,
    },

    /// Check the navigation tree invariants.
    Validate,
}

/// Browser identification, either as flags or a JSON navigator file.
#[derive(Args, Debug)]
struct BrowserArgs {
    /// navigator.appName
    #[arg(long, default_value = "Netscape")]
    app_name: String,

    /// navigator.vendor
    #[arg(long)]
    vendor: Option<String>,

    /// navigator.appVersion
    #[arg(long, default_value = "5.0")]
    app_version: String,

    /// JSON file with app_name, vendor and app_version; overrides the flags.
    #[arg(long)]
    navigator: Option<PathBuf>,
}

impl BrowserArgs {
    fn navigator(&self) -> Result<Navigator> {
        let Some(path) = &self.navigator else {
            return Ok(Navigator::new(
                &self.app_name,
                self.vendor.as_deref(),
                &self.app_version,
            ));
        };

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("invalid navigator JSON in {}", path.display()))
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env().context("failed to load configuration")?;

    match cli.command {
        Command::Render {
            browser,
            context,
            variant,
        } => {
            let mut config = config;
            if let Some(policy) = variant {
                config.variant_policy = policy;
            }
            let (document, report) = render(&config, &browser.navigator()?, context);
            if !report.mounted {
                bail!("menu zone '{}' missing", config.zone_id);
            }
            if let Some(zone) = document.element(&config.zone_id) {
                println!("{}", zone.inner_html);
            }
        }
        Command::Classify { browser } => {
            let classification = browser.navigator()?.classify();
            println!(
                "{}",
                serde_json::to_string_pretty(&classification)
                    .context("failed to serialize classification")?
            );
        }
        Command::Tree { json } => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(SITE_MENU).context("failed to serialize menu")?
                );
            } else {
                print_outline(SITE_MENU, 0);
            }
        }
        Command::Page {
            browser,
            context,
            title,
        } => {
            let engine = match &config.template_dir {
                Some(dir) => ThemeEngine::new(dir),
                None => ThemeEngine::builtin(),
            }
            .context("failed to initialize templates")?;

            let (document, report) = render(&config, &browser.navigator()?, context);
            let html = engine
                .render_page(
                    &document,
                    &config.container_id,
                    &config.zone_id,
                    &report,
                    &title,
                )
                .context("failed to render page")?;
            println!("{html}");
        }
        Command::Validate => {
            let registry = MenuRegistry::site();
            registry.validate().context("menu tree is invalid")?;
            println!(
                "ok: {} groups, {} links",
                registry.groups().len(),
                registry.leaves().len()
            );
        }
    }

    Ok(())
}

/// Render into a fresh page holding only the menu container and zone.
fn render(
    config: &Config,
    navigator: &Navigator,
    context: PathContext,
) -> (Document, RenderReport) {
    let mut document = Document::new()
        .with_element(&config.container_id, "div")
        .with_element(&config.zone_id, "div");

    let report = MenuRenderer::new(config).render_menu(&mut document, navigator, context);
    info!(
        browser = %report.classification.name,
        variant = %report.variant,
        mounted = report.mounted,
        "menu rendered"
    );
    (document, report)
}

fn print_outline(entries: &[NavEntry], depth: usize) {
    for entry in entries {
        let indent = "  ".repeat(depth);
        if entry.target.is_empty() {
            println!("{indent}{}", entry.label);
        } else {
            println!("{indent}{} -> {}", entry.label, entry.target);
        }
        print_outline(entry.children, depth + 1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
