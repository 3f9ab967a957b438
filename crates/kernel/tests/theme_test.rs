#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Theme engine tests.

use std::fs;
use std::path::PathBuf;

use sitemenu_kernel::MenuError;
use sitemenu_kernel::render::menu_init;
use sitemenu_kernel::theme::{PAGE_TEMPLATE, ThemeEngine};
use sitemenu_test_utils::{msie6, test_page};

fn template_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sitemenu-theme-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_builtin_engine_has_page() {
    let engine = ThemeEngine::builtin().unwrap();
    assert!(engine.tera().get_template(PAGE_TEMPLATE).is_ok());
}

#[test]
fn test_page_snapshot_legacy() {
    let engine = ThemeEngine::builtin().unwrap();
    let mut doc = test_page().build();
    let report = menu_init(&mut doc, &msie6());

    let html = engine
        .render_page(&doc, "menu", "zone", &report, "QVCS")
        .unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<ul class="etop" id="top">"#));
    assert!(html.contains("legacy variant, root context"));
}

#[test]
fn test_template_dir_overrides_page() {
    let dir = template_dir("override");
    fs::write(
        dir.join("page.html"),
        "<main>{{ zone.inner_html | safe }}</main>",
    )
    .unwrap();

    let engine = ThemeEngine::new(&dir).unwrap();
    let mut doc = test_page().build();
    let report = menu_init(&mut doc, &msie6());
    let html = engine
        .render_page(&doc, "menu", "zone", &report, "ignored")
        .unwrap();

    assert!(html.starts_with(r#"<main><ul class="etop""#));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_template_dir_without_page_falls_back() {
    let dir = template_dir("fallback");
    fs::write(dir.join("other.html"), "<p>other</p>").unwrap();

    let engine = ThemeEngine::new(&dir).unwrap();
    assert!(engine.tera().get_template(PAGE_TEMPLATE).is_ok());
    assert!(engine.tera().get_template("other.html").is_ok());
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_zone_is_an_error() {
    let engine = ThemeEngine::builtin().unwrap();
    let mut doc = test_page().without_zone().build();
    let report = menu_init(&mut doc, &msie6());

    let err = engine
        .render_page(&doc, "menu", "zone", &report, "QVCS")
        .unwrap_err();
    assert!(matches!(err, MenuError::ElementNotFound(_)));
}
