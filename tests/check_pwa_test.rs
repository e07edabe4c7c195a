// PWA checker runs against a generated project tree
mod common;

use std::fs;
use std::path::Path;

use pwa_assets::assets::{AssetConfig, IconGenerator, SplashGenerator};
use pwa_assets::check::{DEFAULT_BASE_PATH, PwaChecker};
use pwa_assets::layout::ProjectLayout;

const MANIFEST: &str = r##"{
  "name": "Busly",
  "short_name": "Busly",
  "start_url": "/busly/",
  "display": "standalone",
  "theme_color": "#667eea",
  "icons": [
    { "src": "https://example.github.io/busly/icons/icon-192x192.png", "sizes": "192x192", "type": "image/png" },
    { "src": "/busly/icons/icon-512x512.png", "sizes": "512x512", "type": "image/png" }
  ]
}"##;

const INDEX_HTML: &str = r##"<!doctype html>
<html>
<head>
  <link rel="manifest" href="/busly/manifest.json">
  <meta name="theme-color" content="#667eea">
  <link rel="apple-touch-icon" href="/busly/icons/icon-192x192.png">
  <meta name="apple-mobile-web-app-capable" content="yes">
  <link rel="apple-touch-startup-image" href="/busly/icons/splash-640x1136.png">
</head>
</html>"##;

fn generate_project(root: &Path) -> ProjectLayout {
    let layout = ProjectLayout::from_root(root);
    fs::create_dir_all(&layout.public_dir).expect("mkdir failed");
    common::write_rgba_logo(&layout.source_image, 128);

    let config = AssetConfig::fast();
    IconGenerator::new(config.clone())
        .generate(&layout.source_image, &layout.icons_dir)
        .expect("icon generation failed");
    let splash = SplashGenerator::new(config)
        .generate(&layout.source_image, &layout.icons_dir, "#667eea")
        .expect("splash generation failed");
    assert!(splash.is_complete());

    fs::write(layout.manifest_path(), MANIFEST).expect("write manifest failed");
    fs::write(layout.index_html_path(), INDEX_HTML).expect("write index failed");
    layout
}

#[test]
fn generated_project_passes_every_check() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let layout = generate_project(dir.path());

    let report = PwaChecker::new(layout, DEFAULT_BASE_PATH).run();

    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "unexpected failures: {:?}", failures);
    assert!(report.passed());
    assert_eq!(report.sections.len(), 4);
}

#[test]
fn detects_missing_and_resized_assets() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let layout = generate_project(dir.path());

    fs::remove_file(layout.icons_dir.join("icon-192x192.png")).expect("remove failed");
    image::RgbImage::new(10, 10)
        .save(layout.icons_dir.join("splash-750x1334.png"))
        .expect("overwrite failed");

    let report = PwaChecker::new(layout, DEFAULT_BASE_PATH).run();
    assert!(!report.passed());

    let failed: Vec<String> = report.failures().map(|item| item.description.clone()).collect();
    // icon-192x192 is referenced by the manifest and the icon list
    assert_eq!(failed.len(), 3, "{:?}", failed);
    assert!(failed.iter().any(|d| d.contains("splash-750x1334.png")));
    assert!(failed.iter().any(|d| d.contains("icon-192x192.png")));
}

#[test]
fn empty_project_fails_every_section() {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let report = PwaChecker::new(ProjectLayout::from_root(dir.path()), DEFAULT_BASE_PATH).run();

    assert!(report.sections.iter().all(|section| !section.passed()));
}
