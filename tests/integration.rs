// SPDX-License-Identifier: MPL-2.0
use print_gallery::application::port::CatalogProvider;
use print_gallery::config::{self, CatalogConfig, Config};
use print_gallery::domain::artwork::{ArtworkId, Category, SubcategoryFilter};
use print_gallery::gallery::{
    GalleryGrid, ImageLoadTracker, LightboxEffect, LightboxNavigator, NavKey, ScrollLock,
    TouchInput,
};
use print_gallery::i18n::fluent::I18n;
use print_gallery::infrastructure::catalog::{CatalogSource, CsvCatalogProvider};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

fn write_csv(root: &Path, dir: &str, tag: &str, urls: &[&str]) {
    let category_dir = root.join(dir);
    fs::create_dir_all(&category_dir).expect("mkdir");
    let mut content = String::from("image_url\n");
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }
    fs::write(category_dir.join(format!("{tag}.csv")), content).expect("write csv");
}

fn mural_catalog(tags: &[&str]) -> CatalogConfig {
    CatalogConfig {
        latency_ms: Some(0),
        mural_subcategories: Some(tags.iter().map(|tag| tag.to_string()).collect()),
        canvas_subcategories: Some(Vec::new()),
        single_canvas_subcategories: Some(Vec::new()),
        ..CatalogConfig::default()
    }
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.gallery.swipe_threshold_px = Some(80.0);
    config::save_to_path(&config, &path).expect("save config");

    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.gallery.swipe_threshold(), 80.0);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("gallery-retry"), "Réessayer");
}

#[test]
fn unreadable_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[gallery\nswipe = ").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[tokio::test]
async fn missing_subcategory_contributes_nothing() {
    let dir = tempdir().expect("temp dir");
    write_csv(dir.path(), "murals", "nature", &["/nature-1.jpg", "\"/nature-2.jpg\""]);
    write_csv(
        dir.path(),
        "murals",
        "kids",
        &["https://cdn.example.com/kids-1.jpg, Kids room"],
    );

    let provider = CsvCatalogProvider::new(
        CatalogSource::Directory(dir.path().to_path_buf()),
        &mural_catalog(&["nature", "ceiling", "kids"]),
    );

    let artworks = provider
        .list_artworks(Category::Mural)
        .await
        .expect("catalog loads");
    let ids: Vec<_> = artworks.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["m-nature-0", "m-nature-1", "m-kids-0"]);
    assert_eq!(artworks[2].image_url, "https://cdn.example.com/kids-1.jpg");
    assert!(artworks.iter().all(|a| a.title.is_none()));

    let empty = provider
        .list_artworks(Category::SinglePanelCanvas)
        .await
        .expect("empty category is not an error");
    assert!(empty.is_empty());
}

#[tokio::test]
async fn browsing_a_filtered_gallery_in_the_lightbox() {
    let dir = tempdir().expect("temp dir");
    write_csv(dir.path(), "murals", "ceiling", &["/c0.jpg", "/c1.jpg"]);
    write_csv(dir.path(), "murals", "nature", &["/n0.jpg", "/n1.jpg", "/n2.jpg"]);

    let provider = CsvCatalogProvider::new(
        CatalogSource::Directory(dir.path().to_path_buf()),
        &mural_catalog(&["ceiling", "nature"]),
    );
    let mut grid = GalleryGrid::new();
    grid.set_artworks(provider.list_artworks(Category::Mural).await.expect("list"));
    grid.set_subcategories(provider.list_categories(Category::Mural).await.expect("tags"));
    assert_eq!(grid.tiles().count(), 5);

    let mut lock = ScrollLock::new();
    let mut lightbox = LightboxNavigator::new(50.0);

    // Open the last ceiling artwork, then step past the end of the category.
    let id = grid.open_intent(1).expect("tile 1 exists");
    let opened = lightbox.open_at(&id, grid.artworks(), &mut lock, 12.0);
    assert!(matches!(opened, LightboxEffect::Opened { .. }));
    assert!(lock.is_locked());

    lightbox.handle_key(NavKey::ArrowRight, grid.artworks(), &mut lock);
    assert_eq!(lightbox.current_id(), Some(&ArtworkId::new("m-nature-0")));

    // Narrowing the grid keeps the lightbox open on an artwork no longer listed.
    assert!(grid.set_filter(SubcategoryFilter::from_tag("ceiling")));
    assert!(lightbox.is_open());
    assert_eq!(lightbox.navigation_info(grid.artworks()).current_index, None);

    // Next falls back to the first listed artwork, previous to the last.
    lightbox.next(grid.artworks(), &mut lock);
    assert_eq!(lightbox.current_id(), Some(&ArtworkId::new("m-ceiling-0")));
    lightbox.previous(grid.artworks(), &mut lock);
    assert_eq!(lightbox.current_id(), Some(&ArtworkId::new("m-ceiling-1")));

    // A single-finger swipe to the left advances exactly once.
    lightbox.handle_touch(TouchInput::Start { finger: 1, x: 300.0 }, grid.artworks(), &mut lock);
    lightbox.handle_touch(TouchInput::Move { finger: 1, x: 220.0 }, grid.artworks(), &mut lock);
    lightbox.handle_touch(TouchInput::Move { finger: 1, x: 100.0 }, grid.artworks(), &mut lock);
    lightbox.handle_touch(TouchInput::End { finger: 1 }, grid.artworks(), &mut lock);
    assert_eq!(lightbox.current_id(), Some(&ArtworkId::new("m-ceiling-0")));

    lightbox.handle_key(NavKey::Escape, grid.artworks(), &mut lock);
    assert!(!lightbox.is_open());
    assert!(!lock.is_locked());
}

#[test]
fn broken_image_tries_its_fallback_once() {
    let mut tracker: ImageLoadTracker = ImageLoadTracker::new(Duration::ZERO);
    let id = ArtworkId::new("s-buddha-0");

    assert_eq!(tracker.request(&id, "/primary.jpg").as_deref(), Some("/primary.jpg"));
    assert!(tracker.request(&id, "/primary.jpg").is_none());

    let retry = tracker.mark_failed(&id, Some("/fallback.jpg"));
    assert_eq!(
        retry,
        print_gallery::gallery::FailureOutcome::RetryWith("/fallback.jpg".to_string())
    );
    assert_eq!(
        tracker.mark_failed(&id, Some("/fallback.jpg")),
        print_gallery::gallery::FailureOutcome::GaveUp
    );
    assert!(!tracker.is_loaded(&id));
}
