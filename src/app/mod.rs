// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home page and the
//! category galleries.
//!
//! The `App` struct owns what outlives a single page: localization, the
//! catalog provider, the HTTP client, the prefetch cache and the scroll lock.
//! Pages borrow these while handling messages and are dropped on navigation.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::CatalogProvider;
use crate::config::{self, Config};
use crate::domain::artwork::{ArtworkId, Category};
use crate::gallery::{ImagePrefetchCache, ScrollLock};
use crate::i18n::fluent::I18n;
use crate::infrastructure::catalog::{CatalogSource, CsvCatalogProvider};
use crate::infrastructure::image::http_client;
use crate::ui::{gallery, home};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    screen: Screen,
    home: home::State,
    /// Mounted only while a gallery screen is shown.
    gallery: Option<gallery::State>,
    scroll_lock: ScrollLock,
    prefetch: ImagePrefetchCache<image::Handle>,
    client: reqwest::Client,
    provider: Arc<dyn CatalogProvider>,
    window_width: f32,
    /// Timestamp of the last animation tick.
    now: Instant,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("scroll_locked", &self.scroll_lock.is_locked())
            .field("prefetched", &self.prefetch.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the catalog root: CLI flag, then config, then the data directory.
fn catalog_location(flag: Option<String>, config: &Config) -> String {
    flag.or_else(|| config.catalog.source.clone())
        .or_else(|| {
            paths::get_default_catalog_dir().map(|dir| dir.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "catalog".to_string())
}

impl App {
    /// Builds the application around an already constructed provider.
    fn with_provider(i18n: I18n, config: Config, provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            home: home::State::new(&config.gallery),
            prefetch: ImagePrefetchCache::new(config.gallery.prefetch()),
            i18n,
            screen: Screen::Home,
            gallery: None,
            scroll_lock: ScrollLock::new(),
            client: http_client(),
            provider,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            now: Instant::now(),
            spinner_rotation: 0.0,
            config,
        }
    }

    /// Initializes application state and starts loading the first screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let location = catalog_location(flags.catalog, &config);
        log::info!("Reading catalog from {location}");
        let provider = CsvCatalogProvider::new(
            CatalogSource::from_location(&location),
            &config.catalog,
        );

        let mut app = Self::with_provider(i18n, config, Arc::new(provider));

        let start = match flags.category.as_deref() {
            Some(key) => match Category::from_key(key) {
                Some(category) => Screen::Gallery(category),
                None => {
                    log::warn!("Unknown category {key:?}, starting on the home page");
                    Screen::Home
                }
            },
            None => Screen::Home,
        };
        let task = app.show_screen(start, None);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.screen {
            Screen::Home => app_name,
            Screen::Gallery(category) => {
                format!("{} - {app_name}", self.i18n.tr(category.i18n_key()))
            }
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let lightbox_open = self
            .gallery
            .as_ref()
            .is_some_and(|gallery| gallery.lightbox().is_open());
        let event_sub = subscription::create_event_subscription(lightbox_open);
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    /// Whether a spinner or a fade-in is on screen.
    fn is_animating(&self) -> bool {
        match self.screen {
            Screen::Home => self.home.is_loading() || self.home.is_fading(self.now),
            Screen::Gallery(_) => self
                .gallery
                .as_ref()
                .is_some_and(|gallery| gallery.is_loading() || gallery.is_fading(self.now)),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => update::handle_navbar_message(self, navbar_message),
            Message::Home(home_message) => update::handle_home_message(self, home_message),
            Message::Gallery(category, gallery_message) => {
                update::handle_gallery_message(self, category, gallery_message)
            }
            Message::LightboxKey(key) => {
                update::forward_to_gallery(self, gallery::Message::Key(key))
            }
            Message::LightboxTouch(input) => {
                update::forward_to_gallery(self, gallery::Message::Touch(input))
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                Task::none()
            }
            Message::Tick(instant) => {
                update::handle_tick(self, instant);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            home: &self.home,
            gallery: self.gallery.as_ref(),
            scroll_lock: &self.scroll_lock,
            window_width: self.window_width,
            now: self.now,
            spinner_rotation: self.spinner_rotation,
        })
    }

    /// Switches to `screen`, unmounting the current gallery first.
    ///
    /// `open` names an artwork to show in the lightbox once the gallery's
    /// catalog has loaded.
    fn show_screen(&mut self, screen: Screen, open: Option<ArtworkId>) -> Task<Message> {
        if screen == self.screen && self.gallery.is_some() && open.is_none() {
            return Task::none();
        }
        if let Some(mut previous) = self.gallery.take() {
            previous.unmount(&mut self.scroll_lock);
        }
        log::debug!("Switching to {screen:?}");
        self.screen = screen;

        match screen {
            Screen::Home => self.home.load(&self.provider).map(Message::Home),
            Screen::Gallery(category) => {
                let mut gallery = gallery::State::new(category, &self.config.gallery);
                if let Some(id) = open {
                    gallery = gallery.with_pending_open(id);
                }
                let task = gallery.load(&self.provider);
                self.gallery = Some(gallery);
                task.map(move |message| Message::Gallery(category, message))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CatalogFuture;
    use crate::domain::artwork::ArtworkRecord;
    use crate::gallery::NavKey;

    struct FixedCatalog;

    impl CatalogProvider for FixedCatalog {
        fn list_artworks(&self, category: Category) -> CatalogFuture<Vec<ArtworkRecord>> {
            let artworks = artworks(category);
            Box::pin(async move { Ok(artworks) })
        }

        fn list_categories(&self, _category: Category) -> CatalogFuture<Vec<String>> {
            Box::pin(async { Ok(vec!["nature".to_string()]) })
        }

        fn list_featured(&self) -> CatalogFuture<Vec<ArtworkRecord>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    fn app() -> App {
        App::with_provider(I18n::default(), Config::default(), Arc::new(FixedCatalog))
    }

    fn artworks(category: Category) -> Vec<ArtworkRecord> {
        (0..3)
            .map(|index| {
                ArtworkRecord::new(
                    format!("{}-nature-{index}", category.id_prefix()),
                    format!("/{index}.jpg"),
                    category,
                    "nature",
                )
            })
            .collect()
    }

    fn mount_gallery(app: &mut App, category: Category) {
        let _ = app.show_screen(Screen::Gallery(category), None);
        let _ = app.update(Message::Gallery(
            category,
            gallery::Message::CatalogLoaded(Ok(artworks(category))),
        ));
    }

    #[test]
    fn navigating_away_releases_scroll_lock() {
        let mut app = app();
        mount_gallery(&mut app, Category::Mural);
        let _ = app.update(Message::Gallery(Category::Mural, gallery::Message::TileClicked(1)));
        assert!(app.scroll_lock.is_locked());

        let _ = app.show_screen(Screen::Home, None);
        assert!(!app.scroll_lock.is_locked());
        assert!(app.gallery.is_none());
    }

    #[test]
    fn late_messages_from_another_gallery_are_dropped() {
        let mut app = app();
        mount_gallery(&mut app, Category::Mural);

        let _ = app.update(Message::Gallery(
            Category::SinglePanelCanvas,
            gallery::Message::CatalogLoaded(Ok(Vec::new())),
        ));

        let gallery = app.gallery.as_ref().expect("gallery mounted");
        assert_eq!(gallery.grid().artworks().len(), 3);
    }

    #[test]
    fn keys_reach_the_open_lightbox() {
        let mut app = app();
        mount_gallery(&mut app, Category::Mural);
        let _ = app.update(Message::Gallery(Category::Mural, gallery::Message::TileClicked(2)));

        let _ = app.update(Message::LightboxKey(NavKey::ArrowRight));
        let gallery = app.gallery.as_ref().expect("gallery mounted");
        assert_eq!(
            gallery.lightbox().current_id(),
            Some(&ArtworkId::new("m-nature-0"))
        );

        let _ = app.update(Message::LightboxKey(NavKey::Escape));
        assert!(!app.scroll_lock.is_locked());
    }

    #[test]
    fn title_names_the_gallery() {
        let mut app = app();
        assert_eq!(app.title(), app.i18n.tr("app-title"));

        mount_gallery(&mut app, Category::Mural);
        assert!(app.title().starts_with(&app.i18n.tr("category-mural")));
    }

    #[test]
    fn catalog_flag_wins_over_config() {
        let mut config = Config::default();
        config.catalog.source = Some("/from/config".into());

        assert_eq!(
            catalog_location(Some("/from/flag".into()), &config),
            "/from/flag"
        );
        assert_eq!(catalog_location(None, &config), "/from/config");
    }
}
