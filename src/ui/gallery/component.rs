// SPDX-License-Identifier: MPL-2.0
//! Gallery page component: catalog loading, filtering, the thumbnail grid
//! and the lightbox, wired to the toolkit-independent state in
//! [`crate::gallery`].
//!
//! A `State` lives exactly as long as the page is mounted. The page-level
//! scroll lock, the prefetch cache and the catalog provider are shared with
//! the application and lent to [`State::update`] through [`Services`].

use super::{filter_bar, grid_view, lightbox_view, status};
use crate::application::port::{CatalogError, CatalogProvider};
use crate::config::GalleryConfig;
use crate::domain::artwork::{ArtworkId, ArtworkRecord, Category, SubcategoryFilter};
use crate::error::ImageLoadError;
use crate::gallery::{
    FailureOutcome, GalleryGrid, GridBreakpoints, ImageLoadTracker, ImagePrefetchCache,
    LightboxEffect, LightboxNavigator, LoadStatus, NavKey, PrefetchPlanner, ScrollLock,
    TouchInput,
};
use crate::i18n::fluent::I18n;
use crate::infrastructure::image::{load_image, with_size_hint, LoadedImage};
use crate::ui::design_tokens::sizing;
use iced::widget::{image, Column, Stack};
use iced::{Element, Length, Task};
use std::sync::Arc;
use std::time::Instant;

/// Which tracker an image load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Thumbnail,
    Full,
}

#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded(Result<Vec<ArtworkRecord>, CatalogError>),
    SubcategoriesLoaded(Result<Vec<String>, CatalogError>),
    RetryRequested,
    FilterSelected(SubcategoryFilter),
    TileClicked(usize),
    ImageLoaded {
        slot: ImageSlot,
        id: ArtworkId,
        result: Result<LoadedImage, ImageLoadError>,
    },
    Prefetched {
        source: String,
        result: Result<LoadedImage, ImageLoadError>,
    },
    CloseRequested,
    NextRequested,
    PreviousRequested,
    /// A press on the enlarged artwork; swallowed so it does not reach the backdrop.
    ContentPressed,
    Key(NavKey),
    Touch(TouchInput),
}

/// Catalog loading phase of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Failed(CatalogError),
}

/// Application-owned resources the page borrows while handling a message.
pub struct Services<'a> {
    pub provider: &'a Arc<dyn CatalogProvider>,
    pub client: &'a reqwest::Client,
    pub scroll_lock: &'a mut ScrollLock,
    pub prefetch: &'a mut ImagePrefetchCache<image::Handle>,
}

/// Per-frame inputs to [`State::view`].
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub window_width: f32,
    pub scroll_locked: bool,
    pub scroll_compensation: f32,
    pub now: Instant,
    pub spinner_rotation: f32,
}

#[derive(Debug)]
pub struct State {
    category: Category,
    phase: Phase,
    grid: GalleryGrid,
    lightbox: LightboxNavigator,
    thumbnails: ImageLoadTracker<image::Handle>,
    full_images: ImageLoadTracker<image::Handle>,
    planner: PrefetchPlanner,
    breakpoints: GridBreakpoints,
    thumbnail_width: u32,
    show_titles: bool,
    /// Artwork to open once the catalog arrives (from a homepage highlight).
    pending_open: Option<ArtworkId>,
}

impl State {
    #[must_use]
    pub fn new(category: Category, config: &GalleryConfig) -> Self {
        let fade = config.fade_duration();
        Self {
            category,
            phase: Phase::Loading,
            grid: GalleryGrid::new(),
            lightbox: LightboxNavigator::new(config.swipe_threshold()),
            thumbnails: ImageLoadTracker::new(fade),
            full_images: ImageLoadTracker::new(fade),
            planner: PrefetchPlanner::new(config.prefetch().radius),
            breakpoints: config.breakpoints(),
            thumbnail_width: config.thumbnail_width(),
            show_titles: config.show_titles(),
            pending_open: None,
        }
    }

    /// Opens the lightbox on `id` as soon as the catalog has loaded.
    #[must_use]
    pub fn with_pending_open(mut self, id: ArtworkId) -> Self {
        self.pending_open = Some(id);
        self
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn grid(&self) -> &GalleryGrid {
        &self.grid
    }

    #[must_use]
    pub fn lightbox(&self) -> &LightboxNavigator {
        &self.lightbox
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ImageLoadTracker<image::Handle> {
        &self.thumbnails
    }

    #[must_use]
    pub fn full_images(&self) -> &ImageLoadTracker<image::Handle> {
        &self.full_images
    }

    #[must_use]
    pub fn breakpoints(&self) -> GridBreakpoints {
        self.breakpoints
    }

    #[must_use]
    pub fn show_titles(&self) -> bool {
        self.show_titles
    }

    /// Artwork currently shown in the lightbox.
    ///
    /// Resolved against the whole catalog so the overlay stays up when the
    /// filter hides the open artwork; only the position indicator goes away.
    #[must_use]
    pub fn current_artwork(&self) -> Option<&ArtworkRecord> {
        self.lightbox.current(self.grid.all_artworks())
    }

    /// Whether a spinner is on screen and needs animation ticks.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        if self.phase == Phase::Loading {
            return true;
        }
        self.lightbox.current_id().is_some_and(|id| {
            matches!(self.full_images.status(id), LoadStatus::Loading { .. })
        })
    }

    /// Whether an image is mid fade-in and needs animation ticks.
    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.thumbnails.is_fading(now) || self.full_images.is_fading(now)
    }

    /// Starts (or restarts) the catalog load.
    pub fn load(&mut self, provider: &Arc<dyn CatalogProvider>) -> Task<Message> {
        self.phase = Phase::Loading;
        log::debug!("Loading catalog for {}", self.category);
        Task::batch([
            Task::perform(provider.list_artworks(self.category), Message::CatalogLoaded),
            Task::perform(
                provider.list_categories(self.category),
                Message::SubcategoriesLoaded,
            ),
        ])
    }

    /// Releases everything the page holds outside itself before it is dropped.
    pub fn unmount(&mut self, scroll_lock: &mut ScrollLock) {
        self.lightbox.close(scroll_lock);
    }

    pub fn update(&mut self, message: Message, services: Services<'_>) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(artworks)) => {
                log::debug!("{}: {} artworks", self.category, artworks.len());
                self.grid.set_artworks(artworks);
                self.phase = Phase::Ready;
                let thumbnails = self.request_thumbnails(services.client);
                let opened = match self.pending_open.take() {
                    Some(id) => {
                        let effect = self.lightbox.open_at(
                            &id,
                            self.grid.artworks(),
                            services.scroll_lock,
                            sizing::SCROLLBAR_WIDTH,
                        );
                        self.apply(effect, services)
                    }
                    None => Task::none(),
                };
                Task::batch([thumbnails, opened])
            }
            Message::CatalogLoaded(Err(err)) => {
                log::warn!("Catalog for {} failed to load: {err}", self.category);
                self.phase = Phase::Failed(err);
                Task::none()
            }
            Message::SubcategoriesLoaded(Ok(tags)) => {
                if !tags.is_empty() {
                    self.grid.set_subcategories(tags);
                }
                Task::none()
            }
            Message::SubcategoriesLoaded(Err(err)) => {
                log::debug!("Subcategories for {} unavailable: {err}", self.category);
                Task::none()
            }
            Message::RetryRequested => self.load(services.provider),
            Message::FilterSelected(filter) => {
                if self.grid.set_filter(filter) {
                    self.request_thumbnails(services.client)
                } else {
                    Task::none()
                }
            }
            Message::TileClicked(index) => match self.grid.open_intent(index) {
                Some(id) => {
                    let effect = self.lightbox.open_at(
                        &id,
                        self.grid.artworks(),
                        services.scroll_lock,
                        sizing::SCROLLBAR_WIDTH,
                    );
                    self.apply(effect, services)
                }
                None => Task::none(),
            },
            Message::CloseRequested => {
                let effect = self.lightbox.close(services.scroll_lock);
                self.apply(effect, services)
            }
            Message::NextRequested => {
                let effect = self.lightbox.next(self.grid.artworks(), services.scroll_lock);
                self.apply(effect, services)
            }
            Message::PreviousRequested => {
                let effect = self
                    .lightbox
                    .previous(self.grid.artworks(), services.scroll_lock);
                self.apply(effect, services)
            }
            Message::ContentPressed => Task::none(),
            Message::Key(key) => {
                let effect =
                    self.lightbox
                        .handle_key(key, self.grid.artworks(), services.scroll_lock);
                self.apply(effect, services)
            }
            Message::Touch(input) => {
                let effect =
                    self.lightbox
                        .handle_touch(input, self.grid.artworks(), services.scroll_lock);
                self.apply(effect, services)
            }
            Message::ImageLoaded { slot, id, result } => {
                self.on_image_loaded(slot, id, result, services.client)
            }
            Message::Prefetched { source, result } => {
                match result {
                    Ok(loaded) => {
                        services
                            .prefetch
                            .insert(source, loaded.handle, loaded.size_bytes);
                    }
                    Err(err) => log::debug!("Prefetch of {source} failed: {err}"),
                }
                Task::none()
            }
        }
    }

    fn tracker_mut(&mut self, slot: ImageSlot) -> &mut ImageLoadTracker<image::Handle> {
        match slot {
            ImageSlot::Thumbnail => &mut self.thumbnails,
            ImageSlot::Full => &mut self.full_images,
        }
    }

    fn find(&self, id: &ArtworkId) -> Option<&ArtworkRecord> {
        self.grid
            .all_artworks()
            .iter()
            .find(|artwork| artwork.id == *id)
    }

    /// Starts loads for visible tiles that have not been requested yet.
    fn request_thumbnails(&mut self, client: &reqwest::Client) -> Task<Message> {
        let width = self.thumbnail_width;
        let requests: Vec<(ArtworkId, String)> = self
            .grid
            .artworks()
            .iter()
            .map(|artwork| {
                (
                    artwork.id.clone(),
                    with_size_hint(artwork.tile_source(), width),
                )
            })
            .collect();

        let tasks: Vec<_> = requests
            .into_iter()
            .filter_map(|(id, source)| {
                let source = self.thumbnails.request(&id, &source)?;
                Some(spawn_load(client, ImageSlot::Thumbnail, id, source))
            })
            .collect();
        Task::batch(tasks)
    }

    fn apply(&mut self, effect: LightboxEffect, services: Services<'_>) -> Task<Message> {
        match effect.shown().cloned() {
            Some(id) => self.show_full(&id, services),
            None => Task::none(),
        }
    }

    /// Loads the full image of `id`, from the prefetch cache when possible,
    /// and prefetches its neighbours.
    fn show_full(&mut self, id: &ArtworkId, services: Services<'_>) -> Task<Message> {
        let Some(source) = self.find(id).map(|artwork| artwork.image_url.clone()) else {
            return Task::none();
        };

        let load = match self.full_images.request(id, &source) {
            Some(source) => match services.prefetch.get(&source) {
                Some(handle) => {
                    self.full_images.mark_loaded(id, handle);
                    Task::none()
                }
                None => spawn_load(services.client, ImageSlot::Full, id.clone(), source),
            },
            None => Task::none(),
        };

        if !services.prefetch.is_enabled() {
            return load;
        }
        let full_images = &self.full_images;
        let cache = &*services.prefetch;
        let plan = self.planner.plan(self.grid.artworks(), id, |artwork| {
            full_images.status(&artwork.id) != LoadStatus::NotRequested
                || cache.contains(&artwork.image_url)
        });

        let prefetches = plan.into_iter().map(|request| {
            let source = request.source;
            let client = services.client.clone();
            Task::perform(
                load_image(client, source.clone()),
                move |result| Message::Prefetched { source, result },
            )
        });
        Task::batch(std::iter::once(load).chain(prefetches))
    }

    fn on_image_loaded(
        &mut self,
        slot: ImageSlot,
        id: ArtworkId,
        result: Result<LoadedImage, ImageLoadError>,
        client: &reqwest::Client,
    ) -> Task<Message> {
        match result {
            Ok(loaded) => {
                self.tracker_mut(slot).mark_loaded(&id, loaded.handle);
                Task::none()
            }
            Err(err) => {
                let fallback = self.find(&id).and_then(|artwork| artwork.fallback_url.clone());
                match self.tracker_mut(slot).mark_failed(&id, fallback.as_deref()) {
                    FailureOutcome::RetryWith(source) => {
                        log::warn!("Image for {id} failed ({err}); trying fallback {source}");
                        spawn_load(client, slot, id, source)
                    }
                    FailureOutcome::GaveUp => {
                        log::warn!("Image for {id} failed ({err}); no fallback left");
                        Task::none()
                    }
                    FailureOutcome::Ignored => Task::none(),
                }
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &self.phase {
            Phase::Loading => status::loading(env.i18n, env.spinner_rotation),
            Phase::Failed(_) => status::failed(env.i18n),
            Phase::Ready if self.grid.is_empty() => status::empty(env.i18n),
            Phase::Ready => grid_view::view(self, &env),
        };

        let page = Column::new()
            .push(filter_bar::view(self.category, &self.grid, env.i18n))
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill);

        match self.current_artwork() {
            Some(artwork) => Stack::new()
                .push(page)
                .push(lightbox_view::view(self, artwork, &env))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => page.into(),
        }
    }
}

fn spawn_load(
    client: &reqwest::Client,
    slot: ImageSlot,
    id: ArtworkId,
    source: String,
) -> Task<Message> {
    Task::perform(load_image(client.clone(), source), move |result| {
        Message::ImageLoaded { slot, id, result }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CatalogFuture;
    use crate::infrastructure::image::http_client;

    struct StaticCatalog;

    impl CatalogProvider for StaticCatalog {
        fn list_artworks(&self, _category: Category) -> CatalogFuture<Vec<ArtworkRecord>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn list_categories(&self, _category: Category) -> CatalogFuture<Vec<String>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn list_featured(&self) -> CatalogFuture<Vec<ArtworkRecord>> {
            Box::pin(async { Ok(Vec::new()) })
        }
    }

    struct Fixture {
        provider: Arc<dyn CatalogProvider>,
        client: reqwest::Client,
        lock: ScrollLock,
        cache: ImagePrefetchCache<image::Handle>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                provider: Arc::new(StaticCatalog),
                client: http_client(),
                lock: ScrollLock::new(),
                cache: ImagePrefetchCache::with_defaults(),
            }
        }

        fn send(&mut self, state: &mut State, message: Message) {
            let _ = state.update(
                message,
                Services {
                    provider: &self.provider,
                    client: &self.client,
                    scroll_lock: &mut self.lock,
                    prefetch: &mut self.cache,
                },
            );
        }
    }

    fn artworks() -> Vec<ArtworkRecord> {
        ["nature", "nature", "ceiling"]
            .iter()
            .enumerate()
            .map(|(i, sub)| {
                ArtworkRecord::new(
                    format!("m-{sub}-{i}"),
                    format!("/missing/{i}.jpg"),
                    Category::Mural,
                    *sub,
                )
            })
            .collect()
    }

    fn ready_state(fixture: &mut Fixture) -> State {
        let mut state = State::new(Category::Mural, &GalleryConfig::default());
        fixture.send(&mut state, Message::CatalogLoaded(Ok(artworks())));
        state
    }

    #[test]
    fn catalog_load_populates_grid_and_requests_thumbnails() {
        let mut fixture = Fixture::new();
        let state = ready_state(&mut fixture);

        assert_eq!(state.phase(), &Phase::Ready);
        assert_eq!(state.grid().artworks().len(), 3);
        for artwork in state.grid().artworks() {
            assert!(matches!(
                state.thumbnails().status(&artwork.id),
                LoadStatus::Loading { .. }
            ));
        }
    }

    #[test]
    fn failed_catalog_is_reported_and_retry_reloads() {
        let mut fixture = Fixture::new();
        let mut state = State::new(Category::Mural, &GalleryConfig::default());
        let err = CatalogError::Unavailable("offline".into());
        fixture.send(&mut state, Message::CatalogLoaded(Err(err.clone())));
        assert_eq!(state.phase(), &Phase::Failed(err));

        fixture.send(&mut state, Message::RetryRequested);
        assert_eq!(state.phase(), &Phase::Loading);
    }

    #[test]
    fn tile_click_opens_and_locks_scroll() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);

        fixture.send(&mut state, Message::TileClicked(1));
        assert_eq!(
            state.current_artwork().map(|a| a.id.as_str()),
            Some("m-nature-1")
        );
        assert!(fixture.lock.is_locked());
        assert!(state.is_loading());

        fixture.send(&mut state, Message::Key(NavKey::Escape));
        assert!(!state.lightbox().is_open());
        assert!(!fixture.lock.is_locked());
    }

    #[test]
    fn content_press_does_not_close() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);

        fixture.send(&mut state, Message::TileClicked(0));
        fixture.send(&mut state, Message::ContentPressed);
        assert!(state.lightbox().is_open());

        fixture.send(&mut state, Message::CloseRequested);
        assert!(!state.lightbox().is_open());
    }

    #[test]
    fn filter_change_keeps_lightbox_open_and_falls_back() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);

        fixture.send(&mut state, Message::TileClicked(0));
        fixture.send(
            &mut state,
            Message::FilterSelected(SubcategoryFilter::from_tag("ceiling")),
        );
        assert!(state.lightbox().is_open());
        // The filtered-out artwork stays on screen without a position.
        assert_eq!(
            state.current_artwork().map(|a| a.id.as_str()),
            Some("m-nature-0")
        );
        assert_eq!(
            state
                .lightbox()
                .navigation_info(state.grid().artworks())
                .current_index,
            None
        );

        fixture.send(&mut state, Message::NextRequested);
        assert_eq!(
            state.current_artwork().map(|a| a.id.as_str()),
            Some("m-ceiling-2")
        );
    }

    #[test]
    fn pending_open_applies_after_catalog_load() {
        let mut fixture = Fixture::new();
        let mut state = State::new(Category::Mural, &GalleryConfig::default())
            .with_pending_open(ArtworkId::new("m-ceiling-2"));
        fixture.send(&mut state, Message::CatalogLoaded(Ok(artworks())));

        assert_eq!(
            state.lightbox().current_id().map(ArtworkId::as_str),
            Some("m-ceiling-2")
        );
        assert!(fixture.lock.is_locked());
    }

    #[test]
    fn failed_image_without_fallback_gives_up_and_stays_failed() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);
        let id = ArtworkId::new("m-nature-0");

        fixture.send(
            &mut state,
            Message::ImageLoaded {
                slot: ImageSlot::Thumbnail,
                id: id.clone(),
                result: Err(ImageLoadError::NotFound("/missing/0.jpg".into())),
            },
        );
        assert_eq!(state.thumbnails().status(&id), LoadStatus::Failed);
    }

    #[test]
    fn loaded_thumbnail_survives_later_failures() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);
        let id = ArtworkId::new("m-nature-0");
        let handle = image::Handle::from_bytes(vec![0u8; 4]);

        fixture.send(
            &mut state,
            Message::ImageLoaded {
                slot: ImageSlot::Thumbnail,
                id: id.clone(),
                result: Ok(LoadedImage {
                    handle,
                    width: 1,
                    height: 1,
                    size_bytes: 4,
                }),
            },
        );
        fixture.send(
            &mut state,
            Message::ImageLoaded {
                slot: ImageSlot::Thumbnail,
                id: id.clone(),
                result: Err(ImageLoadError::Network("late".into())),
            },
        );
        assert!(state.thumbnails().is_loaded(&id));
    }

    #[test]
    fn unmount_releases_scroll_lock() {
        let mut fixture = Fixture::new();
        let mut state = ready_state(&mut fixture);
        fixture.send(&mut state, Message::TileClicked(2));
        assert!(fixture.lock.is_locked());

        state.unmount(&mut fixture.lock);
        assert!(!fixture.lock.is_locked());
        assert_eq!(fixture.lock.holders(), 0);
    }
}
