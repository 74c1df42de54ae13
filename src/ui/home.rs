// SPDX-License-Identifier: MPL-2.0
//! Home page: featured artworks from every category.
//!
//! Pressing a highlight opens its category gallery with the lightbox already
//! on that artwork; the gallery page owns all navigation from there.

use crate::application::port::{CatalogError, CatalogProvider};
use crate::config::GalleryConfig;
use crate::domain::artwork::{ArtworkId, ArtworkRecord, Category};
use crate::error::ImageLoadError;
use crate::gallery::{FailureOutcome, GridBreakpoints, ImageLoadTracker};
use crate::i18n::fluent::I18n;
use crate::infrastructure::image::{load_image, with_size_hint, LoadedImage};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::LoadingSpinner;
use iced::widget::{button, image, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Task};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    FeaturedLoaded(Result<Vec<ArtworkRecord>, CatalogError>),
    ThumbnailLoaded {
        id: ArtworkId,
        result: Result<LoadedImage, ImageLoadError>,
    },
    ArtworkPressed(usize),
    CategoryPressed(Category),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    ShowCategory(Category),
    OpenArtwork { category: Category, id: ArtworkId },
}

/// Progress of the featured artworks request.
#[derive(Debug, Clone, Default)]
enum Featured {
    #[default]
    NotRequested,
    Loading,
    Ready(Vec<ArtworkRecord>),
    /// The request failed; the next [`State::load`] asks again.
    Failed,
}

#[derive(Debug)]
pub struct State {
    featured: Featured,
    thumbnails: ImageLoadTracker<image::Handle>,
    thumbnail_width: u32,
    breakpoints: GridBreakpoints,
}

impl State {
    #[must_use]
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            featured: Featured::NotRequested,
            thumbnails: ImageLoadTracker::new(config.fade_duration()),
            thumbnail_width: config.thumbnail_width(),
            breakpoints: config.breakpoints(),
        }
    }

    #[must_use]
    pub fn featured(&self) -> Option<&[ArtworkRecord]> {
        match &self.featured {
            Featured::Ready(featured) => Some(featured),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.featured, Featured::NotRequested | Featured::Loading)
    }

    #[must_use]
    pub fn load_failed(&self) -> bool {
        matches!(self.featured, Featured::Failed)
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ImageLoadTracker<image::Handle> {
        &self.thumbnails
    }

    #[must_use]
    pub fn is_fading(&self, now: Instant) -> bool {
        self.thumbnails.is_fading(now)
    }

    /// Requests the featured artworks unless they are loaded or already on the way.
    pub fn load(&mut self, provider: &Arc<dyn CatalogProvider>) -> Task<Message> {
        if matches!(self.featured, Featured::Loading | Featured::Ready(_)) {
            return Task::none();
        }
        self.featured = Featured::Loading;
        Task::perform(provider.list_featured(), Message::FeaturedLoaded)
    }

    pub fn update(&mut self, message: Message, client: &reqwest::Client) -> (Event, Task<Message>) {
        match message {
            Message::FeaturedLoaded(Ok(featured)) => {
                log::debug!("{} featured artworks", featured.len());
                let width = self.thumbnail_width;
                let tasks: Vec<_> = featured
                    .iter()
                    .filter_map(|artwork| {
                        let source = self
                            .thumbnails
                            .request(&artwork.id, &with_size_hint(artwork.tile_source(), width))?;
                        Some(load_thumbnail(client, artwork.id.clone(), source))
                    })
                    .collect();
                self.featured = Featured::Ready(featured);
                (Event::None, Task::batch(tasks))
            }
            Message::FeaturedLoaded(Err(err)) => {
                log::warn!("Featured artworks unavailable: {err}");
                self.featured = Featured::Failed;
                (Event::None, Task::none())
            }
            Message::ThumbnailLoaded { id, result } => {
                let task = match result {
                    Ok(loaded) => {
                        self.thumbnails.mark_loaded(&id, loaded.handle);
                        Task::none()
                    }
                    Err(err) => {
                        let fallback = self
                            .featured()
                            .and_then(|featured| featured.iter().find(|artwork| artwork.id == id))
                            .and_then(|artwork| artwork.fallback_url.clone());
                        match self.thumbnails.mark_failed(&id, fallback.as_deref()) {
                            FailureOutcome::RetryWith(source) => {
                                log::warn!(
                                    "Featured image for {id} failed ({err}); trying fallback {source}"
                                );
                                load_thumbnail(client, id, source)
                            }
                            FailureOutcome::GaveUp => {
                                log::warn!("Featured image for {id} failed ({err}); no fallback left");
                                Task::none()
                            }
                            FailureOutcome::Ignored => Task::none(),
                        }
                    }
                };
                (Event::None, task)
            }
            Message::ArtworkPressed(index) => {
                let event = self
                    .featured()
                    .and_then(|featured| featured.get(index))
                    .map_or(Event::None, |artwork| Event::OpenArtwork {
                        category: artwork.category,
                        id: artwork.id.clone(),
                    });
                (event, Task::none())
            }
            Message::CategoryPressed(category) => (Event::ShowCategory(category), Task::none()),
        }
    }

    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        window_width: f32,
        now: Instant,
        spinner_rotation: f32,
    ) -> Element<'a, Message> {
        let mut page = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(Text::new(i18n.tr("home-title")).size(typography::TITLE_LG))
            .push(
                Text::new(i18n.tr("home-intro"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            );

        let mut categories = Row::new().spacing(spacing::SM);
        for category in Category::ALL {
            categories = categories.push(
                button(Text::new(i18n.tr(category.i18n_key())))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::CategoryPressed(category)),
            );
        }
        page = page.push(categories.wrap());

        page = match &self.featured {
            Featured::NotRequested | Featured::Loading => page.push(
                Container::new(LoadingSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element())
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            ),
            Featured::Ready(featured) if !featured.is_empty() => {
                page.push(self.highlights(featured, window_width, now))
            }
            Featured::Ready(_) | Featured::Failed => page.push(
                Text::new(i18n.tr("home-empty"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            ),
        };

        Scrollable::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn highlights<'a>(
        &'a self,
        featured: &'a [ArtworkRecord],
        window_width: f32,
        now: Instant,
    ) -> Element<'a, Message> {
        let columns = self.breakpoints.columns_for_width(window_width);
        let mut rows = Column::new().spacing(spacing::MD);
        for (row_index, chunk) in featured.chunks(columns).enumerate() {
            let mut row = Row::new().spacing(spacing::MD);
            for (offset, artwork) in chunk.iter().enumerate() {
                let index = row_index * columns + offset;
                let picture: Element<'a, Message> = match self.thumbnails.payload(&artwork.id) {
                    Some(handle) => image::Image::new(handle.clone())
                        .content_fit(ContentFit::Cover)
                        .opacity(self.thumbnails.opacity(&artwork.id, now))
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::TILE_HEIGHT))
                        .into(),
                    None => Container::new(Space::new())
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::TILE_HEIGHT))
                        .style(styles::container::placeholder)
                        .into(),
                };
                row = row.push(
                    button(picture)
                        .padding(0)
                        .width(Length::Fill)
                        .style(styles::button::tile)
                        .on_press(Message::ArtworkPressed(index)),
                );
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            rows = rows.push(row);
        }
        rows.into()
    }
}

fn load_thumbnail(client: &reqwest::Client, id: ArtworkId, source: String) -> Task<Message> {
    Task::perform(load_image(client.clone(), source), move |result| {
        Message::ThumbnailLoaded { id, result }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::CatalogFuture;
    use crate::gallery::LoadStatus;
    use crate::infrastructure::image::http_client;

    struct OfflineCatalog;

    impl CatalogProvider for OfflineCatalog {
        fn list_artworks(&self, _category: Category) -> CatalogFuture<Vec<ArtworkRecord>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn list_categories(&self, _category: Category) -> CatalogFuture<Vec<String>> {
            Box::pin(async { Ok(Vec::new()) })
        }

        fn list_featured(&self) -> CatalogFuture<Vec<ArtworkRecord>> {
            Box::pin(async { Err(CatalogError::Unavailable("offline".into())) })
        }
    }

    fn featured() -> Vec<ArtworkRecord> {
        vec![
            ArtworkRecord::new("m-nature-0", "/m0.jpg", Category::Mural, "nature").featured(true),
            ArtworkRecord::new("s-buddha-0", "/s0.jpg", Category::SinglePanelCanvas, "buddha")
                .featured(true),
        ]
    }

    #[test]
    fn pressing_highlight_opens_its_category() {
        let client = http_client();
        let mut state = State::new(&GalleryConfig::default());
        let _ = state.update(Message::FeaturedLoaded(Ok(featured())), &client);

        let (event, _) = state.update(Message::ArtworkPressed(1), &client);
        assert_eq!(
            event,
            Event::OpenArtwork {
                category: Category::SinglePanelCanvas,
                id: ArtworkId::new("s-buddha-0"),
            }
        );
    }

    #[test]
    fn out_of_range_press_is_ignored() {
        let client = http_client();
        let mut state = State::new(&GalleryConfig::default());
        let _ = state.update(Message::FeaturedLoaded(Ok(featured())), &client);

        let (event, _) = state.update(Message::ArtworkPressed(9), &client);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn failed_featured_load_shows_empty_page() {
        let client = http_client();
        let mut state = State::new(&GalleryConfig::default());
        assert!(state.is_loading());

        let _ = state.update(
            Message::FeaturedLoaded(Err(CatalogError::Unavailable("offline".into()))),
            &client,
        );
        assert!(!state.is_loading());
        assert!(state.load_failed());
        assert_eq!(state.featured(), None);
    }

    #[test]
    fn failed_featured_load_is_retried_on_next_visit() {
        let client = http_client();
        let provider: Arc<dyn CatalogProvider> = Arc::new(OfflineCatalog);
        let mut state = State::new(&GalleryConfig::default());

        let _ = state.load(&provider);
        let _ = state.update(
            Message::FeaturedLoaded(Err(CatalogError::Unavailable("offline".into()))),
            &client,
        );
        assert!(state.load_failed());

        let _ = state.load(&provider);
        assert!(state.is_loading());
        assert!(!state.load_failed());

        let _ = state.update(Message::FeaturedLoaded(Ok(featured())), &client);
        let _ = state.load(&provider);
        assert!(!state.is_loading());
        assert_eq!(state.featured().map(<[_]>::len), Some(2));
    }

    #[test]
    fn broken_highlight_tries_its_fallback_once() {
        let client = http_client();
        let mut state = State::new(&GalleryConfig::default());
        let with_fallback = vec![ArtworkRecord::new(
            "m-nature-0",
            "/missing/m0.jpg",
            Category::Mural,
            "nature",
        )
        .with_fallback("/backup/m0.jpg")
        .featured(true)];
        let _ = state.update(Message::FeaturedLoaded(Ok(with_fallback)), &client);
        let id = ArtworkId::new("m-nature-0");

        let _ = state.update(
            Message::ThumbnailLoaded {
                id: id.clone(),
                result: Err(ImageLoadError::NotFound("/missing/m0.jpg".into())),
            },
            &client,
        );
        assert_eq!(
            state.thumbnails().status(&id),
            LoadStatus::Loading {
                using_fallback: true
            }
        );

        let _ = state.update(
            Message::ThumbnailLoaded {
                id: id.clone(),
                result: Err(ImageLoadError::NotFound("/backup/m0.jpg".into())),
            },
            &client,
        );
        assert_eq!(state.thumbnails().status(&id), LoadStatus::Failed);
    }

    #[test]
    fn broken_highlight_without_fallback_gives_up() {
        let client = http_client();
        let mut state = State::new(&GalleryConfig::default());
        let _ = state.update(Message::FeaturedLoaded(Ok(featured())), &client);
        let id = ArtworkId::new("s-buddha-0");

        let _ = state.update(
            Message::ThumbnailLoaded {
                id: id.clone(),
                result: Err(ImageLoadError::Network("offline".into())),
            },
            &client,
        );
        assert_eq!(state.thumbnails().status(&id), LoadStatus::Failed);
    }
}
