// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: the enlarged artwork over a dimmed backdrop.
//!
//! Layers, bottom to top:
//! 1. the backdrop, which closes the lightbox when pressed,
//! 2. the artwork and its caption, which swallow presses,
//! 3. the controls (close, previous, next, position indicator).
//!
//! Previous/next and the position indicator are only shown when there is
//! somewhere to navigate to.

use super::component::{Message, State, ViewEnv};
use crate::domain::artwork::ArtworkRecord;
use crate::gallery::LoadStatus;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::LoadingSpinner;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

pub fn view<'a>(
    state: &'a State,
    artwork: &'a ArtworkRecord,
    env: &ViewEnv<'a>,
) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::CloseRequested);

    let mut framed = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(picture(state, artwork, env));
    if let Some(caption) = caption(artwork, env) {
        framed = framed.push(caption);
    }
    let content = mouse_area(framed).on_press(Message::ContentPressed);

    let centered = Container::new(content)
        .padding(sizing::LIGHTBOX_MARGIN)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let layers = Stack::new()
        .push(backdrop)
        .push(centered)
        .push(controls(state, env))
        .width(Length::Fill)
        .height(Length::Fill);

    opaque(layers)
}

fn picture<'a>(
    state: &'a State,
    artwork: &'a ArtworkRecord,
    env: &ViewEnv<'a>,
) -> Element<'a, Message> {
    let full_images = state.full_images();
    let id = &artwork.id;

    // The thumbnail stands in until the full image arrives.
    let handle = full_images
        .payload(id)
        .map(|handle| (handle, full_images.opacity(id, env.now)))
        .or_else(|| {
            state
                .thumbnails()
                .payload(id)
                .map(|handle| (handle, opacity::OVERLAY_MEDIUM))
        });

    let picture: Element<'a, Message> = match handle {
        Some((handle, alpha)) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Contain)
            .opacity(alpha.max(opacity::OVERLAY_MEDIUM))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None if full_images.status(id) == LoadStatus::Failed => {
            Text::new(env.i18n.tr("image-unavailable"))
                .size(typography::BODY)
                .color(palette::GRAY_200)
                .into()
        }
        None => LoadingSpinner::new(palette::WHITE, env.spinner_rotation).into_element(),
    };

    let spinner_overlay = matches!(full_images.status(id), LoadStatus::Loading { .. })
        && state.thumbnails().is_loaded(id);
    if spinner_overlay {
        Stack::new()
            .push(picture)
            .push(
                Container::new(
                    LoadingSpinner::new(palette::WHITE, env.spinner_rotation).into_element(),
                )
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
            )
            .into()
    } else {
        picture
    }
}

fn caption<'a>(artwork: &'a ArtworkRecord, env: &ViewEnv<'a>) -> Option<Element<'a, Message>> {
    let title = artwork.display_title();
    let artist = artwork.display_artist();
    let description = artwork.display_description();
    if title.is_none() && artist.is_none() && description.is_none() {
        return None;
    }

    let mut lines = Column::new().spacing(spacing::XXS);
    if let Some(title) = title {
        lines = lines.push(Text::new(title).size(typography::TITLE_SM));
    }
    if let Some(artist) = artist {
        lines = lines.push(
            Text::new(env.i18n.tr_with_args("lightbox-by-artist", &[("artist", artist)]))
                .size(typography::BODY),
        );
    }
    if let Some(description) = description {
        lines = lines.push(Text::new(description).size(typography::BODY));
    }

    Some(
        Container::new(lines)
            .padding([spacing::XS, spacing::MD])
            .style(styles::container::caption(radius::MD))
            .into(),
    )
}

fn controls<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let close = overlay_button("×", Message::CloseRequested);
    let top = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close)
        .padding(spacing::MD);

    let artworks = state.grid().artworks();
    let navigable = state.lightbox().shows_controls(artworks);

    let middle: Element<'a, Message> = if navigable {
        Row::new()
            .push(overlay_button("‹", Message::PreviousRequested))
            .push(Space::new().width(Length::Fill))
            .push(overlay_button("›", Message::NextRequested))
            .padding([0.0, spacing::MD])
            .align_y(alignment::Vertical::Center)
            .height(Length::Fill)
            .into()
    } else {
        Space::new().height(Length::Fill).into()
    };

    let info = state.lightbox().navigation_info(artworks);
    let bottom: Element<'a, Message> = match info.current_index {
        Some(index) if navigable => {
            let current = (index + 1).to_string();
            let total = info.total_count.to_string();
            Container::new(
                Container::new(
                    Text::new(env.i18n.tr_with_args(
                        "lightbox-position",
                        &[("current", &current), ("total", &total)],
                    ))
                    .size(typography::CAPTION),
                )
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::caption(radius::FULL)),
            )
            .width(Length::Fill)
            .padding(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .into()
        }
        _ => Space::new().height(Length::Fixed(sizing::NAV_BUTTON)).into(),
    };

    Column::new()
        .push(top)
        .push(middle)
        .push(bottom)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn overlay_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::NAV_GLYPH)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .padding(0)
    .style(styles::button::overlay(opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG))
    .on_press(message)
    .into()
}
