// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler receives the whole [`App`]: the pages borrow the shared
//! services (provider, HTTP client, scroll lock, prefetch cache) only for the
//! duration of one message.

use super::{App, Message, Screen};
use crate::domain::artwork::Category;
use crate::ui::gallery::{self, Services};
use crate::ui::{home, navbar};
use iced::Task;
use std::f32::consts::TAU;
use std::time::Instant;

/// Spinner speed in radians per second.
const SPINNER_SPEED: f32 = TAU;

pub(super) fn handle_navbar_message(app: &mut App, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenHome => app.show_screen(Screen::Home, None),
        navbar::Message::OpenCategory(category) => {
            app.show_screen(Screen::Gallery(category), None)
        }
    }
}

pub(super) fn handle_home_message(app: &mut App, message: home::Message) -> Task<Message> {
    let (event, task) = app.home.update(message, &app.client);
    let task = task.map(Message::Home);
    match event {
        home::Event::None => task,
        home::Event::ShowCategory(category) => Task::batch([
            task,
            app.show_screen(Screen::Gallery(category), None),
        ]),
        home::Event::OpenArtwork { category, id } => Task::batch([
            task,
            app.show_screen(Screen::Gallery(category), Some(id)),
        ]),
    }
}

/// Routes a message produced by the gallery of `category`.
///
/// Results that arrive after that gallery was unmounted are dropped.
pub(super) fn handle_gallery_message(
    app: &mut App,
    category: Category,
    message: gallery::Message,
) -> Task<Message> {
    if app.screen != Screen::Gallery(category) {
        log::debug!("Dropping late {category} gallery message");
        return Task::none();
    }
    forward_to_gallery(app, message)
}

/// Hands `message` to the mounted gallery, if any.
pub(super) fn forward_to_gallery(app: &mut App, message: gallery::Message) -> Task<Message> {
    let Some(gallery) = app.gallery.as_mut() else {
        return Task::none();
    };
    let category = gallery.category();
    let services = Services {
        provider: &app.provider,
        client: &app.client,
        scroll_lock: &mut app.scroll_lock,
        prefetch: &mut app.prefetch,
    };
    gallery
        .update(message, services)
        .map(move |message| Message::Gallery(category, message))
}

/// Advances the animation clock and the spinner angle.
pub(super) fn handle_tick(app: &mut App, instant: Instant) {
    let elapsed = instant.saturating_duration_since(app.now).as_secs_f32();
    app.spinner_rotation = (app.spinner_rotation + elapsed * SPINNER_SPEED) % TAU;
    app.now = instant;
}
