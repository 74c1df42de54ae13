// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar above
//! the current screen.

use super::{Message, Screen};
use crate::gallery::ScrollLock;
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self, ViewEnv};
use crate::ui::home;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use iced::widget::{Column, Container};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub home: &'a home::State,
    pub gallery: Option<&'a gallery::State>,
    pub scroll_lock: &'a ScrollLock,
    pub window_width: f32,
    pub now: Instant,
    pub spinner_rotation: f32,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        active_category: ctx.screen.category(),
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match (ctx.screen, ctx.gallery) {
        (Screen::Gallery(category), Some(state)) => state
            .view(ViewEnv {
                i18n: ctx.i18n,
                window_width: ctx.window_width,
                scroll_locked: ctx.scroll_lock.is_locked(),
                scroll_compensation: ctx.scroll_lock.compensation(),
                now: ctx.now,
                spinner_rotation: ctx.spinner_rotation,
            })
            .map(move |message| Message::Gallery(category, message)),
        _ => ctx
            .home
            .view(ctx.i18n, ctx.window_width, ctx.now, ctx.spinner_rotation)
            .map(Message::Home),
    };

    Column::new()
        .push(navbar)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
