// SPDX-License-Identifier: MPL-2.0
//! Placeholder bodies shown instead of the grid: loading, failed, empty.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::LoadingSpinner;
use iced::widget::{button, Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn loading<'a>(i18n: &I18n, rotation: f32) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(LoadingSpinner::new(palette::PRIMARY_500, rotation).into_element())
            .push(
                Text::new(i18n.tr("gallery-loading"))
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            ),
    )
}

/// The catalog root itself could not be read.
pub fn failed<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                Text::new(i18n.tr("gallery-error"))
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500),
            )
            .push(
                button(Text::new(i18n.tr("gallery-retry")))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::RetryRequested),
            ),
    )
}

/// No artworks: an empty category or a filter that matches nothing.
pub fn empty<'a>(i18n: &I18n) -> Element<'a, Message> {
    centered(
        Text::new(i18n.tr("gallery-empty"))
            .size(typography::TITLE_SM)
            .color(palette::GRAY_400),
    )
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
