// SPDX-License-Identifier: MPL-2.0
//! Navigation bar with the application name and one link per page.

use crate::domain::artwork::Category;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// `None` while the home page is shown.
    pub active_category: Option<Category>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenHome,
    OpenCategory(Category),
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_MD);

    let mut links = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(link(
            ctx.i18n.tr("nav-home"),
            ctx.active_category.is_none(),
            Message::OpenHome,
        ));
    for category in Category::ALL {
        links = links.push(link(
            ctx.i18n.tr(category.i18n_key()),
            ctx.active_category == Some(category),
            Message::OpenCategory(category),
        ));
    }

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(links);

    Container::new(bar)
        .padding([0.0, spacing::LG])
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .style(styles::container::navbar)
        .into()
}

fn link<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_link(active))
        .on_press(message)
        .into()
}
