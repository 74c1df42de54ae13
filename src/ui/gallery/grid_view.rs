// SPDX-License-Identifier: MPL-2.0
//! Responsive thumbnail grid.
//!
//! Each tile shows a placeholder until its thumbnail has loaded, then fades
//! the image in. Tiles whose every source failed keep the placeholder with
//! an "image unavailable" label.

use super::component::{Message, State, ViewEnv};
use crate::gallery::{GridTile, LoadStatus};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::scroll_lockable;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, image, Column, Container, Row, Scrollable, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Padding};

pub fn view<'a>(state: &'a State, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let columns = state.breakpoints().columns_for_width(env.window_width);

    let mut grid = Column::new().spacing(spacing::MD);
    for row in state.grid().rows(columns) {
        let filled = row.len();
        let mut cells = Row::new().spacing(spacing::MD);
        for tile in row {
            cells = cells.push(tile_view(state, tile, env));
        }
        // Keep the cells of a short last row the same width as the others.
        for _ in filled..columns {
            cells = cells.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(cells);
    }

    let padding = Padding {
        top: spacing::XS,
        right: spacing::LG + env.scroll_compensation,
        bottom: spacing::LG,
        left: spacing::LG,
    };

    let scrollbar = if env.scroll_locked {
        Scrollbar::hidden()
    } else {
        Scrollbar::new()
            .width(sizing::SCROLLBAR_WIDTH)
            .scroller_width(sizing::SCROLLBAR_WIDTH)
            .spacing(0.0)
    };

    let scrollable = Scrollable::new(Container::new(grid).padding(padding).width(Length::Fill))
        .direction(Direction::Vertical(scrollbar))
        .width(Length::Fill)
        .height(Length::Fill);

    scroll_lockable(scrollable, env.scroll_locked).into()
}

fn tile_view<'a>(state: &'a State, tile: GridTile<'a>, env: &ViewEnv<'a>) -> Element<'a, Message> {
    let id = &tile.artwork.id;
    let thumbnails = state.thumbnails();

    let picture: Element<'a, Message> = match thumbnails.payload(id) {
        Some(handle) => image::Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .opacity(thumbnails.opacity(id, env.now))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TILE_HEIGHT))
            .into(),
        None => {
            let label = if thumbnails.status(id) == LoadStatus::Failed {
                env.i18n.tr("image-unavailable")
            } else {
                String::new()
            };
            Container::new(Text::new(label).size(typography::CAPTION))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::TILE_HEIGHT))
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(styles::container::placeholder)
                .into()
        }
    };

    let mut content = Column::new().spacing(spacing::XXS).push(picture);
    if state.show_titles() {
        if let Some(caption) = tile.caption() {
            content = content.push(Text::new(caption).size(typography::CAPTION));
        }
    }

    button(content)
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile)
        .on_press(Message::TileClicked(tile.index))
        .into()
}
