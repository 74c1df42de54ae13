// SPDX-License-Identifier: MPL-2.0
//! Category heading and subcategory filter chips.

use super::component::Message;
use crate::domain::artwork::{format_subcategory, Category, SubcategoryFilter};
use crate::gallery::GalleryGrid;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

pub fn view<'a>(category: Category, grid: &'a GalleryGrid, i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr(category.i18n_key())).size(typography::TITLE_LG);

    let mut chips = Row::new().spacing(spacing::XS).push(chip(
        i18n.tr("filter-all"),
        !grid.filter().is_active(),
        SubcategoryFilter::All,
    ));
    for tag in grid.subcategories() {
        chips = chips.push(chip(
            format_subcategory(tag),
            grid.filter().selects(tag),
            SubcategoryFilter::Only(tag.clone()),
        ));
    }

    let mut column = Column::new()
        .spacing(spacing::SM)
        .padding([spacing::MD, spacing::LG])
        .width(Length::Fill)
        .push(heading);
    // A single tag would only ever select everything.
    if grid.subcategories().len() > 1 {
        column = column.push(chips.wrap());
    }
    if !grid.all_artworks().is_empty() {
        let count = grid.artworks().len().to_string();
        column = column.push(
            Text::new(i18n.tr_with_args("gallery-count", &[("count", &count)]))
                .size(typography::CAPTION),
        );
    }
    column.into()
}

fn chip<'a>(label: String, selected: bool, filter: SubcategoryFilter) -> Element<'a, Message> {
    let style = if selected {
        styles::button::chip_selected
    } else {
        styles::button::chip_unselected
    };
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::FilterSelected(filter))
        .into()
}
