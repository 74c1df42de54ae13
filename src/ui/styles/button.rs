// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action, e.g. retrying a failed catalog load.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        _ => (palette::PRIMARY_500, palette::PRIMARY_600),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: if status == button::Status::Hovered {
            shadow::MD
        } else {
            shadow::SM
        },
        snap: true,
    }
}

/// Round translucent buttons drawn over the lightbox (previous, next, close).
pub fn overlay(
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border: Border {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE,
                    ..WHITE
                },
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Filter chip for the active subcategory.
pub fn chip_selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Filter chip for the other subcategories.
pub fn chip_unselected(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_200,
    };
    button::Style {
        background: Some(Background::Color(WHITE)),
        text_color: palette::GRAY_900,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Navigation bar link; `active` marks the current page.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active || status == button::Status::Hovered {
            palette::PRIMARY_400
        } else {
            WHITE
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Grid tile: flat, with a brand-colored outline on hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            color: Color::TRANSPARENT,
            width: 2.0,
            radius: radius::MD.into(),
        },
    };
    button::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        text_color: palette::GRAY_900,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_darkens_on_hover() {
        let style = overlay(0.5, 0.8);
        let active = style(&Theme::Light, button::Status::Active);
        let hovered = style(&Theme::Light, button::Status::Hovered);
        let alpha = |s: button::Style| match s.background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(hovered) > alpha(active));
    }

    #[test]
    fn active_nav_link_is_highlighted() {
        let active = nav_link(true)(&Theme::Light, button::Status::Active);
        let inactive = nav_link(false)(&Theme::Light, button::Status::Active);
        assert_eq!(active.text_color, palette::PRIMARY_400);
        assert_eq!(inactive.text_color, WHITE);
    }
}
