// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while the catalog or a lightbox image is loading.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Three-quarter ring rotated by `rotation` radians.
pub struct LoadingSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl LoadingSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: rotation.rem_euclid(TAU),
            color,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for LoadingSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - sizing::SPINNER_STROKE;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_width(sizing::SPINNER_STROKE)
                    .with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
            );

            let start = self.rotation - FRAC_PI_2;
            let ring = Path::new(|builder| {
                builder.arc(Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + 1.5 * PI),
                });
            });
            frame.stroke(
                &ring,
                Stroke::default()
                    .with_width(sizing::SPINNER_STROKE)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}
