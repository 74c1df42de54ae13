// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module turns native events (keyboard, touch, window) into application
//! messages and drives the animation tick.

use super::Message;
use crate::gallery::{NavKey, TouchInput};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Event, Subscription};
use std::time::Duration;

/// Animation frame interval for spinners and fade-ins.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the native event subscription.
///
/// Window resizes are always forwarded so the grid can pick its column
/// count. Arrow keys, Escape and touch input are only listened to while the
/// lightbox is open; otherwise they belong to the page.
pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(|event, status, _window_id| {
            if let Some(message) = window_message(&event) {
                return Some(message);
            }
            if let Some(input) = touch_input(&event) {
                return Some(Message::LightboxTouch(input));
            }
            match status {
                event::Status::Ignored => nav_key(&event).map(Message::LightboxKey),
                event::Status::Captured => None,
            }
        })
    } else {
        event::listen_with(|event, _status, _window_id| window_message(&event))
    }
}

/// Creates a periodic tick subscription while something on screen animates.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn window_message(event: &Event) -> Option<Message> {
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        _ => None,
    }
}

/// Maps a key press to a lightbox key. Other keys are not ours.
fn nav_key(event: &Event) -> Option<NavKey> {
    let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
        return None;
    };
    match key {
        Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
        Key::Named(Named::Escape) => Some(NavKey::Escape),
        _ => None,
    }
}

fn touch_input(event: &Event) -> Option<TouchInput> {
    let Event::Touch(touch_event) = event else {
        return None;
    };
    let input = match touch_event {
        touch::Event::FingerPressed { id, position } => TouchInput::Start {
            finger: id.0,
            x: position.x,
        },
        touch::Event::FingerMoved { id, position } => TouchInput::Move {
            finger: id.0,
            x: position.x,
        },
        touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
            TouchInput::End { finger: id.0 }
        }
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::{key, Location, Modifiers};
    use iced::{Point, Size};

    fn key_press(named: Named) -> Event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            modified_key: Key::Named(named),
            physical_key: key::Physical::Code(key::Code::Escape),
            location: Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        })
    }

    #[test]
    fn arrows_and_escape_map_to_nav_keys() {
        assert_eq!(nav_key(&key_press(Named::ArrowLeft)), Some(NavKey::ArrowLeft));
        assert_eq!(nav_key(&key_press(Named::ArrowRight)), Some(NavKey::ArrowRight));
        assert_eq!(nav_key(&key_press(Named::Escape)), Some(NavKey::Escape));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(nav_key(&key_press(Named::ArrowUp)), None);
        assert_eq!(nav_key(&key_press(Named::Enter)), None);
    }

    #[test]
    fn finger_events_map_to_touch_input() {
        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(3),
            position: Point::new(120.0, 40.0),
        });
        assert_eq!(
            touch_input(&pressed),
            Some(TouchInput::Start { finger: 3, x: 120.0 })
        );

        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(3),
            position: Point::new(60.0, 40.0),
        });
        assert_eq!(touch_input(&lost), Some(TouchInput::End { finger: 3 }));
    }

    #[test]
    fn resize_is_forwarded() {
        let resized = Event::Window(window::Event::Resized(Size::new(900.0, 700.0)));
        assert!(matches!(
            window_message(&resized),
            Some(Message::WindowResized(size)) if size.width == 900.0
        ));
    }
}
