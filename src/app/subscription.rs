// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events that no widget captured are mapped to carousel navigation
//! and refresh shortcuts. Frame ticks are only requested while a carousel
//! has pending work.

use super::Message;
use crate::ui::carousel::NavKey;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, window, Subscription};

/// Routes uncaptured key presses.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event
        else {
            return None;
        };

        match status {
            event::Status::Ignored => map_key(&key, modifiers),
            event::Status::Captured => None,
        }
    })
}

/// Frame-synchronized ticks while `needs_frame` holds.
pub fn create_frame_subscription(needs_frame: bool) -> Subscription<Message> {
    if needs_frame {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

fn map_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::NavigationKey(NavKey::Left)),
        Key::Named(Named::ArrowRight) => Some(Message::NavigationKey(NavKey::Right)),
        Key::Named(Named::F5) => Some(Message::Refresh),
        Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") && modifiers.command() => {
            Some(Message::Refresh)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_map_to_navigation() {
        let left = map_key(&Key::Named(Named::ArrowLeft), Modifiers::empty());
        assert!(matches!(left, Some(Message::NavigationKey(NavKey::Left))));
        let right = map_key(&Key::Named(Named::ArrowRight), Modifiers::empty());
        assert!(matches!(right, Some(Message::NavigationKey(NavKey::Right))));
    }

    #[test]
    fn refresh_shortcuts() {
        assert!(matches!(
            map_key(&Key::Named(Named::F5), Modifiers::empty()),
            Some(Message::Refresh)
        ));
        assert!(matches!(
            map_key(&Key::Character("r".into()), Modifiers::COMMAND),
            Some(Message::Refresh)
        ));
        assert!(map_key(&Key::Character("r".into()), Modifiers::empty()).is_none());
    }

    #[test]
    fn other_keys_are_ignored() {
        assert!(map_key(&Key::Named(Named::ArrowUp), Modifiers::empty()).is_none());
        assert!(map_key(&Key::Character("a".into()), Modifiers::empty()).is_none());
    }
}
