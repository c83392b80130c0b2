// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input is routed as plain [`KeyInput`] values; which component
//! reacts (if any) is decided in the update layer where overlay state is
//! known. The tick subscription exists only while a gallery transition is
//! in flight.

use super::message::{KeyInput, Message};
use crate::config::TRANSITION_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the keyboard event subscription.
///
/// Events already captured by a focused widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }

        let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event else {
            return None;
        };

        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                Some(Message::Keyboard(KeyInput::Escape))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                Some(Message::Keyboard(KeyInput::ArrowLeft))
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(Message::Keyboard(KeyInput::ArrowRight))
            }
            _ => None,
        }
    })
}

/// Creates a periodic tick subscription while a gallery transition is
/// in flight; the ticks re-render the crossfade and commit the settle.
pub fn create_tick_subscription(transition_active: bool) -> Subscription<Message> {
    if transition_active {
        time::every(Duration::from_millis(TRANSITION_TICK_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
