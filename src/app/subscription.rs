// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) into messages and
//! drives the periodic tick used for notification auto-dismiss.

use super::Message;
use crate::ui::confirm;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window close requests are intercepted on every screen so unsaved work
/// can be confirmed away first. While a confirmation prompt is open,
/// Escape cancels it.
pub fn create_event_subscription(prompt_open: bool) -> Subscription<Message> {
    if prompt_open {
        event::listen_with(|event, status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) = &event
            {
                return match status {
                    event::Status::Ignored => Some(Message::Confirm(confirm::Message::Cancel)),
                    event::Status::Captured => None,
                };
            }

            None
        })
    } else {
        event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            None
        })
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
