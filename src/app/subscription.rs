// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard events reach the viewer only when no widget captured them, so
//! typing in the zoom field never turns pages.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Routes uncaptured key presses to the viewer.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| route_event(event, status))
}

fn route_event(event: event::Event, status: event::Status) -> Option<Message> {
    match (&event, status) {
        (event::Event::Keyboard(iced::keyboard::Event::KeyPressed { .. }), event::Status::Ignored) => {
            Some(Message::Viewer(component::Message::RawEvent(event)))
        }
        _ => None,
    }
}
