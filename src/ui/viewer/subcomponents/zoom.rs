// SPDX-License-Identifier: MPL-2.0
//! Zoom sub-component encapsulating ZoomState and its handlers.

use crate::ui::state::debounce::Ticket;
use crate::ui::state::zoom::{ZoomState, ZoomStep};
use std::time::Duration;

/// Zoom sub-component state.
/// Encapsulates the existing ZoomState and adds handler logic.
#[derive(Debug, Default)]
pub struct State {
    /// The underlying zoom state (existing type).
    pub inner: ZoomState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Zoom in by one step.
    ZoomIn,
    /// Zoom out by one step.
    ZoomOut,
    /// Zoom input text changed.
    InputChanged(String),
    /// The settling window for a typed value elapsed.
    InputSettled(Ticket),
    /// Zoom input submitted (Enter pressed).
    InputSubmitted,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The render scale changed; the page must be rendered again.
    ScaleChanged,
    /// A settling timer must be started for this ticket.
    ScheduleSettle(Ticket),
}

impl State {
    #[must_use]
    pub fn new(zoom_step: ZoomStep, debounce: Duration) -> Self {
        Self {
            inner: ZoomState::new(zoom_step, debounce),
        }
    }

    /// Handle a zoom message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::ZoomIn => {
                self.inner.zoom_in();
                Effect::ScaleChanged
            }
            Message::ZoomOut => {
                self.inner.zoom_out();
                Effect::ScaleChanged
            }
            Message::InputChanged(input) => {
                let ticket = self.inner.on_zoom_input_changed(input);
                Effect::ScheduleSettle(ticket)
            }
            Message::InputSettled(ticket) => {
                if self.inner.on_zoom_input_settled(ticket) {
                    Effect::ScaleChanged
                } else {
                    Effect::None
                }
            }
            Message::InputSubmitted => {
                if self.inner.on_zoom_input_submitted() {
                    Effect::ScaleChanged
                } else {
                    Effect::None // Nothing pending, or not a number
                }
            }
        }
    }

    /// Current scale (1.0 = 100%).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.inner.scale
    }

    /// Scale to hand to the renderer.
    #[must_use]
    pub fn render_scale(&self) -> f32 {
        self.inner.render_scale()
    }

    /// Get the zoom input value.
    #[must_use]
    pub fn zoom_input(&self) -> &str {
        self.inner.zoom_input_value()
    }
}
