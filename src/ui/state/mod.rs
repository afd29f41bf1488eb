// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer state logic separated from the widgets,
//! so it can be driven and tested without a window.

pub mod debounce;
pub mod pages;
pub mod zoom;

// Re-export commonly used types for convenience
pub use debounce::{Debounced, Settled, Ticket};
pub use pages::PageState;
pub use zoom::{ZoomState, ZoomStep};
