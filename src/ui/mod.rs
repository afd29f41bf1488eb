// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Page viewer with navigation and zoom controls
//! - [`state`] - Reusable state management (pages, zoom, debounce)

pub mod state;
pub mod viewer;
