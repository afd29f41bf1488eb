// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── pages - Page count and current page
//!     └── zoom  - Encapsulates ZoomState and the debounced zoom field
//! ```

pub mod pages;
pub mod zoom;
