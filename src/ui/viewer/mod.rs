// SPDX-License-Identifier: MPL-2.0
//! Page viewer: control bar plus the rendered page.

pub mod component;
pub mod controls;
pub mod subcomponents;
