// SPDX-License-Identifier: MPL-2.0
//! `iced_pager` is a minimal single-page PDF viewer built with the Iced GUI framework.
//!
//! It shows one page at a time with previous/next navigation, a page picker,
//! zoom buttons and a zoom percentage field that is applied once the user
//! stops typing. Rasterization is delegated to PDFium on a dedicated thread.

pub mod app;
pub mod config;
pub mod document;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
