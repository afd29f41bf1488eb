// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Initial render scale and zoom step
//! - **Render**: Bounds applied when a page is rasterized
//! - **Zoom Input**: Settling window for the typed zoom percentage

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale used when a document is first shown (1.0 = 100%).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Default zoom step for the zoom buttons, in percentage points.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = 10.0;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = 1.0;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = 100.0;

// ==========================================================================
// Render Defaults
// ==========================================================================

/// Smallest scale ever handed to the renderer.
///
/// The stored scale is not bounded; this only guards the rasterizer against
/// zero, negative or vanishing sizes.
pub const MIN_RENDER_SCALE: f32 = 0.1;

/// Largest scale ever handed to the renderer.
pub const MAX_RENDER_SCALE: f32 = 8.0;

// ==========================================================================
// Zoom Input Defaults
// ==========================================================================

/// Settling window for the zoom text field, in milliseconds.
pub const DEFAULT_ZOOM_DEBOUNCE_MS: u64 = 500;

/// Minimum settling window (0 commits on the next event loop turn).
pub const MIN_ZOOM_DEBOUNCE_MS: u64 = 0;

/// Maximum settling window.
pub const MAX_ZOOM_DEBOUNCE_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_SCALE > 0.0);
    assert!(MIN_ZOOM_STEP_PERCENT > 0.0);
    assert!(MAX_ZOOM_STEP_PERCENT > MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT >= MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT <= MAX_ZOOM_STEP_PERCENT);

    assert!(MIN_RENDER_SCALE > 0.0);
    assert!(MAX_RENDER_SCALE > MIN_RENDER_SCALE);
    assert!(DEFAULT_SCALE >= MIN_RENDER_SCALE);
    assert!(DEFAULT_SCALE <= MAX_RENDER_SCALE);

    assert!(MAX_ZOOM_DEBOUNCE_MS >= MIN_ZOOM_DEBOUNCE_MS);
    assert!(DEFAULT_ZOOM_DEBOUNCE_MS >= MIN_ZOOM_DEBOUNCE_MS);
    assert!(DEFAULT_ZOOM_DEBOUNCE_MS <= MAX_ZOOM_DEBOUNCE_MS);
};
