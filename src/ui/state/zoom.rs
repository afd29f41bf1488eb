// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles all zoom-related state and logic, including:
//! - The authoritative render scale and the zoom buttons
//! - The free-text zoom percentage field
//! - Debounced propagation of the typed percentage into the scale
//!
//! The zoom buttons change the scale directly and leave the text field alone,
//! so the field can show a different percentage than the one rendered.

pub use crate::config::{
    DEFAULT_SCALE, DEFAULT_ZOOM_DEBOUNCE_MS, DEFAULT_ZOOM_STEP_PERCENT, MAX_RENDER_SCALE,
    MAX_ZOOM_STEP_PERCENT, MIN_RENDER_SCALE, MIN_ZOOM_STEP_PERCENT,
};

use super::debounce::{Debounced, Settled, Ticket};
use std::time::Duration;

/// Zoom step percentage, guaranteed to be within valid range (1%–100%).
///
/// This type ensures that zoom step values are always valid, eliminating
/// the need for manual clamping at usage sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        Self(percent.clamp(MIN_ZOOM_STEP_PERCENT, MAX_ZOOM_STEP_PERCENT))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the step as a scale delta (e.g., 10% → 0.1).
    #[must_use]
    pub fn as_factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP_PERCENT)
    }
}

/// Manages all zoom-related state for the page viewer
#[derive(Debug)]
pub struct ZoomState {
    /// Authoritative render multiplier (1.0 = 100%). Not bounded.
    pub scale: f64,

    /// Zoom step for zoom in/out operations (guaranteed valid by type).
    pub zoom_step: ZoomStep,

    /// Current zoom input string (for the text field)
    pub zoom_input: String,

    /// Parsed zoom input, `None` when the text is not a number.
    pub zoom_input_value: Option<f64>,

    /// Delayed copy of `zoom_input_value`.
    debounced_input: Debounced<Option<f64>>,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomStep::default(), Duration::from_millis(DEFAULT_ZOOM_DEBOUNCE_MS))
    }
}

impl ZoomState {
    /// Creates zoom state at the default scale with the given step and
    /// settling window.
    #[must_use]
    pub fn new(zoom_step: ZoomStep, debounce: Duration) -> Self {
        let scale = f64::from(DEFAULT_SCALE);
        let percent = scale * 100.0;
        Self {
            scale,
            zoom_step,
            zoom_input: format_number(percent),
            zoom_input_value: Some(percent),
            debounced_input: Debounced::new(Some(percent), debounce),
        }
    }

    /// Applies zoom in by one step
    pub fn zoom_in(&mut self) {
        self.scale += self.zoom_step.as_factor();
    }

    /// Applies zoom out by one step
    pub fn zoom_out(&mut self) {
        self.scale -= self.zoom_step.as_factor();
    }

    /// Handles zoom input change.
    ///
    /// The raw text is kept for display even when it does not parse. The
    /// returned ticket identifies the settling window that was just opened.
    pub fn on_zoom_input_changed(&mut self, input: String) -> Ticket {
        self.zoom_input_value = parse_float(&input);
        self.zoom_input = input;
        self.debounced_input.push(self.zoom_input_value)
    }

    /// Handles the end of a settling window. Returns whether the scale changed.
    pub fn on_zoom_input_settled(&mut self, ticket: Ticket) -> bool {
        let settled = self.debounced_input.settle(ticket);
        self.commit(settled)
    }

    /// Handles zoom input submission (Enter): commits without waiting.
    pub fn on_zoom_input_submitted(&mut self) -> bool {
        let settled = self.debounced_input.flush();
        self.commit(settled)
    }

    fn commit(&mut self, settled: Settled<Option<f64>>) -> bool {
        match settled {
            Settled::Changed(Some(percent)) => {
                self.scale = percent / 100.0;
                true
            }
            Settled::Changed(None) | Settled::Unchanged | Settled::Stale => false,
        }
    }

    /// Gets the zoom input value
    #[must_use]
    pub fn zoom_input_value(&self) -> &str {
        &self.zoom_input
    }

    /// Ticket of the settling window currently open for the zoom field.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.debounced_input.pending_ticket()
    }

    /// The debounced copy of the zoom field (drives timer scheduling).
    pub fn debounced_input_mut(&mut self) -> &mut Debounced<Option<f64>> {
        &mut self.debounced_input
    }

    /// Scale handed to the renderer, kept inside the supported render range.
    #[must_use]
    // Clamped first, so narrowing only drops precision
    #[allow(clippy::cast_possible_truncation)]
    pub fn render_scale(&self) -> f32 {
        if self.scale.is_nan() {
            return DEFAULT_SCALE;
        }
        self.scale
            .clamp(f64::from(MIN_RENDER_SCALE), f64::from(MAX_RENDER_SCALE)) as f32
    }

    /// Scale as a whole percentage for display ("Zoom: 120%").
    #[must_use]
    pub fn display_percent(&self) -> String {
        format_percent(self.scale)
    }
}

/// Formats a scale as a whole percentage.
///
/// Halves round up (`-12.5` → `-12`, `12.5` → `13`).
#[must_use]
pub fn format_percent(scale: f64) -> String {
    let percent = scale * 100.0;
    if percent.is_nan() {
        return "NaN".to_string();
    }
    if percent.is_infinite() {
        return if percent > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let floor = percent.floor();
    let rounded = if percent - floor >= 0.5 { floor + 1.0 } else { floor };
    // + 0.0 turns -0 into 0
    format!("{:.0}", rounded + 0.0)
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i64;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Parses the longest numeric prefix of `input`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent and the literal `Infinity`. Trailing garbage is ignored
/// (`"50%"` → 50). Returns `None` when no number starts the text.
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    let text = input.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

    if text[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let digits_start = end;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let mut literal = String::with_capacity(end - digits_start + 2);
    if negative {
        literal.push('-');
    }
    if int_digits == 0 {
        literal.push('0');
    }
    literal.push_str(&text[digits_start..end]);

    // Overflowing exponents parse to infinity
    literal.parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-4,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn default_zoom_state_is_consistent() {
        let state = ZoomState::default();
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.zoom_input, "100");
        assert_eq!(state.zoom_input_value, Some(100.0));
        assert_eq!(state.pending_ticket(), None);
        assert_eq!(state.display_percent(), "100");
    }

    #[test]
    fn zoom_in_out_work_correctly() {
        let mut state = ZoomState::default();

        state.zoom_in();
        assert_close(state.scale, 1.1);

        state.zoom_out();
        assert_close(state.scale, 1.0);
    }

    #[test]
    fn scale_follows_button_count_for_any_sequence() {
        let mut state = ZoomState::default();
        let sequence = [true, true, false, true, false, false, false, true, true, true];
        let mut net = 0_i32;

        for zoom_in in sequence {
            if zoom_in {
                state.zoom_in();
                net += 1;
            } else {
                state.zoom_out();
                net -= 1;
            }
        }

        assert_close(state.scale, 1.0 + 0.1 * f64::from(net));
    }

    #[test]
    fn zoom_out_is_not_bounded_below() {
        let mut state = ZoomState::default();
        for _ in 0..12 {
            state.zoom_out();
        }

        assert_close(state.scale, -0.2);
        assert_eq!(state.display_percent(), "-20");
        assert_eq!(state.render_scale(), MIN_RENDER_SCALE);
    }

    #[test]
    fn buttons_leave_zoom_field_untouched() {
        let mut state = ZoomState::default();
        state.zoom_in();
        state.zoom_in();

        assert_eq!(state.display_percent(), "120");
        assert_eq!(state.zoom_input_value(), "100");
    }

    #[test]
    fn typed_value_commits_only_when_settled() {
        let mut state = ZoomState::default();
        let ticket = state.on_zoom_input_changed("50".to_string());

        assert_eq!(state.zoom_input_value, Some(50.0));
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.pending_ticket(), Some(ticket));

        assert!(state.on_zoom_input_settled(ticket));
        assert_close(state.scale, 0.5);
        assert_eq!(state.display_percent(), "50");
        assert_eq!(state.pending_ticket(), None);
    }

    #[test]
    fn keystroke_during_settling_restarts_window() {
        let mut state = ZoomState::default();
        let first = state.on_zoom_input_changed("2".to_string());
        let second = state.on_zoom_input_changed("25".to_string());

        assert!(!state.on_zoom_input_settled(first));
        assert_eq!(state.scale, 1.0);

        assert!(state.on_zoom_input_settled(second));
        assert_close(state.scale, 0.25);
    }

    #[test]
    fn non_numeric_input_is_ignored() {
        let mut state = ZoomState::default();
        state.zoom_in();
        let ticket = state.on_zoom_input_changed("abc".to_string());

        assert_eq!(state.zoom_input_value(), "abc");
        assert_eq!(state.zoom_input_value, None);
        assert!(!state.on_zoom_input_settled(ticket));
        assert_close(state.scale, 1.1);
    }

    #[test]
    fn settling_unchanged_value_keeps_button_scale() {
        let mut state = ZoomState::default();
        state.zoom_in();
        let ticket = state.on_zoom_input_changed("100".to_string());

        assert!(!state.on_zoom_input_settled(ticket));
        assert_close(state.scale, 1.1);
    }

    #[test]
    fn number_after_invalid_text_commits_again() {
        let mut state = ZoomState::default();
        let ticket = state.on_zoom_input_changed("50".to_string());
        state.on_zoom_input_settled(ticket);
        let ticket = state.on_zoom_input_changed("x".to_string());
        state.on_zoom_input_settled(ticket);
        state.zoom_in();

        let ticket = state.on_zoom_input_changed("50".to_string());
        assert!(state.on_zoom_input_settled(ticket));
        assert_close(state.scale, 0.5);
    }

    #[test]
    fn submit_commits_immediately() {
        let mut state = ZoomState::default();
        let ticket = state.on_zoom_input_changed("200".to_string());

        assert!(state.on_zoom_input_submitted());
        assert_close(state.scale, 2.0);
        assert!(!state.on_zoom_input_settled(ticket));
    }

    #[test]
    fn render_scale_is_clamped() {
        let mut state = ZoomState::default();
        state.scale = 40.0;
        assert_eq!(state.render_scale(), MAX_RENDER_SCALE);
        state.scale = 0.0;
        assert_eq!(state.render_scale(), MIN_RENDER_SCALE);
        state.scale = 1.5;
        assert_eq!(state.render_scale(), 1.5);
    }

    #[test]
    fn zoom_step_clamps() {
        assert_eq!(ZoomStep::new(0.0).value(), MIN_ZOOM_STEP_PERCENT);
        assert_eq!(ZoomStep::new(500.0).value(), MAX_ZOOM_STEP_PERCENT);
        assert_close(ZoomStep::new(25.0).as_factor(), 0.25);
    }

    #[test]
    fn parse_float_accepts_numeric_prefixes() {
        assert_eq!(parse_float("50"), Some(50.0));
        assert_eq!(parse_float("  12.5"), Some(12.5));
        assert_eq!(parse_float("50%"), Some(50.0));
        assert_eq!(parse_float("-3"), Some(-3.0));
        assert_eq!(parse_float("+7"), Some(7.0));
        assert_eq!(parse_float(".5"), Some(0.5));
        assert_eq!(parse_float("5."), Some(5.0));
        assert_eq!(parse_float("1e2"), Some(100.0));
        assert_eq!(parse_float("1e"), Some(1.0));
        assert_eq!(parse_float("2.e1"), Some(20.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float("-Infinityx"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float("1e999"), Some(f64::INFINITY));
    }

    #[test]
    fn parse_float_rejects_non_numbers() {
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("."), None);
        assert_eq!(parse_float("-"), None);
        assert_eq!(parse_float("e5"), None);
        assert_eq!(parse_float("%50"), None);
    }

    #[test]
    fn format_number_trims_decimals() {
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn format_percent_rounds() {
        assert_eq!(format_percent(1.2), "120");
        assert_eq!(format_percent(0.004), "0");
        assert_eq!(format_percent(-0.004), "0");
        assert_eq!(format_percent(1.234), "123");
    }

    #[test]
    fn format_percent_rounds_halves_up() {
        assert_eq!(format_percent(0.125), "13");
        assert_eq!(format_percent(-0.125), "-12");
        assert_eq!(format_percent(-0.005), "0");
        assert_eq!(format_percent(-0.015), "-1");
    }

    #[test]
    fn format_percent_spells_out_infinity() {
        assert_eq!(format_percent(f64::INFINITY), "Infinity");
        assert_eq!(format_percent(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn large_typed_values_stay_finite() {
        assert_eq!(parse_float("1e39"), Some(1e39));

        let mut state = ZoomState::default();
        let ticket = state.on_zoom_input_changed("1e39".to_string());
        assert!(state.on_zoom_input_settled(ticket));
        assert!(state.scale.is_finite());
        assert_close(state.scale / 1e37, 1.0);
        assert_eq!(state.render_scale(), MAX_RENDER_SCALE);
    }
}
