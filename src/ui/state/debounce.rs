// SPDX-License-Identifier: MPL-2.0
//! Value-settling primitive.
//!
//! [`Debounced`] keeps a delayed copy of a rapidly changing value. Every
//! [`push`](Debounced::push) cancels the pending emission and opens a new
//! settling window identified by a [`Ticket`]. When the timer for that ticket
//! fires, [`settle`](Debounced::settle) promotes the pending value to the
//! delayed value and reports whether it changed. Tickets from superseded
//! windows are reported as [`Settled::Stale`] and have no effect.
//!
//! The timer itself runs as an abortable iced task. Its handle is owned by the
//! `Debounced` value and aborts on drop, so a superseded timer (or one whose
//! owner is gone) never fires into the update loop.
//!
//! # Example
//!
//! ```
//! use iced_pager::ui::state::debounce::{Debounced, Settled};
//! use std::time::Duration;
//!
//! let mut zoom = Debounced::new(100.0_f32, Duration::from_millis(500));
//! let first = zoom.push(150.0);
//! let second = zoom.push(50.0);
//!
//! assert_eq!(zoom.settle(first), Settled::Stale);
//! assert_eq!(zoom.settle(second), Settled::Changed(50.0));
//! assert_eq!(*zoom.value(), 50.0);
//! ```

use iced::task::{Handle, Task};
use std::future::Future;
use std::time::Duration;

/// Identifies one settling window of a [`Debounced`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Outcome of completing a settling window.
#[derive(Debug, Clone, PartialEq)]
pub enum Settled<T> {
    /// The delayed value was updated to a different value.
    Changed(T),
    /// The window completed but the delayed value is the same as before.
    Unchanged,
    /// The ticket was superseded or cancelled; nothing happened.
    Stale,
}

/// A value that only propagates after it stopped changing for `delay`.
pub struct Debounced<T> {
    value: T,
    pending: Option<(Ticket, T)>,
    next_ticket: u64,
    delay: Duration,
    timer: Option<Handle>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Debounced<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debounced")
            .field("value", &self.value)
            .field("pending", &self.pending)
            .field("delay", &self.delay)
            .field("timer_running", &self.timer.is_some())
            .finish()
    }
}

impl<T: Clone + PartialEq> Debounced<T> {
    /// Creates a debounced value. The delayed value starts as `initial`
    /// without waiting.
    #[must_use]
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            value: initial,
            pending: None,
            next_ticket: 0,
            delay,
            timer: None,
        }
    }

    /// The current delayed (settled) value.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The value waiting for its settling window, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, value)| value)
    }

    /// Ticket of the open settling window, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Whether a settling window is open.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a new input value, cancelling any pending emission.
    ///
    /// The returned ticket must be passed back to [`settle`](Self::settle)
    /// once `delay` has elapsed.
    pub fn push(&mut self, value: T) -> Ticket {
        self.timer = None;
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Completes the settling window opened by `ticket`.
    pub fn settle(&mut self, ticket: Ticket) -> Settled<T> {
        match &self.pending {
            Some((current, _)) if *current == ticket => self.promote(),
            _ => Settled::Stale,
        }
    }

    /// Settles the pending value immediately, if there is one.
    pub fn flush(&mut self) -> Settled<T> {
        if self.pending.is_some() {
            self.promote()
        } else {
            Settled::Stale
        }
    }

    /// Drops the pending emission and releases its timer.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.timer = None;
    }

    /// Returns a future resolving to `ticket` after the settling window.
    pub fn timer(&self, ticket: Ticket) -> impl Future<Output = Ticket> + Send + 'static {
        elapse(self.delay, ticket)
    }

    /// Starts the timer for `ticket` as an abortable task.
    ///
    /// The previous timer, if any, is aborted. The new one is aborted when
    /// this value is dropped.
    pub fn schedule<M, F>(&mut self, ticket: Ticket, on_elapsed: F) -> Task<M>
    where
        M: Send + 'static,
        F: FnOnce(Ticket) -> M + Send + 'static,
    {
        let (task, handle) = Task::perform(elapse(self.delay, ticket), on_elapsed).abortable();
        self.timer = Some(handle.abort_on_drop());
        task
    }

    fn promote(&mut self) -> Settled<T> {
        self.timer = None;
        let Some((_, value)) = self.pending.take() else {
            return Settled::Stale;
        };

        if value == self.value {
            Settled::Unchanged
        } else {
            self.value = value.clone();
            Settled::Changed(value)
        }
    }
}

async fn elapse(delay: Duration, ticket: Ticket) -> Ticket {
    tokio::time::sleep(delay).await;
    ticket
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debounced(initial: f32) -> Debounced<f32> {
        Debounced::new(initial, Duration::from_millis(500))
    }

    #[test]
    fn initial_value_is_available_immediately() {
        let value = debounced(100.0);
        assert_eq!(*value.value(), 100.0);
        assert!(!value.is_settling());
    }

    #[test]
    fn settling_current_ticket_promotes_value() {
        let mut value = debounced(100.0);
        let ticket = value.push(50.0);

        assert!(value.is_settling());
        assert_eq!(value.pending(), Some(&50.0));
        assert_eq!(value.pending_ticket(), Some(ticket));
        assert_eq!(*value.value(), 100.0);

        assert_eq!(value.settle(ticket), Settled::Changed(50.0));
        assert_eq!(*value.value(), 50.0);
        assert!(!value.is_settling());
    }

    #[test]
    fn new_push_supersedes_pending_ticket() {
        let mut value = debounced(100.0);
        let first = value.push(5.0);
        let second = value.push(50.0);

        assert_eq!(value.settle(first), Settled::Stale);
        assert_eq!(*value.value(), 100.0);
        assert_eq!(value.settle(second), Settled::Changed(50.0));
    }

    #[test]
    fn settling_same_value_reports_unchanged() {
        let mut value = debounced(100.0);
        let ticket = value.push(100.0);
        assert_eq!(value.settle(ticket), Settled::Unchanged);
    }

    #[test]
    fn ticket_cannot_settle_twice() {
        let mut value = debounced(100.0);
        let ticket = value.push(80.0);
        assert_eq!(value.settle(ticket), Settled::Changed(80.0));
        assert_eq!(value.settle(ticket), Settled::Stale);
    }

    #[test]
    fn flush_settles_pending_value() {
        let mut value = debounced(100.0);
        value.push(300.0);
        assert_eq!(value.flush(), Settled::Changed(300.0));
        assert_eq!(value.flush(), Settled::Stale);
    }

    #[test]
    fn cancel_discards_pending_value() {
        let mut value = debounced(100.0);
        let ticket = value.push(300.0);
        value.cancel();
        assert_eq!(value.settle(ticket), Settled::Stale);
        assert_eq!(*value.value(), 100.0);
    }

    #[test]
    fn optional_values_compare_by_presence() {
        let mut value: Debounced<Option<f32>> = Debounced::new(None, Duration::ZERO);
        let ticket = value.push(None);
        assert_eq!(value.settle(ticket), Settled::Unchanged);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_resolves_after_delay() {
        let mut value = debounced(100.0);
        let ticket = value.push(42.0);
        let start = tokio::time::Instant::now();

        let fired = value.timer(ticket).await;

        assert_eq!(fired, ticket);
        assert!(start.elapsed() >= Duration::from_millis(500));
        assert_eq!(value.settle(fired), Settled::Changed(42.0));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_does_not_resolve_early() {
        let mut value = debounced(100.0);
        let ticket = value.push(42.0);

        let result =
            tokio::time::timeout(Duration::from_millis(499), value.timer(ticket)).await;

        assert!(result.is_err());
    }
}
