//! A single owned, cancelable delayed action.
//!
//! [`DelayedAction`] holds at most one scheduled callback. Scheduling drops
//! the previous handle first, and dropping a handle cancels its timer, so two
//! pending actions can never coexist.

use gloo_timers::callback::Timeout;

/// Something that can run a callback later. The returned handle cancels the
/// callback when dropped.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

pub struct DelayedAction<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> DelayedAction<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
        }
    }

    /// Replaces whatever is pending with `action`, run after `delay_ms`.
    pub fn schedule(&mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(action)));
    }

    /// Returns whether something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Forgets the handle of an action that has just run.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}


#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn runs_after_delay() {
        let scheduler = ManualScheduler::default();
        let mut action = DelayedAction::new(scheduler.clone());
        let fired = Rc::new(Cell::new(0));
        let counter = fired.clone();
        action.schedule(100, move || counter.set(counter.get() + 1));

        scheduler.advance(99);
        assert_eq!(fired.get(), 0);
        scheduler.advance(1);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn rescheduling_cancels_the_previous_action() {
        let scheduler = ManualScheduler::default();
        let mut action = DelayedAction::new(scheduler.clone());
        let fired = Rc::new(Cell::new(0));

        let first = fired.clone();
        action.schedule(100, move || first.set(first.get() + 1));
        scheduler.advance(60);
        let second = fired.clone();
        action.schedule(100, move || second.set(second.get() + 10));

        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(60);
        assert_eq!(fired.get(), 0);
        scheduler.advance(40);
        assert_eq!(fired.get(), 10);
    }

    #[test]
    fn cancel_reports_whether_anything_was_pending() {
        let scheduler = ManualScheduler::default();
        let mut action = DelayedAction::new(scheduler.clone());
        assert!(!action.cancel());
        action.schedule(100, || {});
        assert!(action.is_pending());
        assert!(action.cancel());
        assert_eq!(scheduler.pending(), 0);
    }
}
