//! Hover-intent arbitration for the mega-menus.
//!
//! The controller is either closed or has exactly one menu open. Pointer
//! enter on a nav item opens (or switches to) its menu immediately; leaving
//! the combined nav + flyout zone only schedules a close, so crossing the gap
//! between link and panel does not flicker. Every transition cancels the
//! pending close before doing anything else.

use super::delayed_action::{DelayedAction, Scheduler};
use super::MenuId;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Desktop,
    Mobile,
}

impl Layout {
    pub fn for_width(viewport_width: f64) -> Self {
        if viewport_width >= config::DESKTOP_BREAKPOINT_PX {
            Layout::Desktop
        } else {
            Layout::Mobile
        }
    }
}

/// What the navigation bar has to change after a viewport resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeOutcome {
    pub layout: Layout,
    /// Close every menu and fold the mobile panel away.
    pub hide_menus: bool,
}

pub struct HoverIntent<S: Scheduler> {
    active: Option<MenuId>,
    pending_close: DelayedAction<S>,
    layout: Layout,
}

impl<S: Scheduler> HoverIntent<S> {
    pub fn new(scheduler: S, viewport_width: f64) -> Self {
        Self {
            active: None,
            pending_close: DelayedAction::new(scheduler),
            layout: Layout::for_width(viewport_width),
        }
    }

    pub fn active_menu(&self) -> Option<MenuId> {
        self.active
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn has_pending_close(&self) -> bool {
        self.pending_close.is_pending()
    }

    /// Pointer entered a nav item that owns a mega-menu. Desktop only.
    pub fn menu_hover(&mut self, id: MenuId) {
        if self.layout != Layout::Desktop {
            return;
        }
        self.pending_close.cancel();
        if self.active != Some(id) {
            log::debug!("mega-menu open: {id}");
            self.active = Some(id);
        }
    }

    /// Tap or keyboard activation of a nav item, at any width.
    pub fn toggle_menu(&mut self, id: MenuId) {
        self.pending_close.cancel();
        if self.active == Some(id) {
            self.active = None;
        } else {
            self.active = Some(id);
        }
    }

    /// Pointer re-entered the nav/flyout zone.
    pub fn area_enter(&mut self) {
        self.pending_close.cancel();
    }

    /// Pointer left the nav/flyout zone. `on_elapsed` runs once the close
    /// delay passes without another enter; it is expected to call
    /// [`HoverIntent::close_elapsed`].
    pub fn area_leave(&mut self, on_elapsed: impl FnOnce() + 'static) {
        if self.active.is_none() {
            return;
        }
        self.pending_close
            .schedule(config::MENU_CLOSE_DELAY_MS, on_elapsed);
    }

    /// The scheduled close fired.
    pub fn close_elapsed(&mut self) {
        self.pending_close.settle();
        if let Some(id) = self.active.take() {
            log::debug!("mega-menu closed after leave: {id}");
        }
    }

    /// Closes immediately, cancelling any pending close. Returns whether
    /// anything changed.
    pub fn close_all(&mut self) -> bool {
        let cancelled = self.pending_close.cancel();
        let was_open = self.active.take().is_some();
        was_open || cancelled
    }

    /// Viewport resized. Crossing the breakpoint closes everything; returns
    /// whether it did.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let layout = Layout::for_width(viewport_width);
        if layout == self.layout {
            return false;
        }
        self.layout = layout;
        self.close_all();
        true
    }

    pub fn viewport_resized(&mut self, viewport_width: f64) -> ResizeOutcome {
        let hide_menus = self.resize(viewport_width);
        ResizeOutcome {
            layout: self.layout,
            hide_menus,
        }
    }

    /// Document keydown. `Escape` closes everything, the mobile panel included;
    /// returns whether the menus should be hidden.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        if key != "Escape" {
            return false;
        }
        self.close_all();
        true
    }

    /// Document pointer-down. Anything outside the nav bar and the flyout
    /// closes everything; returns whether the menus should be hidden.
    pub fn pointer_down(&mut self, inside_navigation: bool) -> bool {
        if inside_navigation {
            return false;
        }
        self.close_all();
        true
    }
}
