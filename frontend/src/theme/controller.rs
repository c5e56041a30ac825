//! The theme state machine.
//!
//! Modes: `Manual` keeps the last explicit toggle, `System` mirrors the OS
//! preference, `TimeBased` follows the local clock. Only `TimeBased` is ever
//! recomputed by [`ThemeController::check`]; an explicit toggle switches to
//! `Manual` and stays there until the user picks another mode.
//!
//! Every change is written in the same order: in-memory state, then the
//! document class, then storage.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::{is_night, Theme, ThemeMode};
use crate::config;
use crate::storage::{
    KeyValueStore, LAST_SUNSET_CHECK_KEY, THEME_KEY, THEME_PREFERENCE_KEY,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The document and environment the controller drives.
#[cfg_attr(test, mockall::automock)]
pub trait ThemeHost {
    /// Local wall-clock time.
    fn now(&self) -> NaiveDateTime;
    /// `None` when the color-scheme media query is unsupported.
    fn system_prefers_dark(&self) -> Option<bool>;
    fn set_dark_class(&self, dark: bool);
    /// Enables the short color transition for the next class change.
    fn start_transition(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SunsetResponse {
    /// Switch to dark and keep it.
    Accept,
    /// Leave everything as is until tomorrow.
    Decline,
    /// Stop deciding manually and follow the OS.
    FollowSystem,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub is_dark: bool,
    pub sunset_prompt: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CheckOutcome {
    pub theme_changed: bool,
    pub prompt_offered: bool,
}

#[cfg(debug_assertions)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeDebugInfo {
    pub mode: ThemeMode,
    pub is_dark: bool,
    pub now: NaiveDateTime,
    pub night: bool,
    pub last_prompted: Option<NaiveDate>,
    pub sunset_prompt: bool,
}

pub struct ThemeController<H: ThemeHost, S: KeyValueStore> {
    host: H,
    store: S,
    mode: ThemeMode,
    is_dark: bool,
    last_prompted: Option<NaiveDate>,
    prompt_open: bool,
}

impl<H: ThemeHost, S: KeyValueStore> ThemeController<H, S> {
    /// Loads the persisted preference and applies it to the document.
    /// Missing or malformed values fall back to `System` and light.
    pub fn restore(host: H, store: S) -> Self {
        let mode = store
            .get(THEME_PREFERENCE_KEY)
            .and_then(|value| value.parse::<ThemeMode>().ok())
            .unwrap_or_default();
        let is_dark = match mode {
            ThemeMode::Manual => store
                .get(THEME_KEY)
                .and_then(|value| Theme::parse(&value))
                == Some(Theme::Dark),
            ThemeMode::System => host.system_prefers_dark().unwrap_or(false),
            ThemeMode::TimeBased => is_night(&host.now()),
        };
        let last_prompted = store
            .get(LAST_SUNSET_CHECK_KEY)
            .and_then(|value| NaiveDate::parse_from_str(&value, DATE_FORMAT).ok());

        host.set_dark_class(is_dark);
        log::debug!("theme restored: mode={mode} dark={is_dark}");

        Self {
            host,
            store,
            mode,
            is_dark,
            last_prompted,
            prompt_open: false,
        }
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            mode: self.mode,
            is_dark: self.is_dark,
            sunset_prompt: self.prompt_open,
        }
    }

    /// Periodic and on-visibility re-evaluation. Idempotent: running it twice
    /// at the same instant changes nothing the second time.
    pub fn check(&mut self) -> CheckOutcome {
        let now = self.host.now();
        let mut outcome = CheckOutcome::default();

        if self.mode == ThemeMode::TimeBased {
            let night = is_night(&now);
            if night != self.is_dark {
                self.apply(night, true);
                outcome.theme_changed = true;
            }
        }

        // An unanswered prompt from an earlier evening is stale by now
        if self.prompt_open && self.last_prompted != Some(now.date()) {
            self.prompt_open = false;
        }

        if self.sunset_prompt_due(&now) {
            let today = now.date();
            self.prompt_open = true;
            self.last_prompted = Some(today);
            self.store
                .set(LAST_SUNSET_CHECK_KEY, &today.format(DATE_FORMAT).to_string());
            outcome.prompt_offered = true;
        }

        outcome
    }

    /// The sun/moon button. Always ends in `Manual`.
    pub fn toggle(&mut self) {
        self.mode = ThemeMode::Manual;
        self.prompt_open = false;
        let dark = !self.is_dark;
        self.apply(dark, true);
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        let dark = match mode {
            ThemeMode::Manual => self.is_dark,
            ThemeMode::System => self.host.system_prefers_dark().unwrap_or(false),
            ThemeMode::TimeBased => is_night(&self.host.now()),
        };
        let animate = dark != self.is_dark;
        self.apply(dark, animate);
    }

    pub fn respond(&mut self, response: SunsetResponse) {
        self.prompt_open = false;
        match response {
            SunsetResponse::Accept => {
                self.mode = ThemeMode::Manual;
                let animate = !self.is_dark;
                self.apply(true, animate);
            }
            SunsetResponse::Decline => {}
            SunsetResponse::FollowSystem => self.set_mode(ThemeMode::System),
        }
    }

    /// The OS color-scheme preference changed. Returns whether the theme did.
    pub fn system_scheme_changed(&mut self, prefers_dark: bool) -> bool {
        if self.mode != ThemeMode::System || prefers_dark == self.is_dark {
            return false;
        }
        self.apply(prefers_dark, true);
        true
    }

    fn sunset_prompt_due(&self, now: &NaiveDateTime) -> bool {
        let hour = now.hour();
        let in_window = hour >= config::NIGHT_START_HOUR
            && hour < config::NIGHT_START_HOUR + config::SUNSET_PROMPT_GRACE_HOURS;
        in_window
            && !self.prompt_open
            && self.last_prompted != Some(now.date())
            && !self.forces_dark()
    }

    fn forces_dark(&self) -> bool {
        self.mode != ThemeMode::TimeBased && self.is_dark
    }

    fn apply(&mut self, dark: bool, animate: bool) {
        self.is_dark = dark;
        if animate {
            self.host.start_transition();
        }
        self.host.set_dark_class(dark);
        self.store.set(THEME_KEY, Theme::from_dark(dark).as_str());
        self.store.set(THEME_PREFERENCE_KEY, self.mode.as_str());
        log::debug!("theme applied: mode={} dark={dark}", self.mode);
    }
}

#[cfg(debug_assertions)]
impl<H: ThemeHost, S: KeyValueStore> ThemeController<H, S> {
    pub fn debug_snapshot(&self) -> ThemeDebugInfo {
        let now = self.host.now();
        ThemeDebugInfo {
            mode: self.mode,
            is_dark: self.is_dark,
            now,
            night: is_night(&now),
            last_prompted: self.last_prompted,
            sunset_prompt: self.prompt_open,
        }
    }

    /// Forgets every stored theme preference and returns to following the OS.
    pub fn debug_reset(&mut self) {
        self.mode = ThemeMode::System;
        self.last_prompted = None;
        self.prompt_open = false;
        self.is_dark = self.host.system_prefers_dark().unwrap_or(false);
        self.host.set_dark_class(self.is_dark);
        for key in [THEME_KEY, THEME_PREFERENCE_KEY, LAST_SUNSET_CHECK_KEY] {
            self.store.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, MockKeyValueStore};
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeHost {
        now: Rc<Cell<NaiveDateTime>>,
        system_dark: Rc<Cell<Option<bool>>>,
        dark_class: Rc<Cell<Option<bool>>>,
        transitions: Rc<Cell<u32>>,
    }

    impl FakeHost {
        fn at(day: u32, hour: u32, minute: u32) -> Self {
            Self {
                now: Rc::new(Cell::new(time(day, hour, minute))),
                system_dark: Rc::new(Cell::new(None)),
                dark_class: Rc::new(Cell::new(None)),
                transitions: Rc::new(Cell::new(0)),
            }
        }

        fn set_time(&self, day: u32, hour: u32, minute: u32) {
            self.now.set(time(day, hour, minute));
        }
    }

    impl ThemeHost for FakeHost {
        fn now(&self) -> NaiveDateTime {
            self.now.get()
        }

        fn system_prefers_dark(&self) -> Option<bool> {
            self.system_dark.get()
        }

        fn set_dark_class(&self, dark: bool) {
            self.dark_class.set(Some(dark));
        }

        fn start_transition(&self) {
            self.transitions.set(self.transitions.get() + 1);
        }
    }

    fn time(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn store_with(entries: &[(&str, &str)]) -> MemoryStore {
        let store = MemoryStore::default();
        for (key, value) in entries {
            store.set(key, value);
        }
        store
    }

    #[test]
    fn empty_storage_follows_system_and_defaults_light() {
        let host = FakeHost::at(16, 12, 0);
        let controller = ThemeController::restore(host.clone(), MemoryStore::default());
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.mode, ThemeMode::System);
        assert!(!snapshot.is_dark);
        assert_eq!(host.dark_class.get(), Some(false));
    }

    #[test]
    fn system_mode_reads_the_os_preference() {
        let host = FakeHost::at(16, 12, 0);
        host.system_dark.set(Some(true));
        let controller = ThemeController::restore(host, MemoryStore::default());
        assert!(controller.snapshot().is_dark);
    }

    #[test]
    fn malformed_preference_falls_back_to_system() {
        let host = FakeHost::at(16, 12, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "sometimes"), (THEME_KEY, "dark")]);
        let controller = ThemeController::restore(host, store);
        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn manual_mode_restores_verbatim_regardless_of_clock() {
        let host = FakeHost::at(16, 23, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "manual"), (THEME_KEY, "light")]);
        let controller = ThemeController::restore(host, store);
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn time_based_mode_restores_from_the_clock() {
        let host = FakeHost::at(16, 4, 30);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "time-based"), (THEME_KEY, "light")]);
        let controller = ThemeController::restore(host, store);
        assert!(controller.snapshot().is_dark);
    }

    #[test]
    fn manual_toggle_survives_a_reload() {
        let host = FakeHost::at(16, 12, 0);
        let store = MemoryStore::default();
        let mut controller = ThemeController::restore(host.clone(), store.clone());
        controller.toggle();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(store.get(THEME_PREFERENCE_KEY).as_deref(), Some("manual"));

        let reloaded = ThemeController::restore(host, store);
        assert_eq!(reloaded.snapshot().mode, ThemeMode::Manual);
        assert!(reloaded.snapshot().is_dark);
    }

    #[test]
    fn sunset_switches_time_based_to_dark_and_prompts_once() {
        let host = FakeHost::at(16, 17, 59);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "time-based")]);
        let mut controller = ThemeController::restore(host.clone(), store.clone());
        assert_eq!(controller.check(), CheckOutcome::default());
        assert!(!controller.snapshot().is_dark);

        host.set_time(16, 18, 0);
        let outcome = controller.check();
        assert!(outcome.theme_changed);
        assert!(outcome.prompt_offered);
        assert!(controller.snapshot().is_dark);
        assert!(controller.snapshot().sunset_prompt);
        assert_eq!(host.dark_class.get(), Some(true));
        assert_eq!(store.get(LAST_SUNSET_CHECK_KEY).as_deref(), Some("2026-10-16"));

        host.set_time(16, 18, 1);
        assert_eq!(controller.check(), CheckOutcome::default());

        controller.respond(SunsetResponse::Accept);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.mode, ThemeMode::Manual);
        assert!(snapshot.is_dark);
        assert!(!snapshot.sunset_prompt);
    }

    #[test]
    fn clock_never_overrides_manual_mode() {
        let host = FakeHost::at(16, 5, 59);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "manual"), (THEME_KEY, "dark")]);
        let mut controller = ThemeController::restore(host.clone(), store.clone());

        host.set_time(16, 6, 0);
        let outcome = controller.check();
        assert!(!outcome.theme_changed);
        assert!(controller.snapshot().is_dark);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(host.transitions.get(), 0);
    }

    #[test]
    fn repeated_checks_are_idempotent() {
        let host = FakeHost::at(16, 6, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "time-based")]);
        let mut controller = ThemeController::restore(host.clone(), store);
        host.set_time(16, 19, 0);
        assert!(controller.check().theme_changed);
        assert!(!controller.check().theme_changed);
        assert_eq!(host.transitions.get(), 1);
    }

    #[test]
    fn declining_waits_for_the_next_day() {
        let host = FakeHost::at(16, 18, 5);
        let mut controller = ThemeController::restore(host.clone(), MemoryStore::default());
        assert!(controller.check().prompt_offered);
        controller.respond(SunsetResponse::Decline);
        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(!controller.snapshot().is_dark);

        host.set_time(16, 18, 30);
        assert!(!controller.check().prompt_offered);
        host.set_time(17, 18, 0);
        assert!(controller.check().prompt_offered);
    }

    #[test]
    fn prompt_date_survives_a_reload() {
        let host = FakeHost::at(16, 18, 0);
        let store = MemoryStore::default();
        let mut controller = ThemeController::restore(host.clone(), store.clone());
        assert!(controller.check().prompt_offered);

        let mut reloaded = ThemeController::restore(host, store);
        assert!(!reloaded.check().prompt_offered);
    }

    #[test]
    fn late_first_check_still_prompts_within_grace() {
        let host = FakeHost::at(16, 20, 59);
        let mut controller = ThemeController::restore(host.clone(), MemoryStore::default());
        assert!(controller.check().prompt_offered);

        let host = FakeHost::at(16, 21, 0);
        let mut controller = ThemeController::restore(host, MemoryStore::default());
        assert!(!controller.check().prompt_offered);
    }

    #[test]
    fn no_prompt_when_already_forced_dark() {
        let host = FakeHost::at(16, 18, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "manual"), (THEME_KEY, "dark")]);
        let mut controller = ThemeController::restore(host, store.clone());
        assert!(!controller.check().prompt_offered);
        assert_eq!(store.get(LAST_SUNSET_CHECK_KEY), None);
    }

    #[test]
    fn follow_system_recomputes_from_the_os() {
        let host = FakeHost::at(16, 18, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "manual"), (THEME_KEY, "light")]);
        let mut controller = ThemeController::restore(host.clone(), store.clone());
        assert!(controller.check().prompt_offered);

        host.system_dark.set(Some(true));
        controller.respond(SunsetResponse::FollowSystem);
        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(controller.snapshot().is_dark);
        assert_eq!(store.get(THEME_PREFERENCE_KEY).as_deref(), Some("system"));
    }

    #[test]
    fn os_changes_only_matter_in_system_mode() {
        let host = FakeHost::at(16, 12, 0);
        let mut controller = ThemeController::restore(host, MemoryStore::default());
        assert!(controller.system_scheme_changed(true));
        assert!(controller.snapshot().is_dark);
        assert!(!controller.system_scheme_changed(true));

        controller.toggle();
        assert!(!controller.system_scheme_changed(true));
        assert!(!controller.snapshot().is_dark);
    }

    #[test]
    fn toggle_always_lands_in_manual() {
        let host = FakeHost::at(16, 22, 0);
        let store = store_with(&[(THEME_PREFERENCE_KEY, "time-based")]);
        let mut controller = ThemeController::restore(host, store);
        assert!(controller.snapshot().is_dark);
        controller.toggle();
        assert_eq!(controller.snapshot().mode, ThemeMode::Manual);
        assert!(!controller.snapshot().is_dark);
        assert!(!controller.check().theme_changed);
    }

    #[test]
    fn selecting_time_based_applies_the_clock_immediately() {
        let host = FakeHost::at(16, 23, 0);
        let mut controller = ThemeController::restore(host, MemoryStore::default());
        controller.set_mode(ThemeMode::TimeBased);
        assert!(controller.snapshot().is_dark);
    }

    #[test]
    fn toggle_writes_state_then_class_then_storage() {
        let mut seq = Sequence::new();
        let mut host = MockThemeHost::new();
        let mut store = MockKeyValueStore::new();

        store.expect_get().returning(|key| match key {
            THEME_PREFERENCE_KEY => Some("manual".to_string()),
            THEME_KEY => Some("light".to_string()),
            _ => None,
        });
        host.expect_set_dark_class()
            .with(eq(false))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_start_transition()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        host.expect_set_dark_class()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        store
            .expect_set()
            .withf(|key, value| key.to_string() == THEME_KEY && value.to_string() == "dark")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        store
            .expect_set()
            .withf(|key, value| {
                key.to_string() == THEME_PREFERENCE_KEY && value.to_string() == "manual"
            })
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut controller = ThemeController::restore(host, store);
        controller.toggle();
        assert!(controller.snapshot().is_dark);
    }

    #[test]
    fn unanswered_prompt_closes_the_next_day() {
        let host = FakeHost::at(16, 20, 0);
        let store = MemoryStore::default();
        let mut controller = ThemeController::restore(host.clone(), store.clone());
        assert!(controller.check().prompt_offered);

        host.set_time(17, 8, 0);
        assert!(!controller.check().prompt_offered);
        assert!(!controller.snapshot().sunset_prompt);

        host.set_time(17, 18, 0);
        assert!(controller.check().prompt_offered);
        assert!(controller.snapshot().sunset_prompt);
        assert_eq!(store.get(LAST_SUNSET_CHECK_KEY).as_deref(), Some("2026-10-17"));
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_reset_updates_the_class_before_clearing_storage() {
        let mut seq = Sequence::new();
        let mut host = MockThemeHost::new();
        let mut store = MockKeyValueStore::new();

        store.expect_get().returning(|_| None);
        host.expect_system_prefers_dark().returning(|| Some(true));
        host.expect_set_dark_class()
            .with(eq(true))
            .times(2)
            .in_sequence(&mut seq)
            .return_const(());
        for stored in [THEME_KEY, THEME_PREFERENCE_KEY, LAST_SUNSET_CHECK_KEY] {
            store
                .expect_remove()
                .withf(move |key| key.to_string() == stored)
                .times(1)
                .in_sequence(&mut seq)
                .return_const(());
        }

        let mut controller = ThemeController::restore(host, store);
        controller.debug_reset();
        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(controller.snapshot().is_dark);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn debug_reset_forgets_everything() {
        let host = FakeHost::at(16, 18, 0);
        let store = MemoryStore::default();
        let mut controller = ThemeController::restore(host, store.clone());
        controller.check();
        controller.toggle();

        let info = controller.debug_snapshot();
        assert_eq!(info.mode, ThemeMode::Manual);
        assert!(info.night);

        controller.debug_reset();
        assert_eq!(store.get(THEME_KEY), None);
        assert_eq!(store.get(THEME_PREFERENCE_KEY), None);
        assert_eq!(store.get(LAST_SUNSET_CHECK_KEY), None);
        assert_eq!(controller.snapshot().mode, ThemeMode::System);
        assert!(controller.check().prompt_offered);
    }
}
