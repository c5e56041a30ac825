//! Light/dark theme selection.
//!
//! [`controller::ThemeController`] decides the theme from an explicit user
//! choice, the OS preference or the local clock. [`browser`] binds it to the
//! document and [`provider`] exposes it to components.

pub mod browser;
pub mod controller;
pub mod provider;

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    /// Last explicit toggle wins.
    Manual,
    /// Follow the OS color-scheme preference.
    #[default]
    System,
    /// Follow the local clock.
    TimeBased,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Manual => "manual",
            ThemeMode::System => "system",
            ThemeMode::TimeBased => "time-based",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Manual => "Manual",
            ThemeMode::System => "Follow system",
            ThemeMode::TimeBased => "Sunset to sunrise",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(ThemeMode::Manual),
            "system" => Ok(ThemeMode::System),
            "time-based" => Ok(ThemeMode::TimeBased),
            other => Err(format!("unknown theme mode: {other}")),
        }
    }
}

/// Night is `[18:00, 06:00)` on the local clock.
pub fn is_night<T: Timelike>(time: &T) -> bool {
    let hour = time.hour();
    hour >= config::NIGHT_START_HOUR || hour < config::NIGHT_END_HOUR
}
