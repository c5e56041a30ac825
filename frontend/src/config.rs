#[cfg(debug_assertions)]
pub fn get_cms_url() -> &'static str {
    "http://localhost:1337"  // Local CMS when running in development
}

#[cfg(not(debug_assertions))]
pub fn get_cms_url() -> &'static str {
    "https://cms.clearpath-screening.com"
}

pub const COMPANY_NAME: &str = "ClearPath";

pub const BOOKING_URL: &str = "https://calendly.com/clearpath-screening/consultation";

/// Viewport width (CSS px) at and above which the desktop flyout is used.
pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;

/// Grace period between leaving the nav/flyout zone and closing the menu.
pub const MENU_CLOSE_DELAY_MS: u32 = 100;

pub const THEME_CHECK_INTERVAL_MS: u32 = 60_000;
pub const THEME_TRANSITION_MS: u32 = 200;

/// Local hour at which night starts (inclusive).
pub const NIGHT_START_HOUR: u32 = 18;
/// Local hour at which night ends (exclusive).
pub const NIGHT_END_HOUR: u32 = 6;

/// How long after `NIGHT_START_HOUR` a first check still offers the sunset prompt.
pub const SUNSET_PROMPT_GRACE_HOURS: u32 = 3;
