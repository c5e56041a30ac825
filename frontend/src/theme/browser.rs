use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Timeout;
use web_sys::{window, Element, MediaQueryList};

use super::controller::ThemeHost;
use crate::config;

pub const DARK_CLASS: &str = "dark";
pub const TRANSITION_CLASS: &str = "theme-transition";
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn root_element() -> Option<Element> {
    window()?.document()?.document_element()
}

pub fn dark_scheme_query() -> Option<MediaQueryList> {
    window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

/// Drives the `<html>` element of the current page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserThemeHost;

impl ThemeHost for BrowserThemeHost {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn system_prefers_dark(&self) -> Option<bool> {
        dark_scheme_query().map(|query| query.matches())
    }

    fn set_dark_class(&self, dark: bool) {
        if let Some(root) = root_element() {
            let classes = root.class_list();
            let _ = if dark {
                classes.add_1(DARK_CLASS)
            } else {
                classes.remove_1(DARK_CLASS)
            };
        }
    }

    fn start_transition(&self) {
        if let Some(root) = root_element() {
            let _ = root.class_list().add_1(TRANSITION_CLASS);
            let timeout = Timeout::new(config::THEME_TRANSITION_MS, move || {
                let _ = root.class_list().remove_1(TRANSITION_CLASS);
            });
            timeout.forget();
        }
    }
}
