use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent, VisibilityState};
use yew::prelude::*;

use super::browser::{dark_scheme_query, BrowserThemeHost};
use super::controller::{SunsetResponse, ThemeController, ThemeSnapshot};
use super::ThemeMode;
use crate::config;
use crate::error::require_context;
use crate::storage::BrowserStorage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeAction {
    Toggle,
    SetMode(ThemeMode),
    Respond(SunsetResponse),
    #[cfg(debug_assertions)]
    DebugReset,
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    snapshot: ThemeSnapshot,
    dispatch: Callback<ThemeAction>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.snapshot.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        self.snapshot.mode
    }

    pub fn sunset_prompt_open(&self) -> bool {
        self.snapshot.sunset_prompt
    }

    pub fn toggle(&self) {
        self.dispatch.emit(ThemeAction::Toggle);
    }

    pub fn set_mode(&self, mode: ThemeMode) {
        self.dispatch.emit(ThemeAction::SetMode(mode));
    }

    pub fn respond(&self, response: SunsetResponse) {
        self.dispatch.emit(ThemeAction::Respond(response));
    }

    #[cfg(debug_assertions)]
    pub fn debug_reset(&self) {
        self.dispatch.emit(ThemeAction::DebugReset);
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    match require_context(use_context::<ThemeContext>(), "use_theme", "ThemeProvider") {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let controller = use_mut_ref(|| {
        ThemeController::restore(BrowserThemeHost, BrowserStorage::open())
    });
    let snapshot = use_state_eq(|| controller.borrow().snapshot());

    // Minute tick, visibility regain and OS scheme changes
    {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |_| {
                let run_check: Rc<dyn Fn()> = {
                    let controller = controller.clone();
                    let snapshot = snapshot.clone();
                    Rc::new(move || {
                        let next = {
                            let mut controller = controller.borrow_mut();
                            let outcome = controller.check();
                            if outcome.theme_changed {
                                info!("Theme switched by the clock");
                            }
                            if outcome.prompt_offered {
                                info!("Offering sunset prompt");
                            }
                            #[cfg(debug_assertions)]
                            log::debug!("{:?}", controller.debug_snapshot());
                            controller.snapshot()
                        };
                        snapshot.set(next);
                    })
                };
                run_check();

                let interval = {
                    let run_check = run_check.clone();
                    Interval::new(config::THEME_CHECK_INTERVAL_MS, move || run_check())
                };

                let document = window().and_then(|w| w.document());
                let on_visibility = {
                    let run_check = run_check.clone();
                    Closure::<dyn Fn()>::new(move || {
                        let visible = window()
                            .and_then(|w| w.document())
                            .map(|d| d.visibility_state() == VisibilityState::Visible)
                            .unwrap_or(false);
                        if visible {
                            run_check();
                        }
                    })
                };
                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "visibilitychange",
                        on_visibility.as_ref().unchecked_ref(),
                    );
                }

                let scheme_query = dark_scheme_query();
                let on_scheme_change = Closure::<dyn Fn(MediaQueryListEvent)>::new(
                    move |event: MediaQueryListEvent| {
                        let next = {
                            let mut controller = controller.borrow_mut();
                            controller
                                .system_scheme_changed(event.matches())
                                .then(|| controller.snapshot())
                        };
                        if let Some(next) = next {
                            snapshot.set(next);
                        }
                    },
                );
                if let Some(query) = &scheme_query {
                    let _ = query.add_event_listener_with_callback(
                        "change",
                        on_scheme_change.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    drop(interval);
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "visibilitychange",
                            on_visibility.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(query) = scheme_query {
                        let _ = query.remove_event_listener_with_callback(
                            "change",
                            on_scheme_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let dispatch = {
        let controller = controller.clone();
        let snapshot = snapshot.clone();
        Callback::from(move |action: ThemeAction| {
            let next = {
                let mut controller = controller.borrow_mut();
                match action {
                    ThemeAction::Toggle => controller.toggle(),
                    ThemeAction::SetMode(mode) => controller.set_mode(mode),
                    ThemeAction::Respond(response) => controller.respond(response),
                    #[cfg(debug_assertions)]
                    ThemeAction::DebugReset => controller.debug_reset(),
                }
                controller.snapshot()
            };
            snapshot.set(next);
        })
    };

    let context = ThemeContext {
        snapshot: *snapshot,
        dispatch,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
            <style>
                {r#"
                :root {
                    --bg: #ffffff;
                    --bg-elevated: #f5f7fa;
                    --text: #1a1a1a;
                    --text-muted: #5f6b7a;
                    --accent: #1e6fd9;
                    --border: rgba(30, 111, 217, 0.15);
                }
                :root.dark {
                    --bg: #121417;
                    --bg-elevated: #1c2026;
                    --text: #f2f4f7;
                    --text-muted: #9aa4b2;
                    --accent: #7eb2ff;
                    --border: rgba(126, 178, 255, 0.15);
                }
                :root.theme-transition,
                :root.theme-transition * {
                    transition: background-color 0.2s ease, color 0.2s ease, border-color 0.2s ease !important;
                }
                body {
                    background: var(--bg);
                    color: var(--text);
                }
                "#}
            </style>
        </ContextProvider<ThemeContext>>
    }
}
