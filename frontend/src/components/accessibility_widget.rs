use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::accessibility::{AccessibilitySettings, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::storage::BrowserStorage;
#[cfg(debug_assertions)]
use crate::theme::provider::use_theme;

const COLOR_BLIND_CLASS: &str = "color-blind-mode";

fn apply_settings(settings: &AccessibilitySettings) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Ok(html) = root.clone().dyn_into::<HtmlElement>() {
        let _ = html
            .style()
            .set_property("font-size", &format!("{}px", settings.font_size));
    }
    let classes = root.class_list();
    let _ = if settings.color_blind_mode {
        classes.add_1(COLOR_BLIND_CLASS)
    } else {
        classes.remove_1(COLOR_BLIND_CLASS)
    };
}

#[function_component(AccessibilityWidget)]
pub fn accessibility_widget() -> Html {
    let settings = use_state_eq(|| AccessibilitySettings::load(&BrowserStorage::open()));
    let panel_open = use_state_eq(|| false);
    #[cfg(debug_assertions)]
    let theme = use_theme();

    // Apply and persist whenever the settings change
    {
        use_effect_with_deps(
            move |settings: &AccessibilitySettings| {
                apply_settings(settings);
                settings.save(&BrowserStorage::open());
                || ()
            },
            *settings,
        );
    }

    let update = |change: fn(AccessibilitySettings) -> AccessibilitySettings| {
        let settings = settings.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            settings.set(change(*settings));
        })
    };

    let toggle_panel = {
        let panel_open = panel_open.clone();
        Callback::from(move |_: MouseEvent| panel_open.set(!*panel_open))
    };

    let toggle_color_blind = {
        let settings = settings.clone();
        Callback::from(move |_: Event| {
            settings.set(settings.with_color_blind_mode(!settings.color_blind_mode));
        })
    };

    #[cfg(debug_assertions)]
    let debug_section = {
        let reset_theme = {
            let theme = theme.clone();
            Callback::from(move |_: MouseEvent| theme.debug_reset())
        };
        html! {
            <div class="a11y-debug">
                <button onclick={reset_theme}>{"Reset theme preferences"}</button>
            </div>
        }
    };
    #[cfg(not(debug_assertions))]
    let debug_section = html! {};

    html! {
        <div class="a11y-widget">
            <button class="a11y-launcher" aria-label="Accessibility settings" onclick={toggle_panel}>
                <i class="fa-solid fa-universal-access"></i>
            </button>
            {
                if *panel_open {
                    html! {
                        <div class="a11y-panel" role="dialog" aria-label="Accessibility settings">
                            <div class="a11y-row">
                                <span>{"Text size"}</span>
                                <button
                                    aria-label="Smaller text"
                                    disabled={settings.font_size <= MIN_FONT_SIZE}
                                    onclick={update(AccessibilitySettings::smaller)}
                                >{"A−"}</button>
                                <span class="a11y-value">{format!("{}px", settings.font_size)}</span>
                                <button
                                    aria-label="Larger text"
                                    disabled={settings.font_size >= MAX_FONT_SIZE}
                                    onclick={update(AccessibilitySettings::larger)}
                                >{"A+"}</button>
                            </div>
                            <label class="a11y-row">
                                <input
                                    type="checkbox"
                                    checked={settings.color_blind_mode}
                                    onchange={toggle_color_blind}
                                />
                                {"Color-blind friendly palette"}
                            </label>
                            <button class="a11y-reset" onclick={update(|_| AccessibilitySettings::default())}>
                                {"Reset"}
                            </button>
                            { debug_section }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .a11y-widget {
                    position: fixed;
                    left: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 150;
                }
                .a11y-launcher {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    border: none;
                    background: var(--accent);
                    color: #fff;
                    font-size: 1.3rem;
                    cursor: pointer;
                }
                .a11y-panel {
                    position: absolute;
                    bottom: 60px;
                    left: 0;
                    min-width: 260px;
                    padding: 1rem;
                    background: var(--bg-elevated);
                    color: var(--text);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .a11y-row {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .a11y-value {
                    min-width: 3rem;
                    text-align: center;
                }
                :root.color-blind-mode {
                    --accent: #0072b2;
                }
                "#}
            </style>
        </div>
    }
}
