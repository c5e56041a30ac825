use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::theme::provider::use_theme;
use crate::theme::ThemeMode;

const MODES: [ThemeMode; 3] = [ThemeMode::Manual, ThemeMode::System, ThemeMode::TimeBased];

#[function_component(DarkModeToggle)]
pub fn dark_mode_toggle() -> Html {
    let theme = use_theme();

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.toggle();
        })
    };

    let change_mode = {
        let theme = theme.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e
                .target()
                .and_then(|target| target.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            if let Ok(mode) = select.value().parse::<ThemeMode>() {
                theme.set_mode(mode);
            }
        })
    };

    let (icon, label) = if theme.is_dark() {
        ("fa-solid fa-sun", "Switch to light mode")
    } else {
        ("fa-solid fa-moon", "Switch to dark mode")
    };

    html! {
        <div class="theme-controls">
            <button class="theme-toggle" aria-label={label} title={label} onclick={toggle}>
                <i class={icon}></i>
            </button>
            <select class="theme-mode" aria-label="Theme mode" onchange={change_mode}>
                { for MODES.iter().map(|mode| html! {
                    <option value={mode.as_str()} selected={*mode == theme.mode()}>
                        {mode.label()}
                    </option>
                }) }
            </select>
            <style>
                {r#"
                .theme-controls {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .theme-toggle {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    border: 1px solid var(--border);
                    background: var(--bg-elevated);
                    color: var(--text);
                    cursor: pointer;
                }
                .theme-mode {
                    background: var(--bg-elevated);
                    color: var(--text);
                    border: 1px solid var(--border);
                    border-radius: 6px;
                    padding: 0.3rem 0.4rem;
                    font-size: 0.8rem;
                }
                "#}
            </style>
        </div>
    }
}
