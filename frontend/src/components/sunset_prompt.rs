use yew::prelude::*;

use crate::theme::controller::SunsetResponse;
use crate::theme::provider::use_theme;

#[function_component(SunsetPrompt)]
pub fn sunset_prompt() -> Html {
    let theme = use_theme();
    if !theme.sunset_prompt_open() {
        return html! {};
    }

    let respond = |response: SunsetResponse| {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.respond(response);
        })
    };

    html! {
        <div class="sunset-prompt" role="dialog" aria-live="polite">
            <p>
                <i class="fa-solid fa-moon"></i>
                {" The sun has set. Switch to dark mode?"}
            </p>
            <div class="sunset-actions">
                <button class="sunset-accept" onclick={respond(SunsetResponse::Accept)}>
                    {"Go dark"}
                </button>
                <button class="sunset-decline" onclick={respond(SunsetResponse::Decline)}>
                    {"Not now"}
                </button>
                <button class="sunset-system" onclick={respond(SunsetResponse::FollowSystem)}>
                    {"Always follow system"}
                </button>
            </div>
            <style>
                {r#"
                .sunset-prompt {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    max-width: 340px;
                    padding: 1.25rem;
                    background: var(--bg-elevated);
                    color: var(--text);
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.25);
                    z-index: 200;
                }
                .sunset-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.5rem;
                    margin-top: 0.75rem;
                }
                .sunset-actions button {
                    border: 1px solid var(--border);
                    border-radius: 6px;
                    padding: 0.4rem 0.8rem;
                    background: none;
                    color: var(--text);
                    cursor: pointer;
                }
                .sunset-actions .sunset-accept {
                    background: var(--accent);
                    color: #fff;
                    border-color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
