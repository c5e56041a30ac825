use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"We couldn't find the page you were looking for."}</p>
            <Link<Route> to={Route::Home} classes="not-found-home">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 60vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    color: var(--text);
                    text-align: center;
                }
                .not-found-page h1 {
                    font-size: 4rem;
                    margin: 0;
                    color: var(--accent);
                }
                .not-found-home {
                    color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
