use yew::prelude::*;
use yew_router::components::Link;

use crate::booking::use_booking;
use crate::config;
use crate::nav::MENUS;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let booking = use_booking();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let book = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        booking.open();
    });

    html! {
        <div class="home-page">
            <section class="home-hero">
                <h1>{"Background screening you can trust, powered by AI"}</h1>
                <p>
                    {format!(
                        "{} helps employers hire with confidence: compliant checks, fast turnaround and practical AI for the paperwork in between.",
                        config::COMPANY_NAME
                    )}
                </p>
                <div class="home-hero-actions">
                    <button class="home-cta" onclick={book}>{"Book a consultation"}</button>
                    <Link<Route> to={Route::CaseStudies} classes="home-secondary">
                        {"See our results"}
                    </Link<Route>>
                </div>
            </section>
            { for MENUS.iter().map(|menu| html! {
                <section class="home-menu" key={menu.id.as_str()}>
                    <h2>{menu.title}</h2>
                    <div class="home-grid">
                        { for menu.sections.iter().map(|section| html! {
                            <div class="home-card" key={section.title}>
                                <h3>
                                    <i class={section.icon.css_class()}></i>
                                    {format!(" {}", section.title)}
                                </h3>
                                <ul>
                                    { for section.items.iter().map(|item| html! {
                                        <li key={item.path}>
                                            <Link<Route> to={Route::from_path(item.path)}>
                                                {item.name}
                                            </Link<Route>>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        }) }
                    </div>
                </section>
            }) }
            <style>
                {r#"
                .home-page {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem 6rem;
                    color: var(--text);
                }
                .home-hero {
                    text-align: center;
                    max-width: 760px;
                    margin: 0 auto 4rem;
                }
                .home-hero h1 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin-bottom: 1rem;
                }
                .home-hero p {
                    color: var(--text-muted);
                    font-size: 1.15rem;
                    line-height: 1.6;
                }
                .home-hero-actions {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .home-cta {
                    padding: 0.9rem 1.8rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--accent);
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .home-secondary {
                    color: var(--accent);
                    text-decoration: none;
                }
                .home-menu h2 {
                    font-size: 1.8rem;
                    margin: 3rem 0 1.5rem;
                }
                .home-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }
                .home-card {
                    padding: 1.5rem;
                    border: 1px solid var(--border);
                    border-radius: 12px;
                    background: var(--bg-elevated);
                }
                .home-card h3 i {
                    color: var(--accent);
                }
                .home-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .home-card a {
                    display: block;
                    padding: 0.35rem 0;
                    color: var(--text);
                    text-decoration: none;
                }
                .home-card a:hover {
                    color: var(--accent);
                }
                @media (max-width: 768px) {
                    .home-hero h1 {
                        font-size: 2.2rem;
                    }
                    .home-hero-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </div>
    }
}
