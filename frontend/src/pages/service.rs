use yew::prelude::*;
use yew_router::components::Link;

use crate::booking::use_booking;
use crate::nav::find_item;
use crate::pages::not_found::NotFound;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MenuItemPageProps {
    pub path: String,
}

/// Landing page for any mega-menu destination. Paths the menus don't know
/// about render the not-found page.
#[function_component(MenuItemPage)]
pub fn menu_item_page(props: &MenuItemPageProps) -> Html {
    let booking = use_booking();

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            props.path.clone(),
        );
    }

    let Some((section, item)) = find_item(&props.path) else {
        return html! { <NotFound /> };
    };

    let book = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        booking.open();
    });

    let related = section
        .items
        .iter()
        .filter(|other| other.path != item.path)
        .map(|other| html! {
            <li key={other.path}>
                <Link<Route> to={Route::from_path(other.path)}>
                    <i class={other.icon.css_class()}></i>
                    {format!(" {}", other.name)}
                </Link<Route>>
            </li>
        });

    html! {
        <div class="service-page">
            <section class="service-hero">
                <span class="service-eyebrow">
                    <i class={section.icon.css_class()}></i>
                    {format!(" {}", section.title)}
                </span>
                <h1>
                    <i class={item.icon.css_class()}></i>
                    {format!(" {}", item.name)}
                </h1>
                <p>
                    {format!(
                        "{} from ClearPath: accurate results, clear turnaround times and a team that answers the phone.",
                        item.name
                    )}
                </p>
                <button class="service-cta" onclick={book}>{"Book a consultation"}</button>
            </section>
            <section class="service-related">
                <h2>{format!("More in {}", section.title)}</h2>
                <ul>
                    { for related }
                </ul>
            </section>
            <style>
                {r#"
                .service-page {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 3rem 1.5rem 5rem;
                    color: var(--text);
                }
                .service-eyebrow {
                    color: var(--accent);
                    text-transform: uppercase;
                    letter-spacing: 0.06em;
                    font-size: 0.85rem;
                }
                .service-hero h1 {
                    font-size: 2.5rem;
                    margin: 0.5rem 0 1rem;
                }
                .service-hero p {
                    color: var(--text-muted);
                    line-height: 1.6;
                }
                .service-cta {
                    margin-top: 1.5rem;
                    padding: 0.8rem 1.6rem;
                    border: none;
                    border-radius: 8px;
                    background: var(--accent);
                    color: #fff;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .service-related {
                    margin-top: 3rem;
                }
                .service-related ul {
                    list-style: none;
                    padding: 0;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1rem;
                }
                .service-related a {
                    display: block;
                    padding: 1rem;
                    border: 1px solid var(--border);
                    border-radius: 8px;
                    color: var(--text);
                    text-decoration: none;
                }
                .service-related a:hover {
                    border-color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
