use yew::prelude::*;
use yew_router::prelude::*;

use crate::nav::MenuDescriptor;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MegaMenuProps {
    pub menu: &'static MenuDescriptor,
    pub on_close: Callback<()>,
}

/// Desktop flyout. Pointer tracking happens on the container owned by the
/// navigation bar; this only renders the sections.
#[function_component(MegaMenu)]
pub fn mega_menu(props: &MegaMenuProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="mega-menu" role="menu" aria-label={props.menu.title}>
            <div class="mega-menu-grid">
                { for props.menu.sections.iter().map(|section| html! {
                    <section class="mega-menu-section" key={section.title}>
                        <h3>
                            <i class={section.icon.css_class()}></i>
                            {section.title}
                        </h3>
                        <ul>
                            { for section.items.iter().map(|item| html! {
                                <li key={item.path} onclick={close.clone()}>
                                    <Link<Route> to={Route::from_path(item.path)} classes="mega-menu-link">
                                        <i class={item.icon.css_class()}></i>
                                        <span>{item.name}</span>
                                    </Link<Route>>
                                </li>
                            }) }
                        </ul>
                    </section>
                }) }
            </div>
            <style>
                {r#"
                .mega-menu {
                    background: var(--bg-elevated);
                    border-bottom: 1px solid var(--border);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                    animation: megaMenuIn 0.18s ease-out;
                }
                @keyframes megaMenuIn {
                    from { opacity: 0; transform: translateY(-6px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .mega-menu-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 2rem 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                }
                .mega-menu-section h3 {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.06em;
                    color: var(--text-muted);
                    display: flex;
                    gap: 0.5rem;
                    align-items: center;
                    margin-bottom: 1rem;
                }
                .mega-menu-section ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }
                .mega-menu-link {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 0;
                    color: var(--text);
                    text-decoration: none;
                }
                .mega-menu-link:hover {
                    color: var(--accent);
                }
                "#}
            </style>
        </div>
    }
}
