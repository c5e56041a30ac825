use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, KeyboardEvent, MouseEvent, Node};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::dark_mode_toggle::DarkModeToggle;
use crate::components::mega_menu::MegaMenu;
use crate::components::mobile_mega_menu::MobileMegaMenu;
use crate::components::sunset_prompt::SunsetPrompt;
use crate::config;
use crate::nav::delayed_action::GlooScheduler;
use crate::nav::hover_intent::{HoverIntent, Layout};
use crate::nav::{find_menu, MenuId, MENUS};
use crate::Route;

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(config::DESKTOP_BREAKPOINT_PX)
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let controller = use_mut_ref(|| HoverIntent::new(GlooScheduler, viewport_width()));
    let active = use_state_eq(|| None::<MenuId>);
    let layout = use_state_eq(|| controller.borrow().layout());
    let mobile_open = use_state_eq(|| false);
    let is_scrolled = use_state_eq(|| false);

    let nav_ref = use_node_ref();
    let flyout_ref = use_node_ref();

    // Mirrors a controller that has already closed everything
    let hide_menus = {
        let active = active.clone();
        let mobile_open = mobile_open.clone();
        Callback::from(move |_: ()| {
            active.set(None);
            mobile_open.set(false);
        })
    };

    let close_all = {
        let controller = controller.clone();
        let hide_menus = hide_menus.clone();
        Callback::from(move |_: ()| {
            controller.borrow_mut().close_all();
            hide_menus.emit(());
        })
    };

    let on_menu_hover = {
        let controller = controller.clone();
        let active = active.clone();
        Callback::from(move |id: MenuId| {
            let next = {
                let mut controller = controller.borrow_mut();
                controller.menu_hover(id);
                controller.active_menu()
            };
            active.set(next);
        })
    };

    let on_menu_toggle = {
        let controller = controller.clone();
        let active = active.clone();
        Callback::from(move |id: MenuId| {
            let next = {
                let mut controller = controller.borrow_mut();
                controller.toggle_menu(id);
                controller.active_menu()
            };
            active.set(next);
        })
    };

    let on_area_enter = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            controller.borrow_mut().area_enter();
        })
    };

    let on_area_leave = {
        let controller = controller.clone();
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            let on_elapsed = {
                let controller = controller.clone();
                let active = active.clone();
                move || {
                    controller.borrow_mut().close_elapsed();
                    active.set(None);
                }
            };
            controller.borrow_mut().area_leave(on_elapsed);
        })
    };

    // Outside click, Escape, resize and scroll. Unmount cancels the pending close.
    {
        let controller = controller.clone();
        let layout = layout.clone();
        let is_scrolled = is_scrolled.clone();
        let hide_menus = hide_menus.clone();
        let nav_ref = nav_ref.clone();
        let flyout_ref = flyout_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let document = window.as_ref().and_then(|w| w.document());

                let on_pointer_down = {
                    let controller = controller.clone();
                    let hide_menus = hide_menus.clone();
                    Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                            return;
                        };
                        let inside = [&nav_ref, &flyout_ref].iter().any(|node_ref| {
                            node_ref
                                .get()
                                .map(|node| node.contains(Some(&target)))
                                .unwrap_or(false)
                        });
                        let hide = controller.borrow_mut().pointer_down(inside);
                        if hide {
                            hide_menus.emit(());
                        }
                    })
                };

                let on_key_down = {
                    let controller = controller.clone();
                    let hide_menus = hide_menus.clone();
                    Closure::<dyn Fn(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                        let hide = controller.borrow_mut().key_pressed(&event.key());
                        if hide {
                            hide_menus.emit(());
                        }
                    })
                };

                let on_resize = {
                    let controller = controller.clone();
                    Closure::<dyn Fn()>::new(move || {
                        let outcome = controller.borrow_mut().viewport_resized(viewport_width());
                        if outcome.hide_menus {
                            log::debug!("viewport crossed breakpoint, now {:?}", outcome.layout);
                            hide_menus.emit(());
                        }
                        layout.set(outcome.layout);
                    })
                };

                let on_scroll = Closure::<dyn Fn()>::new(move || {
                    if let Some(scroll_y) = web_sys::window().and_then(|w| w.scroll_y().ok()) {
                        is_scrolled.set(scroll_y > 40.0);
                    }
                });

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "mousedown",
                        on_pointer_down.as_ref().unchecked_ref(),
                    );
                    let _ = document.add_event_listener_with_callback(
                        "keydown",
                        on_key_down.as_ref().unchecked_ref(),
                    );
                }
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        on_resize.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        on_scroll.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousedown",
                            on_pointer_down.as_ref().unchecked_ref(),
                        );
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            on_key_down.as_ref().unchecked_ref(),
                        );
                    }
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            on_resize.as_ref().unchecked_ref(),
                        );
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    controller.borrow_mut().close_all();
                }
            },
            (),
        );
    }

    // Any navigation closes the menus
    {
        let close_all = close_all.clone();
        let route = use_route::<Route>();
        use_effect_with_deps(
            move |_| {
                close_all.emit(());
                || ()
            },
            route,
        );
    }

    let toggle_mobile = {
        let controller = controller.clone();
        let active = active.clone();
        let mobile_open = mobile_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if *mobile_open {
                controller.borrow_mut().close_all();
                active.set(None);
            }
            mobile_open.set(!*mobile_open);
        })
    };

    let close_on_click = {
        let close_all = close_all.clone();
        Callback::from(move |_: MouseEvent| close_all.emit(()))
    };

    let desktop = *layout == Layout::Desktop;
    let active_menu = (*active).and_then(find_menu);

    html! {
        <nav
            ref={nav_ref}
            class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}
        >
            <div class="nav-content">
                <div onclick={close_on_click.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {config::COMPANY_NAME}
                    </Link<Route>>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Menu"
                    aria-expanded={(*mobile_open).to_string()}
                    onclick={toggle_mobile}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-right", (*mobile_open).then(|| "mobile-menu-open"))}>
                    { for MENUS.iter().map(|menu| {
                        let id = menu.id;
                        let is_active = *active == Some(id);
                        let onmouseenter = {
                            let on_menu_hover = on_menu_hover.clone();
                            Callback::from(move |_: MouseEvent| on_menu_hover.emit(id))
                        };
                        let onclick = {
                            let on_menu_toggle = on_menu_toggle.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                on_menu_toggle.emit(id);
                            })
                        };
                        html! {
                            <div
                                key={id.as_str()}
                                class={classes!("nav-item", is_active.then(|| "active"))}
                                onmouseenter={onmouseenter}
                                onmouseleave={desktop.then(|| on_area_leave.clone())}
                            >
                                <button
                                    class="nav-link nav-menu-trigger"
                                    aria-haspopup="true"
                                    aria-expanded={is_active.to_string()}
                                    onclick={onclick}
                                >
                                    {menu.title}
                                    <i class={classes!("fa-solid", "fa-chevron-down", is_active.then(|| "rotated"))}></i>
                                </button>
                                {
                                    if is_active && !desktop {
                                        html! {
                                            <MobileMegaMenu
                                                key={id.as_str()}
                                                menu={menu}
                                                on_close={close_all.clone()}
                                            />
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    }) }
                    <div onclick={close_on_click.clone()}>
                        <Link<Route> to={Route::CaseStudies} classes="nav-link">
                            {"Case Studies"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_on_click}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            {"Blog"}
                        </Link<Route>>
                    </div>
                    <DarkModeToggle />
                </div>
            </div>

            {
                match active_menu {
                    Some(menu) if desktop => html! {
                        <div
                            ref={flyout_ref}
                            class="mega-menu-container"
                            onmouseenter={on_area_enter}
                            onmouseleave={on_area_leave.clone()}
                        >
                            <MegaMenu menu={menu} on_close={close_all.clone()} />
                        </div>
                    },
                    _ => html! {},
                }
            }

            <SunsetPrompt />

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    background: var(--bg);
                    border-bottom: 1px solid var(--border);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.12);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 72px;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: var(--text);
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-item {
                    position: relative;
                }
                .nav-link {
                    color: var(--text);
                    text-decoration: none;
                    background: none;
                    border: none;
                    font: inherit;
                    cursor: pointer;
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                }
                .nav-item.active .nav-link,
                .nav-link:hover {
                    color: var(--accent);
                }
                .nav-menu-trigger i {
                    font-size: 0.7rem;
                    transition: transform 0.2s ease;
                }
                .nav-menu-trigger i.rotated {
                    transform: rotate(180deg);
                }
                .mega-menu-container {
                    position: absolute;
                    top: 72px;
                    left: 0;
                    right: 0;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--text);
                }
                @media (max-width: 1023px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 72px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        padding: 1rem 1.5rem 2rem;
                        background: var(--bg);
                        border-bottom: 1px solid var(--border);
                        max-height: calc(100vh - 72px);
                        overflow-y: auto;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                    .nav-link {
                        width: 100%;
                        justify-content: space-between;
                        padding: 0.75rem 0;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
