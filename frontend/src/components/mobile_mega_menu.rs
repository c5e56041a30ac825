use yew::prelude::*;
use yew_router::prelude::*;

use crate::nav::accordion::{item_activation, AccordionState, ActivationStep};
use crate::nav::MenuDescriptor;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MobileMegaMenuProps {
    pub menu: &'static MenuDescriptor,
    pub on_close: Callback<()>,
}

/// Touch presentation of a mega-menu: every section is an independently
/// collapsible group. Mounted only while its menu is active, so closing the
/// menu discards the expansion state.
#[function_component(MobileMegaMenu)]
pub fn mobile_mega_menu(props: &MobileMegaMenuProps) -> Html {
    let accordion = use_state(AccordionState::default);
    let navigator = use_navigator();

    let toggle_section = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let mut next = (*accordion).clone();
            next.toggle_section(index);
            accordion.set(next);
        })
    };

    let activate_item = {
        let accordion = accordion.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |path: &'static str| {
            for step in item_activation(path) {
                match step {
                    ActivationStep::CollapseSections => accordion.set(AccordionState::default()),
                    ActivationStep::CloseMenus => on_close.emit(()),
                    ActivationStep::Navigate(path) => {
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::from_path(path));
                        }
                    }
                }
            }
        })
    };

    html! {
        <div class="mobile-mega-menu">
            { for props.menu.sections.iter().enumerate().map(|(index, section)| {
                let expanded = accordion.is_expanded(index);
                let onclick = {
                    let toggle_section = toggle_section.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        toggle_section.emit(index);
                    })
                };
                html! {
                    <div key={section.title} class={classes!("mobile-menu-section", expanded.then(|| "open"))}>
                        <button class="mobile-section-toggle" aria-expanded={expanded.to_string()} onclick={onclick}>
                            <span>
                                <i class={section.icon.css_class()}></i>
                                {section.title}
                            </span>
                            <span class="toggle-icon">{if expanded { "−" } else { "+" }}</span>
                        </button>
                        {
                            if expanded {
                                html! {
                                    <ul class="mobile-section-items">
                                        { for section.items.iter().map(|item| {
                                            let path = item.path;
                                            let onclick = {
                                                let activate_item = activate_item.clone();
                                                Callback::from(move |e: MouseEvent| {
                                                    e.prevent_default();
                                                    activate_item.emit(path);
                                                })
                                            };
                                            html! {
                                                <li key={path}>
                                                    <button class="mobile-menu-link" onclick={onclick}>
                                                        <i class={item.icon.css_class()}></i>
                                                        {item.name}
                                                    </button>
                                                </li>
                                            }
                                        }) }
                                    </ul>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .mobile-mega-menu {
                    padding: 0.25rem 0 0.75rem 0.75rem;
                    border-left: 2px solid var(--border);
                }
                .mobile-section-toggle {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.6rem 0;
                    background: none;
                    border: none;
                    color: var(--text);
                    font: inherit;
                    cursor: pointer;
                }
                .mobile-section-toggle i {
                    margin-right: 0.5rem;
                    color: var(--accent);
                }
                .mobile-section-items {
                    list-style: none;
                    margin: 0;
                    padding: 0 0 0.5rem 1.5rem;
                }
                .mobile-menu-link {
                    display: flex;
                    gap: 0.6rem;
                    align-items: center;
                    padding: 0.45rem 0;
                    background: none;
                    border: none;
                    color: var(--text-muted);
                    font: inherit;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
