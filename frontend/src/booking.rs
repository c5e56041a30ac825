//! Scheduling widget shared by every "book a consultation" button.

use yew::prelude::*;

use crate::config;
use crate::error::require_context;

#[derive(Clone, PartialEq)]
pub struct BookingContext {
    is_open: bool,
    set_open: Callback<bool>,
}

impl BookingContext {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&self) {
        self.set_open.emit(true);
    }

    pub fn close(&self) {
        self.set_open.emit(false);
    }
}

#[hook]
pub fn use_booking() -> BookingContext {
    match require_context(use_context::<BookingContext>(), "use_booking", "BookingProvider") {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingProviderProps {
    pub children: Children,
}

#[function_component(BookingProvider)]
pub fn booking_provider(props: &BookingProviderProps) -> Html {
    let is_open = use_state_eq(|| false);

    let set_open = {
        let is_open = is_open.clone();
        Callback::from(move |open: bool| is_open.set(open))
    };

    let context = BookingContext {
        is_open: *is_open,
        set_open,
    };

    html! {
        <ContextProvider<BookingContext> context={context}>
            { for props.children.iter() }
            <BookingModal />
        </ContextProvider<BookingContext>>
    }
}

#[function_component(BookingModal)]
fn booking_modal() -> Html {
    let booking = use_booking();
    if !booking.is_open() {
        return html! {};
    }

    let close = {
        let booking = booking.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            booking.close();
        })
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="booking-backdrop" onclick={close.clone()}>
            <div class="booking-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="booking-close" aria-label="Close" onclick={close}>{"×"}</button>
                <iframe
                    src={config::BOOKING_URL}
                    title="Schedule a consultation"
                    class="booking-frame"
                />
            </div>
            <style>
                {r#"
                .booking-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                }
                .booking-modal {
                    position: relative;
                    width: min(720px, 94vw);
                    height: min(760px, 90vh);
                    background: var(--bg-elevated);
                    border-radius: 12px;
                    overflow: hidden;
                }
                .booking-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.75rem;
                    font-size: 1.5rem;
                    background: none;
                    border: none;
                    color: var(--text);
                    cursor: pointer;
                }
                .booking-frame {
                    width: 100%;
                    height: 100%;
                    border: none;
                }
                "#}
            </style>
        </div>
    }
}
