//! Disclosure Component
//!
//! A button that shows or hides the panel below it.

use iqb_shared::{DisclosureState, Toggle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DisclosureProps {
    /// Renders the button content given the open flag
    pub button: Callback<bool, Html>,
    #[prop_or_default]
    pub button_class: Classes,
    #[prop_or_default]
    pub panel_class: Classes,
    #[prop_or_default]
    pub default_open: bool,
    /// Panel content
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Disclosure)]
pub fn disclosure(props: &DisclosureProps) -> Html {
    let state = use_state_eq(|| DisclosureState::new(props.default_open));
    let open = state.is_open();

    let onclick = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };

    html! {
        <>
            <button
                type="button"
                class={props.button_class.clone()}
                aria-expanded={open.to_string()}
                {onclick}
            >
                { props.button.emit(open) }
            </button>
            if open {
                <div class={props.panel_class.clone()}>
                    { props.children.clone() }
                </div>
            }
        </>
    }
}
