//! Dialog Component
//!
//! Modal overlay: a fading backdrop and a panel that slides in above it.
//! Escape and clicks on the backdrop ask the owner to close via `on_close`;
//! the dialog never closes itself.

use iqb_shared::TransitionClasses;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::{use_document_listener, use_transition};

#[derive(Properties, PartialEq)]
pub struct DialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub backdrop_class: Classes,
    #[prop_or_default]
    pub container_class: Classes,
    #[prop_or_default]
    pub panel_class: Classes,
    /// Id of the element labelling the dialog, usually its title
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

fn backdrop_transition() -> TransitionClasses {
    TransitionClasses {
        enter: "transition-opacity ease-out duration-200".into(),
        enter_from: "opacity-0".into(),
        enter_to: "opacity-100".into(),
        leave: "transition-opacity ease-in duration-150".into(),
        leave_from: "opacity-100".into(),
        leave_to: "opacity-0".into(),
    }
}

fn panel_transition() -> TransitionClasses {
    TransitionClasses {
        enter: "transition ease-out duration-200".into(),
        enter_from: "opacity-0 translate-y-2 scale-95".into(),
        enter_to: "opacity-100 translate-y-0 scale-100".into(),
        leave: "transition ease-in duration-150".into(),
        leave_from: "opacity-100 translate-y-0 scale-100".into(),
        leave_to: "opacity-0 translate-y-2 scale-95".into(),
    }
}

#[function_component(Dialog)]
pub fn dialog(props: &DialogProps) -> Html {
    let backdrop = use_transition(props.open, backdrop_transition());
    let panel = use_transition(props.open, panel_transition());
    let panel_ref = use_node_ref();
    let mounted = backdrop.mounted || panel.mounted;

    {
        let on_close = props.on_close.clone();
        use_document_listener(
            "keydown",
            props.open,
            Callback::from(move |e: Event| {
                if let Some(e) = e.dyn_ref::<KeyboardEvent>() {
                    if e.key() == "Escape" {
                        e.prevent_default();
                        on_close.emit(());
                    }
                }
            }),
        );
    }

    // Move focus into the panel once it is on screen
    {
        let panel_ref = panel_ref.clone();
        use_effect_with(props.open && panel.mounted, move |focus| {
            if *focus {
                if let Some(el) = panel_ref.cast::<HtmlElement>() {
                    let _ = el.focus();
                }
            }
            || ()
        });
    }

    if !mounted {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={props.class.clone()}
            role="dialog"
            aria-modal="true"
            aria-labelledby={props.labelled_by.clone()}
        >
            if backdrop.mounted {
                <div
                    class={classes!(props.backdrop_class.clone(), backdrop.class)}
                    aria-hidden="true"
                ></div>
            }
            <div class={props.container_class.clone()} onclick={on_backdrop_click}>
                if panel.mounted {
                    <div
                        ref={panel_ref}
                        tabindex="-1"
                        class={classes!(props.panel_class.clone(), panel.class)}
                        onclick={stop}
                    >
                        { props.children.clone() }
                    </div>
                }
            </div>
        </div>
    }
}
