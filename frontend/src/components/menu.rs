//! Menu Component
//!
//! A dropdown button with a list of items. The menu closes on Escape, on a
//! click outside of it, and after any item is clicked.

use iqb_shared::{MenuState, Toggle};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, Node};
use yew::prelude::*;

use super::Transition;
use crate::hooks::use_document_listener;

#[derive(Properties, PartialEq)]
pub struct MenuProps {
    /// Button content
    pub button: Html,
    #[prop_or_default]
    pub button_class: Classes,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub items_class: Classes,
    /// Item renderers, each given whether it is highlighted
    pub items: Vec<Callback<bool, Html>>,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let state = use_state_eq(MenuState::default);
    let root = use_node_ref();
    let item_count = props.items.len();
    let open = state.is_open();

    let close = {
        let state = state.clone();
        Callback::from(move |_: ()| state.set(MenuState::default()))
    };

    // Dismiss on clicks landing outside the menu
    {
        let root = root.clone();
        let close = close.clone();
        use_document_listener(
            "mousedown",
            open,
            Callback::from(move |e: Event| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = root
                    .cast::<Element>()
                    .map(|el| el.contains(target.as_ref()))
                    .unwrap_or(false);
                if !inside {
                    close.emit(());
                }
            }),
        );
    }

    let on_button_click = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };

    let onkeydown = {
        let state = state.clone();
        let root = root.clone();
        let close = close.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut next = *state;
            match e.key().as_str() {
                "Escape" => {
                    e.prevent_default();
                    close.emit(());
                    return;
                }
                "ArrowDown" => {
                    next.open();
                    next.highlight_next(item_count);
                }
                "ArrowUp" => {
                    next.open();
                    next.highlight_previous(item_count);
                }
                "Enter" | " " => {
                    if let (true, Some(active)) = (next.is_open(), next.active()) {
                        e.prevent_default();
                        activate_item(&root, active);
                    }
                    return;
                }
                _ => return,
            }
            e.prevent_default();
            state.set(next);
        })
    };

    let active = state.active();

    html! {
        <div ref={root} class={props.class.clone()} {onkeydown}>
            <button
                type="button"
                class={props.button_class.clone()}
                aria-haspopup="menu"
                aria-expanded={open.to_string()}
                onclick={on_button_click}
            >
                { props.button.clone() }
            </button>
            <Transition
                show={open}
                enter="transition ease-out duration-100"
                enter_from="transform opacity-0 scale-95"
                enter_to="transform opacity-100 scale-100"
                leave="transition ease-in duration-75"
                leave_from="transform opacity-100 scale-100"
                leave_to="transform opacity-0 scale-95"
                class={props.items_class.clone()}
                role="menu"
            >
                { props.items.iter().enumerate().map(|(i, render)| {
                    let onmouseenter = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *state;
                            if let Err(e) = next.highlight(i, item_count) {
                                log::warn!("Ignoring menu highlight: {}", e);
                                return;
                            }
                            state.set(next);
                        })
                    };
                    let onmouseleave = {
                        let state = state.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = *state;
                            next.clear_highlight();
                            state.set(next);
                        })
                    };
                    let onclick = {
                        let close = close.clone();
                        Callback::from(move |_: MouseEvent| close.emit(()))
                    };
                    html! {
                        <div
                            role="none"
                            data-menu-item={i.to_string()}
                            {onmouseenter}
                            {onmouseleave}
                            {onclick}
                        >
                            { render.emit(active == Some(i)) }
                        </div>
                    }
                }).collect::<Html>() }
            </Transition>
        </div>
    }
}

/// Click the element rendered for item `index`, as if the user had.
fn activate_item(root: &NodeRef, index: usize) {
    let selector = format!("[data-menu-item=\"{}\"] > *", index);
    let item = root
        .cast::<Element>()
        .and_then(|el| el.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    match item {
        Some(item) => item.click(),
        None => log::debug!("No menu item at index {}", index),
    }
}
