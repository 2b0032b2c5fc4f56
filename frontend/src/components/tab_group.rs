//! Tab Group Component
//!
//! A row of tab headers with the selected panel below. Each entry carries
//! both its header label and its panel, so headers and panels cannot drift
//! out of step.

use iqb_shared::{Selection, TabSelection};
use web_sys::KeyboardEvent;
use yew::prelude::*;

/// One header/panel pair
#[derive(Clone, PartialEq)]
pub struct TabEntry {
    pub label: AttrValue,
    pub panel: Html,
}

#[derive(Properties, PartialEq)]
pub struct TabGroupProps {
    pub entries: Vec<TabEntry>,
    #[prop_or_default]
    pub default_index: usize,
    /// Notified after the selection changes
    #[prop_or_default]
    pub on_change: Callback<usize>,
    #[prop_or_default]
    pub list_class: Classes,
    /// Header classes given whether the header is selected
    pub tab_class: Callback<bool, Classes>,
    #[prop_or_default]
    pub panels_class: Classes,
    #[prop_or_default]
    pub panel_class: Classes,
}

#[function_component(TabGroup)]
pub fn tab_group(props: &TabGroupProps) -> Html {
    let selection = use_state_eq(|| TabSelection::new(props.entries.len(), props.default_index));

    let select = {
        let selection = selection.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |index: usize| {
            let mut next = *selection;
            match next.select(index) {
                Ok(()) => {
                    selection.set(next);
                    on_change.emit(index);
                }
                Err(e) => log::warn!("Ignoring tab selection: {}", e),
            }
        })
    };

    let onkeydown = {
        let selection = selection.clone();
        let select = select.clone();
        Callback::from(move |e: KeyboardEvent| {
            let mut next = *selection;
            match e.key().as_str() {
                "ArrowRight" => next.select_next(),
                "ArrowLeft" => next.select_previous(),
                "Home" => next.select_first(),
                "End" => next.select_last(),
                _ => return,
            }
            e.prevent_default();
            select.emit(next.selected());
        })
    };

    let selected = selection.selected();

    html! {
        <div>
            <div class={props.list_class.clone()} role="tablist" {onkeydown}>
                { props.entries.iter().enumerate().map(|(i, entry)| {
                    let is_selected = i == selected;
                    let select = select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| select.emit(i));
                    html! {
                        <button
                            key={entry.label.to_string()}
                            type="button"
                            role="tab"
                            aria-selected={is_selected.to_string()}
                            tabindex={if is_selected { "0" } else { "-1" }}
                            class={props.tab_class.emit(is_selected)}
                            {onclick}
                        >
                            { entry.label.clone() }
                        </button>
                    }
                }).collect::<Html>() }
            </div>
            <div class={props.panels_class.clone()}>
                if let Some(entry) = props.entries.get(selected) {
                    <div key={selected} class={props.panel_class.clone()} role="tabpanel">
                        { entry.panel.clone() }
                    </div>
                }
            </div>
        </div>
    }
}
