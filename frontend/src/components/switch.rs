use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwitchProps {
    pub checked: bool,
    /// Receives the value the switch should take next
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

/// Controlled on/off switch
#[function_component(Switch)]
pub fn switch(props: &SwitchProps) -> Html {
    let onclick = {
        let checked = props.checked;
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(!checked))
    };

    html! {
        <button
            type="button"
            role="switch"
            aria-checked={props.checked.to_string()}
            aria-label={props.label.clone()}
            class={props.class.clone()}
            {onclick}
        >
            { props.children.clone() }
        </button>
    }
}
