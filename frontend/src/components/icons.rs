//! Outline icons (24px grid, 1.5 stroke), rendered inline as SVG.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn outline_icon(class: &Classes, path: &'static str) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={class.clone()}
            fill="none"
            viewBox="0 0 24 24"
            stroke-width="1.5"
            stroke="currentColor"
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" d={path}></path>
        </svg>
    }
}

/// Three horizontal bars
#[function_component(Bars3Icon)]
pub fn bars3_icon(props: &IconProps) -> Html {
    outline_icon(&props.class, "M3.75 6.75h16.5M3.75 12h16.5m-16.5 5.25h16.5")
}

#[function_component(XMarkIcon)]
pub fn x_mark_icon(props: &IconProps) -> Html {
    outline_icon(&props.class, "M6 18 18 6M6 6l12 12")
}

#[function_component(ChevronDownIcon)]
pub fn chevron_down_icon(props: &IconProps) -> Html {
    outline_icon(&props.class, "m19.5 8.25-7.5 7.5-7.5-7.5")
}
