//! Transition Component
//!
//! Wraps children in a div that animates in and out as `show` changes.

use iqb_shared::TransitionClasses;
use yew::prelude::*;

use crate::hooks::use_transition;

#[derive(Properties, PartialEq, Clone)]
pub struct TransitionProps {
    pub show: bool,
    /// Classes always present on the wrapper
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub role: Option<AttrValue>,
    #[prop_or_default]
    pub enter: AttrValue,
    #[prop_or_default]
    pub enter_from: AttrValue,
    #[prop_or_default]
    pub enter_to: AttrValue,
    #[prop_or_default]
    pub leave: AttrValue,
    #[prop_or_default]
    pub leave_from: AttrValue,
    #[prop_or_default]
    pub leave_to: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

impl TransitionProps {
    pub fn classes(&self) -> TransitionClasses {
        TransitionClasses {
            enter: self.enter.to_string(),
            enter_from: self.enter_from.to_string(),
            enter_to: self.enter_to.to_string(),
            leave: self.leave.to_string(),
            leave_from: self.leave_from.to_string(),
            leave_to: self.leave_to.to_string(),
        }
    }
}

#[function_component(Transition)]
pub fn transition(props: &TransitionProps) -> Html {
    let transition = use_transition(props.show, props.classes());

    html! {
        if transition.mounted {
            <div class={classes!(props.class.clone(), transition.class)} role={props.role.clone()}>
                { props.children.clone() }
            </div>
        }
    }
}
