//! Hook driving an enter/leave transition from a `show` flag.

use gloo::timers::callback::Timeout;
use iqb_shared::{TransitionClasses, TransitionPhase};
use yew::prelude::*;

/// Return value from the use_transition hook.
pub struct UseTransition {
    /// Whether the content should be in the DOM at all
    pub mounted: bool,
    /// Transition classes for the current phase
    pub class: String,
}

/// Hook for animating content in and out.
///
/// Flipping `show` starts the enter or leave sequence; the content stays
/// mounted until the leave animation has run. Pending timers are dropped
/// (and so cancelled) whenever the phase changes or the component unmounts.
///
/// # Example
/// ```ignore
/// let transition = use_transition(*open, TransitionClasses {
///     enter: "transition-opacity duration-200".into(),
///     enter_from: "opacity-0".into(),
///     enter_to: "opacity-100".into(),
///     ..Default::default()
/// });
///
/// html! {
///     if transition.mounted {
///         <div class={transition.class.clone()}>{ "content" }</div>
///     }
/// }
/// ```
#[hook]
pub fn use_transition(show: bool, classes: TransitionClasses) -> UseTransition {
    let phase = use_state_eq(|| TransitionPhase::initial(show));
    let timer = use_mut_ref(|| None::<Timeout>);
    let current = *phase;

    {
        let phase = phase.clone();
        use_effect_with(show, move |show| {
            phase.set(current.on_show(*show));
            || ()
        });
    }

    {
        let phase_handle = phase.clone();
        let timer = timer.clone();
        let delay = current.step_delay_ms(&classes);
        use_effect_with(current, move |current| {
            let current = *current;
            *timer.borrow_mut() =
                delay.map(|ms| Timeout::new(ms, move || phase_handle.set(current.advance())));
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    UseTransition {
        mounted: current.is_mounted(),
        class: current.class_for(&classes),
    }
}
