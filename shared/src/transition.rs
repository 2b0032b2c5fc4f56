//! Enter/leave phase machine for animated show/hide.
//!
//! Each phase maps to a class list built from the Tailwind utilities given
//! for the enter and leave sides. Timing comes from the `duration-N` token
//! in those utilities; the frontend schedules [`TransitionPhase::advance`]
//! after [`TransitionPhase::step_delay_ms`].

use crate::class_names;

/// Fallback when no `duration-N` utility is present (Tailwind's default)
pub const DEFAULT_DURATION_MS: u32 = 150;

/// Delay between the "from" and "to" class lists so the browser paints the start state
pub const FRAME_DELAY_MS: u32 = 16;

/// Class lists for both sides of a transition
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransitionClasses {
    pub enter: String,
    pub enter_from: String,
    pub enter_to: String,
    pub leave: String,
    pub leave_from: String,
    pub leave_to: String,
}

impl TransitionClasses {
    pub fn enter_duration(&self) -> u32 {
        parse_duration(&self.enter).unwrap_or(DEFAULT_DURATION_MS)
    }

    pub fn leave_duration(&self) -> u32 {
        parse_duration(&self.leave).unwrap_or(DEFAULT_DURATION_MS)
    }
}

/// Read the milliseconds from a `duration-N` utility in a class list
pub fn parse_duration(classes: &str) -> Option<u32> {
    classes
        .split_whitespace()
        .find_map(|class| class.strip_prefix("duration-"))
        .and_then(|ms| ms.parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Not rendered
    Hidden,
    /// Rendered with the enter-from classes
    EnterStart,
    /// Animating towards the enter-to classes
    Entering,
    /// Fully shown, no transition classes
    Shown,
    /// Rendered with the leave-from classes
    LeaveStart,
    /// Animating towards the leave-to classes, unmounted afterwards
    Leaving,
}

impl TransitionPhase {
    /// Phase on first render. Content shown at mount does not animate in.
    pub fn initial(show: bool) -> Self {
        if show {
            TransitionPhase::Shown
        } else {
            TransitionPhase::Hidden
        }
    }

    /// React to a change of the `show` flag.
    pub fn on_show(self, show: bool) -> Self {
        use TransitionPhase::*;
        match (self, show) {
            (Hidden | LeaveStart | Leaving, true) => EnterStart,
            (EnterStart | Entering | Shown, false) => LeaveStart,
            (phase, _) => phase,
        }
    }

    /// Step taken when the pending timer fires.
    pub fn advance(self) -> Self {
        use TransitionPhase::*;
        match self {
            EnterStart => Entering,
            Entering => Shown,
            LeaveStart => Leaving,
            Leaving => Hidden,
            settled => settled,
        }
    }

    /// How long to wait before calling `advance`, or `None` when settled.
    pub fn step_delay_ms(self, classes: &TransitionClasses) -> Option<u32> {
        use TransitionPhase::*;
        match self {
            EnterStart | LeaveStart => Some(FRAME_DELAY_MS),
            Entering => Some(classes.enter_duration()),
            Leaving => Some(classes.leave_duration()),
            Hidden | Shown => None,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != TransitionPhase::Hidden
    }

    pub fn class_for(self, classes: &TransitionClasses) -> String {
        use TransitionPhase::*;
        match self {
            Hidden | Shown => String::new(),
            EnterStart => class_names(&[&classes.enter, &classes.enter_from]),
            Entering => class_names(&[&classes.enter, &classes.enter_to]),
            LeaveStart => class_names(&[&classes.leave, &classes.leave_from]),
            Leaving => class_names(&[&classes.leave, &classes.leave_to]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog_panel() -> TransitionClasses {
        TransitionClasses {
            enter: "transition ease-out duration-200".into(),
            enter_from: "opacity-0 translate-y-2 scale-95".into(),
            enter_to: "opacity-100 translate-y-0 scale-100".into(),
            leave: "transition ease-in duration-150".into(),
            leave_from: "opacity-100 translate-y-0 scale-100".into(),
            leave_to: "opacity-0 translate-y-2 scale-95".into(),
        }
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("transition ease-out duration-100"), Some(100));
        assert_eq!(parse_duration("transition-opacity"), None);
        assert_eq!(parse_duration("duration-fast"), None);
        assert_eq!(TransitionClasses::default().enter_duration(), DEFAULT_DURATION_MS);
    }

    #[test]
    fn test_enter_then_leave_sequence() {
        let classes = dialog_panel();
        let mut phase = TransitionPhase::initial(false);
        assert!(!phase.is_mounted());

        phase = phase.on_show(true);
        assert_eq!(phase, TransitionPhase::EnterStart);
        assert_eq!(phase.step_delay_ms(&classes), Some(FRAME_DELAY_MS));
        assert_eq!(
            phase.class_for(&classes),
            "transition ease-out duration-200 opacity-0 translate-y-2 scale-95"
        );

        phase = phase.advance();
        assert_eq!(phase, TransitionPhase::Entering);
        assert_eq!(phase.step_delay_ms(&classes), Some(200));

        phase = phase.advance();
        assert_eq!(phase, TransitionPhase::Shown);
        assert_eq!(phase.step_delay_ms(&classes), None);
        assert_eq!(phase.class_for(&classes), "");

        phase = phase.on_show(false).advance();
        assert_eq!(phase, TransitionPhase::Leaving);
        assert_eq!(phase.step_delay_ms(&classes), Some(150));
        assert!(phase.is_mounted());
        assert_eq!(
            phase.class_for(&classes),
            "transition ease-in duration-150 opacity-0 translate-y-2 scale-95"
        );

        phase = phase.advance();
        assert_eq!(phase, TransitionPhase::Hidden);
        assert!(!phase.is_mounted());
    }

    #[test]
    fn test_reversal_mid_transition() {
        assert_eq!(
            TransitionPhase::Entering.on_show(false),
            TransitionPhase::LeaveStart
        );
        assert_eq!(
            TransitionPhase::Leaving.on_show(true),
            TransitionPhase::EnterStart
        );
        assert_eq!(TransitionPhase::Shown.on_show(true), TransitionPhase::Shown);
        assert_eq!(TransitionPhase::Hidden.on_show(false), TransitionPhase::Hidden);
        assert_eq!(TransitionPhase::Hidden.advance(), TransitionPhase::Hidden);
    }

    #[test]
    fn test_initially_shown_does_not_animate() {
        let phase = TransitionPhase::initial(true);
        assert_eq!(phase, TransitionPhase::Shown);
        assert!(phase.is_mounted());
    }
}
