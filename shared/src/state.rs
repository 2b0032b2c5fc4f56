//! Dashboard view state and the actions that mutate it.

use crate::config::DashboardConfig;

/// Transient UI state owned by the dashboard view.
///
/// Both flags are independent two-state toggles; no action touches more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardState {
    /// Whether the dialog overlay is shown
    pub modal_open: bool,
    /// Position of the "Enable notifications" switch
    pub notifications_enabled: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            modal_open: false,
            notifications_enabled: true,
        }
    }
}

/// User interactions the dashboard reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    OpenModal,
    CloseModal,
    SetNotificationEnabled(bool),
}

impl DashboardState {
    /// Initial state for a freshly mounted view.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            modal_open: false,
            notifications_enabled: config.notifications_enabled,
        }
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn set_notification_enabled(&mut self, value: bool) {
        self.notifications_enabled = value;
    }

    /// Apply an action, returning whether anything changed.
    pub fn apply(&mut self, action: DashboardAction) -> bool {
        let before = *self;
        match action {
            DashboardAction::OpenModal => self.open_modal(),
            DashboardAction::CloseModal => self.close_modal(),
            DashboardAction::SetNotificationEnabled(value) => self.set_notification_enabled(value),
        }
        before != *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert!(!state.modal_open);
        assert!(state.notifications_enabled);
    }

    #[test]
    fn test_modal_follows_last_call() {
        let mut state = DashboardState::default();
        let calls = [true, true, false, true, false, false, true];
        for open in calls {
            if open {
                state.open_modal();
            } else {
                state.close_modal();
            }
            assert_eq!(state.modal_open, open);
        }
    }

    #[test]
    fn test_close_modal_is_idempotent() {
        let mut state = DashboardState::default();
        state.open_modal();
        assert!(state.apply(DashboardAction::CloseModal));
        assert!(!state.apply(DashboardAction::CloseModal));
        assert!(!state.modal_open);
    }

    #[test]
    fn test_set_notification_enabled() {
        let mut state = DashboardState::default();
        for value in [false, false, true, false, true] {
            state.apply(DashboardAction::SetNotificationEnabled(value));
            assert_eq!(state.notifications_enabled, value);
        }
    }

    #[test]
    fn test_actions_do_not_cross_flags() {
        let mut state = DashboardState::default();
        state.apply(DashboardAction::SetNotificationEnabled(false));
        state.apply(DashboardAction::OpenModal);
        assert!(!state.notifications_enabled);
        state.apply(DashboardAction::CloseModal);
        assert!(!state.notifications_enabled);
    }

    #[test]
    fn test_from_config() {
        let config = DashboardConfig {
            notifications_enabled: false,
            ..Default::default()
        };
        let state = DashboardState::from_config(&config);
        assert!(!state.modal_open);
        assert!(!state.notifications_enabled);
    }
}
