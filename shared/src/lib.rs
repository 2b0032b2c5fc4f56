//! Target-independent models for the iQB dashboard.
//!
//! Nothing here touches the DOM, so the whole crate builds and tests natively;
//! the `frontend` crate wraps these models in Yew components.

pub mod config;
pub mod error;
pub mod mount;
pub mod state;
pub mod tabs;
pub mod transition;
pub mod widgets;

pub use config::DashboardConfig;
pub use error::{ConfigError, MountError, WidgetError};
pub use state::{DashboardAction, DashboardState};
pub use tabs::{TabContent, TabName, TabSet};
pub use transition::{TransitionClasses, TransitionPhase};
pub use widgets::{DisclosureState, MenuState, Selection, TabSelection, Toggle};

/// Join class fragments, skipping empty ones
pub fn class_names(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(class_names(&["a b", "", "  ", "c"]), "a b c");
        assert_eq!(class_names(&[]), "");
    }
}
