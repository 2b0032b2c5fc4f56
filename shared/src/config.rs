//! Dashboard configuration handed over by the host page.
//!
//! The host page may put a JSON object in the mount element's `data-config`
//! attribute. Every field is optional.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::tabs::TabName;

/// Element id the app renders into when nothing else is configured
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Attribute on the mount element holding the JSON config
pub const CONFIG_ATTRIBUTE: &str = "data-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Title shown next to the logo in the header
    pub app_title: String,
    /// Target of the "Headless UI Docs" menu link
    pub docs_url: String,
    /// Initial position of the notifications switch
    pub notifications_enabled: bool,
    /// Tab selected on first render
    pub default_tab: TabName,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_title: "iQB".to_string(),
            docs_url: "https://headlessui.com/react".to_string(),
            notifications_enabled: true,
            default_tab: TabName::Overview,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config from an optional attribute value. Absent or blank means defaults.
    pub fn from_attribute(value: Option<&str>) -> Result<Self, ConfigError> {
        match value.map(str::trim) {
            Some(json) if !json.is_empty() => Self::from_json(json),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.app_title, "iQB");
        assert_eq!(config.docs_url, "https://headlessui.com/react");
        assert!(config.notifications_enabled);
        assert_eq!(config.default_tab, TabName::Overview);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"app_title":"Playbook","default_tab":"Team"}"#).unwrap();
        assert_eq!(config.app_title, "Playbook");
        assert_eq!(config.default_tab, TabName::Team);
        assert_eq!(config.docs_url, "https://headlessui.com/react");
        assert!(config.notifications_enabled);
    }

    #[test]
    fn test_malformed_json() {
        assert!(DashboardConfig::from_json("{not json").is_err());
        assert!(DashboardConfig::from_json(r#"{"default_tab":"Roster"}"#).is_err());
    }

    #[test]
    fn test_from_attribute() {
        assert_eq!(
            DashboardConfig::from_attribute(None).unwrap(),
            DashboardConfig::default()
        );
        assert_eq!(
            DashboardConfig::from_attribute(Some("  ")).unwrap(),
            DashboardConfig::default()
        );
        let config = DashboardConfig::from_attribute(Some(r#"{"notifications_enabled":false}"#))
            .unwrap();
        assert!(!config.notifications_enabled);
    }
}
