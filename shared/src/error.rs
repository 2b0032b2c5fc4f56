//! Error types for the dashboard models

/// Errors raised by widget state models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors raised while reading dashboard configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while locating the element the app renders into
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("Mount point #{0} not found in document")]
    MissingMountPoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WidgetError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(format!("{}", err), "Index 5 out of range for 3 items");

        let err = MountError::MissingMountPoint("root".to_string());
        assert_eq!(format!("{}", err), "Mount point #root not found in document");

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(parse_err);
        assert!(format!("{}", err).starts_with("Invalid dashboard config: "));
    }
}
