//! Locating the element the app renders into.

use crate::error::MountError;

/// Look up the mount point through `lookup`.
///
/// A missing element is reported as [`MountError::MissingMountPoint`]; the
/// caller decides whether that skips rendering or aborts.
pub fn resolve<T, F>(mount_id: &str, lookup: F) -> Result<T, MountError>
where
    F: FnOnce(&str) -> Option<T>,
{
    lookup(mount_id).ok_or_else(|| MountError::MissingMountPoint(mount_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_found() {
        let found = resolve("root", |id| (id == "root").then_some(42));
        assert_eq!(found, Ok(42));
    }

    #[test]
    fn test_resolve_missing() {
        let found = resolve::<u8, _>("root", |_| None);
        assert_eq!(found, Err(MountError::MissingMountPoint("root".to_string())));
    }
}
