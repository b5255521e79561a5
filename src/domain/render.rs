//! Human-readable renderings of a `StorageKind`.
//!
//! Rendering is coarser than identity: all search-path locations render as
//! `FileManager`, both keychain classes as `SecItem`, and so on. Never use a
//! rendering as a persistence key.
//!
//! Rendering a kind outside the canonical set is a programmer error. It
//! emits an error event, panics in debug builds and otherwise returns
//! [`UNSUPPORTED_KIND`].

use tracing::error;

use crate::domain::StorageKind;
use crate::domain::registry::category_of;

/// Placeholder returned when an unsupported kind is rendered.
pub const UNSUPPORTED_KIND: &str = "Unsupported StorageKind";

impl StorageKind {
    /// Short category label, for end users and grouping.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the kind is not canonical.
    #[must_use]
    pub fn category_name(&self) -> &'static str {
        category_of(self).unwrap_or_else(|| unsupported(self, "category_name"))
    }

    /// Diagnostic label. Currently identical to [`StorageKind::category_name`].
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the kind is not canonical.
    #[must_use]
    pub fn debug_description(&self) -> &'static str {
        category_of(self).unwrap_or_else(|| unsupported(self, "debug_description"))
    }
}

#[cold]
#[inline(never)]
fn unsupported(kind: &StorageKind, rendering: &'static str) -> &'static str {
    error!(
        identifier = kind.identifier(),
        rendering, "Rendering unsupported storage kind"
    );
    if cfg!(debug_assertions) {
        panic!("{UNSUPPORTED_KIND}: {}", kind.identifier());
    }
    UNSUPPORTED_KIND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(StorageKind::USER_DEFAULTS.category_name(), "UserDefaults");
        assert_eq!(StorageKind::CACHE.category_name(), "NSCache");
        assert_eq!(StorageKind::CORE_DATA.category_name(), "CoreData");
        assert_eq!(
            StorageKind::UBIQUITOUS_CLOUD_STORE.category_name(),
            "NSUbiquitousKeyValueStore"
        );
        assert_eq!(
            StorageKind::PUBLIC_CLOUD_DATABASE.category_name(),
            "CKContainer"
        );
    }

    #[test]
    fn test_directories_share_category() {
        for kind in [
            StorageKind::DOCUMENT_DIRECTORY,
            StorageKind::USER_DIRECTORY,
            StorageKind::LIBRARY_DIRECTORY,
            StorageKind::APPLICATION_DIRECTORY,
            StorageKind::CORE_SERVICE_DIRECTORY,
            StorageKind::TEMPORARY_DIRECTORY,
        ] {
            assert_eq!(kind.category_name(), "FileManager");
        }
        assert_ne!(
            StorageKind::DOCUMENT_DIRECTORY,
            StorageKind::TEMPORARY_DIRECTORY
        );
    }

    #[test]
    fn test_keychains_share_category() {
        assert_eq!(StorageKind::GENERIC_KEYCHAIN.category_name(), "SecItem");
        assert_eq!(StorageKind::INTERNET_KEYCHAIN.category_name(), "SecItem");
    }

    #[test]
    fn test_renderings_agree() {
        for kind in StorageKind::all_known() {
            assert_eq!(kind.category_name(), kind.debug_description());
        }
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "Unsupported StorageKind: not-a-real-identifier")
    )]
    fn test_unsupported_category_name() {
        let kind = StorageKind::new("not-a-real-identifier");
        assert_eq!(kind.category_name(), UNSUPPORTED_KIND);
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "Unsupported StorageKind: Future.kind")
    )]
    fn test_unsupported_debug_description() {
        let kind = StorageKind::new("Future.kind");
        assert_eq!(kind.debug_description(), UNSUPPORTED_KIND);
    }
}
