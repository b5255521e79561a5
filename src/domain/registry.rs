//! Canonical storage kinds and their categories.
//!
//! The table below is the single source for both the canonical enumeration
//! order and the identifier-to-category mapping. Categories are assigned
//! explicitly; they are not derived from identifier prefixes.

use tracing::debug;

use crate::domain::StorageKind;
use crate::error::{KindError, Result};

/// Canonical kinds in enumeration order, paired with their category.
static CANONICAL: [(StorageKind, &str); StorageKind::KNOWN_COUNT] = [
    (StorageKind::USER_DEFAULTS, "UserDefaults"),
    (StorageKind::DOCUMENT_DIRECTORY, "FileManager"),
    (StorageKind::USER_DIRECTORY, "FileManager"),
    (StorageKind::LIBRARY_DIRECTORY, "FileManager"),
    (StorageKind::APPLICATION_DIRECTORY, "FileManager"),
    (StorageKind::CORE_SERVICE_DIRECTORY, "FileManager"),
    (StorageKind::TEMPORARY_DIRECTORY, "FileManager"),
    (StorageKind::CACHE, "NSCache"),
    (StorageKind::CORE_DATA, "CoreData"),
    (StorageKind::GENERIC_KEYCHAIN, "SecItem"),
    (StorageKind::INTERNET_KEYCHAIN, "SecItem"),
    (StorageKind::PRIVATE_CLOUD_DATABASE, "CKContainer"),
    (StorageKind::PUBLIC_CLOUD_DATABASE, "CKContainer"),
    (StorageKind::SHARED_CLOUD_DATABASE, "CKContainer"),
    (StorageKind::UBIQUITOUS_CLOUD_STORE, "NSUbiquitousKeyValueStore"),
];

/// Category of a canonical kind, `None` for anything else.
pub(crate) fn category_of(kind: &StorageKind) -> Option<&'static str> {
    CANONICAL
        .iter()
        .find(|(known, _)| known == kind)
        .map(|(_, category)| *category)
}

impl StorageKind {
    /// Number of canonical kinds shipped with this build.
    pub const KNOWN_COUNT: usize = 15;

    /// All canonical kinds, in their fixed order.
    ///
    /// A new vector is built on every call.
    #[must_use]
    pub fn all_known() -> Vec<Self> {
        CANONICAL.iter().map(|(kind, _)| kind.clone()).collect()
    }

    /// Look up a canonical kind by exact identifier.
    ///
    /// Matching is case-sensitive and the input is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`KindError::NotFound`] if no canonical kind has this identifier.
    pub fn try_from_identifier(identifier: &str) -> Result<Self> {
        CANONICAL
            .iter()
            .find(|(kind, _)| kind.identifier() == identifier)
            .map(|(kind, _)| kind.clone())
            .ok_or_else(|| {
                debug!(identifier, "Unknown storage kind identifier");
                KindError::NotFound(identifier.to_string())
            })
    }

    /// Whether this kind is one of the canonical kinds.
    #[must_use]
    pub fn is_known(&self) -> bool {
        category_of(self).is_some()
    }

    /// Category name without the unsupported-kind check.
    ///
    /// Returns `None` for kinds outside the canonical set.
    #[must_use]
    pub fn try_category_name(&self) -> Option<&'static str> {
        category_of(self)
    }

    /// Canonical kinds rendering to `category`, in canonical order.
    #[must_use]
    pub fn kinds_in_category(category: &str) -> Vec<Self> {
        CANONICAL
            .iter()
            .filter(|(_, name)| *name == category)
            .map(|(kind, _)| kind.clone())
            .collect()
    }

    /// Distinct category names in order of first appearance.
    #[must_use]
    pub fn known_categories() -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for (_, category) in &CANONICAL {
            if !categories.contains(category) {
                categories.push(*category);
            }
        }
        categories
    }
}
