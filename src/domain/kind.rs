//! The `StorageKind` descriptor type.
//!
//! `StorageKind` is an open enumeration: a newtype over the backend
//! identifier string with the shipped variants exposed as associated
//! constants. Any string can be wrapped, so identifiers written by a newer
//! build survive a round-trip through an older one.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::KindError;

/// Identifies the storage backend a persistence operation targets.
///
/// Two kinds are equal exactly when their identifiers are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKind(Cow<'static, str>);

impl StorageKind {
    // ===== Preferences =====

    /// In-memory preference store.
    pub const USER_DEFAULTS: Self = Self::from_static("UserDefaults");

    // ===== Filesystem search-path locations =====

    /// User documents directory.
    pub const DOCUMENT_DIRECTORY: Self = Self::from_static("FileManager.documentDirectory");

    /// User home directory.
    pub const USER_DIRECTORY: Self = Self::from_static("FileManager.userDirectory");

    /// Library directory.
    pub const LIBRARY_DIRECTORY: Self = Self::from_static("FileManager.libraryDirectory");

    /// Applications directory.
    pub const APPLICATION_DIRECTORY: Self =
        Self::from_static("FileManager.applicationDirectory");

    /// Core services directory.
    pub const CORE_SERVICE_DIRECTORY: Self =
        Self::from_static("FileManager.coreServiceDirectory");

    /// Temporary directory.
    pub const TEMPORARY_DIRECTORY: Self = Self::from_static("FileManager.temporaryDirectory");

    // ===== In-memory and object-graph stores =====

    /// In-memory cache.
    pub const CACHE: Self = Self::from_static("NSCache");

    /// Structured object-graph store.
    pub const CORE_DATA: Self = Self::from_static("CoreData");

    // ===== Keychain item classes =====

    /// Generic password keychain items.
    pub const GENERIC_KEYCHAIN: Self = Self::from_static("SecItem.kSecClassGenericPassword");

    /// Internet password keychain items.
    pub const INTERNET_KEYCHAIN: Self = Self::from_static("SecItem.kSecClassInternetPassword");

    // ===== Cloud database scopes =====

    /// Private cloud database of the user.
    pub const PRIVATE_CLOUD_DATABASE: Self =
        Self::from_static("CKContainer.privateCloudDatabase");

    /// Public cloud database shared by all users.
    pub const PUBLIC_CLOUD_DATABASE: Self = Self::from_static("CKContainer.publicCloudDatabase");

    /// Cloud database of records shared with the user.
    pub const SHARED_CLOUD_DATABASE: Self = Self::from_static("CKContainer.sharedCloudDatabase");

    // ===== Key-value sync =====

    /// Ubiquitous key-value store.
    pub const UBIQUITOUS_CLOUD_STORE: Self = Self::from_static("NSUbiquitousKeyValueStore");

    /// Wrap an identifier without validating it.
    ///
    /// Never fails. Use [`StorageKind::try_from_identifier`] to reject
    /// identifiers this build does not know.
    #[must_use]
    pub fn new(identifier: impl Into<Cow<'static, str>>) -> Self {
        Self(identifier.into())
    }

    /// Wrap a static identifier in a const context.
    #[must_use]
    pub const fn from_static(identifier: &'static str) -> Self {
        Self(Cow::Borrowed(identifier))
    }

    /// The raw identifier. This is the only stable persisted form.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.0
    }

    /// Consume the kind and return its identifier.
    #[must_use]
    pub fn into_identifier(self) -> String {
        self.0.into_owned()
    }

    /// Deserialize a kind, rejecting identifiers outside the canonical set.
    ///
    /// Intended for `#[serde(deserialize_with = "StorageKind::deserialize_known")]`.
    ///
    /// # Errors
    ///
    /// Returns a deserializer error if the identifier is not a known kind.
    pub fn deserialize_known<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let identifier = String::deserialize(deserializer)?;
        Self::try_from_identifier(&identifier).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for StorageKind {
    fn as_ref(&self) -> &str {
        self.identifier()
    }
}

impl From<String> for StorageKind {
    fn from(identifier: String) -> Self {
        Self(Cow::Owned(identifier))
    }
}

impl From<&str> for StorageKind {
    fn from(identifier: &str) -> Self {
        Self(Cow::Owned(identifier.to_owned()))
    }
}

impl From<StorageKind> for String {
    fn from(kind: StorageKind) -> Self {
        kind.into_identifier()
    }
}

/// Strict parsing: only canonical identifiers are accepted.
impl FromStr for StorageKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_identifier(s)
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category_name())
    }
}
