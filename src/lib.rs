//! # Storage Kind
//!
//! Descriptors naming the backend a persistence facade should target:
//!
//! - **Preferences**: `UserDefaults`
//! - **Filesystem locations**: six `FileManager.*Directory` search paths
//! - **In-memory and object-graph stores**: `NSCache`, `CoreData`
//! - **Keychain**: generic and internet password item classes
//! - **Cloud**: private, public and shared databases, plus the ubiquitous key-value store
//!
//! A [`StorageKind`] carries no data, only the backend identifier. The type is
//! open: any identifier can be wrapped with [`StorageKind::new`], while
//! [`StorageKind::try_from_identifier`] accepts only the canonical kinds of
//! this build.
//!
//! ```
//! use storage_kind::StorageKind;
//!
//! let kind = StorageKind::try_from_identifier("FileManager.documentDirectory").unwrap();
//! assert_eq!(kind, StorageKind::DOCUMENT_DIRECTORY);
//! assert_eq!(kind.category_name(), "FileManager");
//!
//! let future = StorageKind::new("FileManager.desktopDirectory");
//! assert!(!future.is_known());
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;

pub use crate::domain::{StorageKind, UNSUPPORTED_KIND};
pub use crate::error::{KindError, Result};

use tracing_subscriber::util::TryInitError;

use crate::config::ObservabilityConfig;

/// Install a global tracing subscriber based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &ObservabilityConfig) -> std::result::Result<(), TryInitError> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.log_format == "json" {
        subscriber.with(fmt::layer().json()).try_init()
    } else {
        subscriber.with(fmt::layer()).try_init()
    }
}
