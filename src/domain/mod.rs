//! Domain model for storage backend descriptors.
//!
//! `StorageKind` names a backend by identifier; the registry holds the
//! canonical kinds shipped with this build and their categories.

pub mod kind;
pub mod registry;
pub mod render;

pub use kind::StorageKind;
pub use render::UNSUPPORTED_KIND;
