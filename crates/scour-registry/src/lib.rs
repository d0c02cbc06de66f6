//! # scour-registry
//!
//! Registry of searchable log collections.
//!
//! This crate provides:
//!
//! - [`CollectionConfig`] — Per-collection search configuration
//! - [`CollectionRegistry`] — Validated, insertion-ordered registry
//! - [`RegistryError`] — Validation and lookup errors
//!
//! The registry is built once at startup and treated as read-only by every
//! downstream component. Construction validates the configuration up front:
//! duplicate or empty collection names and empty search-field lists are
//! rejected rather than discovered mid-query.
//!
//! ## Example
//!
//! ```rust
//! use scour_registry::{CollectionConfig, CollectionRegistry};
//!
//! # fn main() -> Result<(), scour_registry::RegistryError> {
//! let registry = CollectionRegistry::new(vec![CollectionConfig {
//!     name: "apache".to_string(),
//!     timestamp_field: "timestamp_iso".to_string(),
//!     search_fields: vec!["message".to_string(), "raw_line".to_string()],
//! }])?;
//!
//! assert_eq!(registry.names(), vec!["apache"]);
//! assert_eq!(registry.timestamp_field("apache"), Some("timestamp_iso"));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{CollectionConfig, CollectionRegistry};
