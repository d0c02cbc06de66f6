//! Collection configuration and the registry itself.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};

/// Search configuration for a single collection.
///
/// A collection is a named, independently-searchable group of documents.
/// Each one declares which field carries its timestamp and which fields are
/// searched by default for free-text queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Unique collection name.
    pub name: String,
    /// Field holding the document timestamp.
    pub timestamp_field: String,
    /// Ordered default full-text search fields.
    pub search_fields: Vec<String>,
}

/// Validated, insertion-ordered registry of searchable collections.
///
/// Immutable after construction. Lookups are case-insensitive; the
/// insertion order of [`CollectionConfig`] entries is preserved and defines
/// the "all collections" default used when a query names no collection.
#[derive(Debug, Clone)]
pub struct CollectionRegistry {
    collections: Vec<CollectionConfig>,
    by_name: HashMap<String, usize>,
}

impl CollectionRegistry {
    /// Builds a registry from the given collection configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, a name is empty, a name is
    /// registered twice (case-insensitively), or a collection has no
    /// search fields.
    pub fn new(collections: Vec<CollectionConfig>) -> Result<Self> {
        if collections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut by_name = HashMap::with_capacity(collections.len());
        for (idx, config) in collections.iter().enumerate() {
            if config.name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if config.search_fields.is_empty() {
                return Err(RegistryError::NoSearchFields(config.name.clone()));
            }
            let key = config.name.to_lowercase();
            if by_name.insert(key, idx).is_some() {
                return Err(RegistryError::DuplicateCollection(config.name.clone()));
            }
        }

        debug!(count = collections.len(), "collection registry built");
        Ok(Self {
            collections,
            by_name,
        })
    }

    /// The stock loghub registry: apache, hdfs, and thunderbird.
    #[must_use]
    pub fn builtin() -> Self {
        let configs = vec![
            CollectionConfig {
                name: "apache".to_string(),
                timestamp_field: "timestamp_iso".to_string(),
                search_fields: vec!["message".to_string(), "raw_line".to_string()],
            },
            CollectionConfig {
                name: "hdfs".to_string(),
                timestamp_field: "timestamp_iso".to_string(),
                search_fields: vec![
                    "message".to_string(),
                    "raw_line".to_string(),
                    "level".to_string(),
                ],
            },
            CollectionConfig {
                name: "thunderbird".to_string(),
                timestamp_field: "timestamp_iso".to_string(),
                search_fields: vec!["message".to_string(), "raw_line".to_string()],
            },
        ];
        // The stock configuration is statically valid.
        Self::new(configs).unwrap_or_else(|_| unreachable!())
    }

    /// Loads a registry from a JSON array of collection configurations.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or parsed, or if the
    /// parsed configurations fail validation.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let configs: Vec<CollectionConfig> = serde_json::from_reader(reader)?;
        Self::new(configs)
    }

    /// Loads a registry from a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or fails validation.
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }

    /// All registered collection names, in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.collections.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a collection by name, case-insensitively.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CollectionConfig> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| &self.collections[idx])
    }

    /// Whether a collection with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// The timestamp field of the named collection.
    #[must_use]
    pub fn timestamp_field(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.timestamp_field.as_str())
    }

    /// Order-preserving, de-duplicated union of default search fields
    /// across the given collections.
    ///
    /// Unknown collection names are skipped. The order is the first
    /// occurrence across the given names, so identical inputs always yield
    /// identical field lists.
    #[must_use]
    pub fn search_fields<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let mut fields = Vec::new();
        for name in names {
            let Some(config) = self.get(name.as_ref()) else {
                warn!(collection = name.as_ref(), "unknown collection in search-field lookup");
                continue;
            };
            for field in &config.search_fields {
                if !fields.contains(field) {
                    fields.push(field.clone());
                }
            }
        }
        fields
    }

    /// The number of registered collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Whether the registry is empty. Always false for a constructed
    /// registry; present for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Iterates over the registered configurations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionConfig> {
        self.collections.iter()
    }
}
