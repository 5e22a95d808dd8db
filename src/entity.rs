//! Entity Catalog
//!
//! Read-only lookup from entity-type name to its per-language values and
//! synonyms. The compiler never mutates a catalog.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::CompilerError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityValue {
    pub value: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

impl EntityValue {
    pub fn new(value: impl Into<String>, synonyms: &[&str]) -> Self {
        Self {
            value: value.into(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMapping {
    /// Platform-agnostic type name (e.g. `NUMBER`, `CITY`)
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Enumerated values per language; absent for built-in types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, Vec<EntityValue>>>,
}

impl EntityMapping {
    pub fn of_type(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            values: None,
        }
    }

    pub fn with_values(mut self, language: impl Into<String>, values: Vec<EntityValue>) -> Self {
        self.values
            .get_or_insert_with(BTreeMap::new)
            .insert(language.into(), values);
        self
    }

    pub fn values_for(&self, language: &str) -> Option<&[EntityValue]> {
        self.values
            .as_ref()
            .and_then(|values| values.get(language))
            .map(|v| v.as_slice())
    }
}

/// Capability interface consumed by the compiler
pub trait EntityCatalog: Send + Sync {
    fn lookup(&self, name: &str) -> Option<&EntityMapping>;

    fn known_names(&self) -> Vec<String>;
}

/// Catalog backed by an in-memory map, loadable from JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticEntityCatalog {
    entities: BTreeMap<String, EntityMapping>,
}

impl StaticEntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity(mut self, name: impl Into<String>, mapping: EntityMapping) -> Self {
        self.entities.insert(name.into(), mapping);
        self
    }

    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn from_file(path: &Path) -> Result<Self, CompilerError> {
        let source = fs::read_to_string(path)
            .map_err(|e| CompilerError::io("read entity catalog", path, e))?;
        Self::from_json(&source).map_err(|source| CompilerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityCatalog for StaticEntityCatalog {
    fn lookup(&self, name: &str) -> Option<&EntityMapping> {
        self.entities.get(name)
    }

    fn known_names(&self) -> Vec<String> {
        self.entities.keys().cloned().collect()
    }
}
