//! Action and table definitions for ABI documents.

use serde::Deserialize;

/// Action definition.
///
/// Parameters are not listed here; they come from the struct that shares
/// the action's name.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionDef {
    /// Action name.
    pub name: String,
    /// Declared payload type (normally equal to `name`).
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Ricardian contract text.
    #[serde(default)]
    pub ricardian_contract: Option<String>,
}

impl ActionDef {
    /// Creates a new action definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            type_name: Some(name.clone()),
            name,
            ricardian_contract: None,
        }
    }
}

/// Table definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDef {
    /// Table name.
    pub name: String,
    /// Row struct name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Primary index type.
    #[serde(default)]
    pub index_type: Option<String>,
    /// Key column names.
    #[serde(default)]
    pub key_names: Vec<String>,
    /// Key column types.
    #[serde(default)]
    pub key_types: Vec<String>,
}

impl TableDef {
    /// Creates a new table definition.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            index_type: None,
            key_names: Vec::new(),
            key_types: Vec::new(),
        }
    }
}
