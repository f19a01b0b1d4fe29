//! Intermediate representation for code generation.
//!
//! This module provides name-indexed lookup tables over a parsed ABI
//! document. Tables keep document order so generated output follows the
//! order declarations appear in the ABI.

use crate::actions::{ActionDef, TableDef};
use crate::error::SchemaError;
use crate::types::{AbiDocument, FieldDef, StructDef, TypeAlias, VariantDef};
use indexmap::IndexMap;

/// Intermediate representation of an ABI document for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Structs by name.
    pub structs: IndexMap<String, StructDef>,
    /// Variants by name.
    pub variants: IndexMap<String, VariantDef>,
    /// Type aliases by alias name.
    pub aliases: IndexMap<String, TypeAlias>,
    /// Actions in document order.
    pub actions: Vec<ActionDef>,
    /// Tables in document order.
    pub tables: Vec<TableDef>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed document.
    #[must_use]
    pub fn from_document(document: &AbiDocument) -> Self {
        let structs = document
            .structs
            .iter()
            .map(|s| (s.name.clone(), s.clone()))
            .collect();

        let variants = document
            .variants
            .iter()
            .map(|v| (v.name.clone(), v.clone()))
            .collect();

        let aliases = document
            .aliases
            .iter()
            .map(|a| (a.new_type_name.clone(), a.clone()))
            .collect();

        Self {
            structs,
            variants,
            aliases,
            actions: document.actions.clone(),
            tables: document.tables.clone(),
        }
    }

    /// Gets a struct by name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        self.structs.get(name)
    }

    /// Gets a variant by name.
    #[must_use]
    pub fn get_variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.get(name)
    }

    /// Gets a type alias by alias name.
    #[must_use]
    pub fn get_alias(&self, name: &str) -> Option<&TypeAlias> {
        self.aliases.get(name)
    }

    /// Returns the parameter list of an action.
    ///
    /// # Errors
    /// Returns `SchemaError::ActionStructNotFound` if no struct shares the
    /// action's name.
    pub fn action_fields(&self, action: &ActionDef) -> Result<&[FieldDef], SchemaError> {
        self.get_struct(&action.name)
            .map(|s| s.fields.as_slice())
            .ok_or_else(|| SchemaError::action_struct_not_found(&action.name))
    }
}

/// Converts a string to PascalCase.
///
/// `_`, `-` and `.` start a new word; other characters are kept as-is.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if is_word_separator(c) {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts a string to camelCase.
#[must_use]
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

const fn is_word_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.')
}
