//! ABI validation utilities.
//!
//! Only structural lookups are checked. A missing action struct is fatal;
//! struct bases and table row types that name no struct are reported as
//! [`DanglingReference`]s for the caller to log.

use crate::error::SchemaError;
use crate::ir::SchemaIr;

/// Validates an ABI for code generation.
///
/// # Arguments
/// * `ir` - The lookup tables to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue.
///
/// # Errors
/// Returns `SchemaError::ActionStructNotFound` if an action has no struct of
/// the same name.
pub fn validate_schema(ir: &SchemaIr) -> Result<(), SchemaError> {
    validate_actions(ir)?;
    Ok(())
}

/// Validates that every action can be resolved to a parameter list.
fn validate_actions(ir: &SchemaIr) -> Result<(), SchemaError> {
    for action in &ir.actions {
        ir.action_fields(action)?;
    }
    Ok(())
}

/// A reference to a struct that does not exist in the ABI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingReference {
    /// A struct extends an unknown base.
    StructBase {
        /// Struct declaring the base.
        owner: String,
        /// Missing base name.
        base: String,
    },
    /// A table stores rows of an unknown struct.
    TableRow {
        /// Table name.
        table: String,
        /// Missing row struct name.
        row_type: String,
    },
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StructBase { owner, base } => {
                write!(f, "struct '{owner}' extends unknown struct '{base}'")
            }
            Self::TableRow { table, row_type } => {
                write!(f, "table '{table}' uses unknown row struct '{row_type}'")
            }
        }
    }
}

/// Lists struct bases and table row types that name no struct.
#[must_use]
pub fn dangling_references(ir: &SchemaIr) -> Vec<DanglingReference> {
    let mut out = Vec::new();

    for def in ir.structs.values() {
        if let Some(base) = def.base() {
            if ir.get_struct(base).is_none() {
                out.push(DanglingReference::StructBase {
                    owner: def.name.clone(),
                    base: base.to_string(),
                });
            }
        }
    }

    for table in &ir.tables {
        if ir.get_struct(&table.type_name).is_none() {
            out.push(DanglingReference::TableRow {
                table: table.name.clone(),
                row_type: table.type_name.clone(),
            });
        }
    }

    out
}
