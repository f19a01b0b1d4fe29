//! # Abigen Schema
//!
//! EOSIO contract ABI model and type definitions.
//!
//! This crate provides:
//! - ABI JSON parsing with path-annotated errors
//! - Type definitions for ABI elements
//! - The type-expression grammar (`name[]`, `asset?`, `pair_K_V`)
//! - Name-indexed lookup tables for code generation
//! - Structural validation

pub mod actions;
pub mod error;
pub mod expr;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use actions::{ActionDef, TableDef};
pub use error::{ParseError, SchemaError};
pub use expr::TypeExpr;
pub use ir::SchemaIr;
pub use parser::{parse_abi, parse_abi_file};
pub use types::{AbiDocument, FieldDef, PrimitiveType, StructDef, TypeAlias, VariantDef};
pub use validation::{DanglingReference, dangling_references, validate_schema};
