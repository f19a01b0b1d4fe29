//! # Abigen
//!
//! Strongly-typed TypeScript declarations for EOSIO smart contracts.
//!
//! Abigen reads the ABI a contract compiler emits and produces one
//! declaration file per contract: an interface per struct, a type per alias
//! and variant, and a contract interface with a method per action and an
//! accessor per table.
//!
//! ## Quick Start
//!
//! ```
//! let abi = r#"{
//!     "types": [{"new_type_name": "id64", "type": "uint64"}],
//!     "structs": [],
//!     "actions": [],
//!     "tables": [],
//!     "variants": []
//! }"#;
//!
//! let ts = abigen::generate_from_json(abi, "game")?;
//! assert!(ts.contains("export type GameId64 = number;"));
//! # Ok::<(), abigen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - ABI parsing, type-expression grammar and validation
//! - [`codegen`] - Type resolution, declaration generation and batch runs
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod prelude;

/// ABI parsing and validation.
pub mod schema {
    pub use abigen_schema::*;
}

/// Declaration generation.
pub mod codegen {
    pub use abigen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use abigen_codegen::{
    BatchReport, CodegenError, Generator, GeneratorOptions, generate_all, generate_from_file,
    generate_from_json, generate_types,
};
pub use abigen_schema::{AbiDocument, SchemaIr, TypeExpr, parse_abi};
