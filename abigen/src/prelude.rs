//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use abigen::prelude::*;
//! ```

// Schema types
pub use abigen_schema::{
    AbiDocument, ActionDef, FieldDef, ParseError, PrimitiveType, SchemaError, SchemaIr,
    StructDef, TableDef, TypeAlias, TypeExpr, VariantDef, parse_abi,
};

// Generation
pub use abigen_codegen::resolver::{BaseKind, TypeResolver};
pub use abigen_codegen::{
    BatchReport, CodegenError, DeclarationSink, DeclarationTree, FsDeclarationSink,
    FsSchemaSource, Generator, GeneratorOptions, Node, SchemaSource, generate_all,
    generate_from_json, generate_types,
};
