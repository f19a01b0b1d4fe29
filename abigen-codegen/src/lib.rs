//! # Abigen Codegen
//!
//! TypeScript declaration generation from EOSIO contract ABIs.
//!
//! This crate provides:
//! - Type expression resolution (`name[]`, `asset?`, `pair_K_V`, local names)
//! - Struct, alias, variant and contract interface generation
//! - A declaration tree with a depth-indented flattening pass
//! - Batch generation over ABI directories

pub mod batch;
pub mod error;
pub mod generator;
pub mod options;
pub mod resolver;
pub mod source;
pub mod support;
pub mod tree;
pub mod typescript;

pub use batch::{BatchReport, generate_all, generate_types};
pub use error::CodegenError;
pub use generator::Generator;
pub use options::GeneratorOptions;
pub use resolver::TypeResolver;
pub use source::{DeclarationSink, FsDeclarationSink, FsSchemaSource, SchemaSource};
pub use tree::{DeclarationTree, Node};

/// Generates TypeScript declarations from an ABI JSON string.
///
/// # Arguments
/// * `json` - ABI file content
/// * `contract_name` - Contract name used to prefix generated types
///
/// # Returns
/// Generated declarations as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str, contract_name: &str) -> Result<String, CodegenError> {
    generate_with_options(json, contract_name, &GeneratorOptions::default())
}

/// Generates TypeScript declarations with explicit options.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_with_options(
    json: &str,
    contract_name: &str,
    options: &GeneratorOptions,
) -> Result<String, CodegenError> {
    let document = abigen_schema::parse_abi(json)?;
    let ir = abigen_schema::SchemaIr::from_document(&document);
    let generator = Generator::with_options(&ir, contract_name, options.clone());
    generator.generate()
}

/// Generates TypeScript declarations from an ABI file.
///
/// The contract name is the file stem (`token.abi` → `token`).
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    if !path.is_file() {
        return Err(CodegenError::MissingSchema {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path)?;
    let contract_name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| {
            CodegenError::generation(format!("cannot derive contract name from '{}'", path.display()))
        })?;
    generate_from_json(&json, contract_name)
}
