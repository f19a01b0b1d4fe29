//! ABI JSON parser.
//!
//! This module decodes compiled contract ABI files into [`AbiDocument`] and
//! rejects documents whose declaration names collide.

use crate::error::ParseError;
use crate::types::AbiDocument;
use std::collections::HashSet;

/// Parses an ABI document from a JSON string.
///
/// # Arguments
/// * `json` - ABI file content
///
/// # Returns
/// Parsed document or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, a required top-level array
/// is missing, or two declarations of the same kind share a name.
pub fn parse_abi(json: &str) -> Result<AbiDocument, ParseError> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let document: AbiDocument = serde_path_to_error::deserialize(de).map_err(|err| {
        let path = err.path().to_string();
        ParseError::Json {
            path,
            message: err.into_inner().to_string(),
        }
    })?;

    check_unique_names(&document)?;
    Ok(document)
}

/// Parses an ABI document from a file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn parse_abi_file(path: &std::path::Path) -> Result<AbiDocument, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_abi(&json)
}

/// Rejects duplicate names within each declaration category.
fn check_unique_names(document: &AbiDocument) -> Result<(), ParseError> {
    ensure_unique("struct", document.structs.iter().map(|s| s.name.as_str()))?;
    ensure_unique("variant", document.variants.iter().map(|v| v.name.as_str()))?;
    ensure_unique(
        "type alias",
        document.aliases.iter().map(|a| a.new_type_name.as_str()),
    )?;
    ensure_unique("action", document.actions.iter().map(|a| a.name.as_str()))?;
    ensure_unique("table", document.tables.iter().map(|t| t.name.as_str()))?;
    Ok(())
}

fn ensure_unique<'a>(
    kind: &str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ParseError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ParseError::duplicate(kind, name));
        }
    }
    Ok(())
}
