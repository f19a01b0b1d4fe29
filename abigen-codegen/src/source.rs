//! Schema sources and declaration sinks.
//!
//! A schema identifier is a `/`-separated path without extension, e.g.
//! `contracts/token/token`. Its last segment is the contract name.

use crate::error::CodegenError;
use std::path::{Component, Path, PathBuf};

/// File extension of compiled ABI files.
pub const ABI_EXTENSION: &str = "abi";

/// File extension of generated declaration files.
pub const DECLARATION_EXTENSION: &str = "ts";

/// Supplies raw ABI text.
pub trait SchemaSource: Sync {
    /// Lists every available schema identifier.
    ///
    /// # Errors
    /// Returns an error if the identifiers cannot be enumerated.
    fn identifiers(&self) -> Result<Vec<String>, CodegenError>;

    /// Reads the raw ABI text of one schema.
    ///
    /// # Errors
    /// Returns an error if the schema does not exist or cannot be read.
    fn read(&self, identifier: &str) -> Result<String, CodegenError>;

    /// Describes where schemas come from, for error messages.
    fn location(&self) -> String {
        "schema source".to_string()
    }
}

/// Persists generated declaration text.
pub trait DeclarationSink: Sync {
    /// Writes the declarations of one schema and returns where they went.
    ///
    /// # Errors
    /// Returns an error if the text cannot be persisted.
    fn write(&self, identifier: &str, text: &str) -> Result<PathBuf, CodegenError>;
}

/// Returns the contract name of a schema identifier.
#[must_use]
pub fn contract_name(identifier: &str) -> &str {
    identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier)
}

/// Reads `<root>/<identifier>.abi` files.
#[derive(Debug, Clone)]
pub struct FsSchemaSource {
    root: PathBuf,
}

impl FsSchemaSource {
    /// Creates a source rooted at `root`.
    ///
    /// `.` components are dropped, so `./abis` and `abis` list the same
    /// identifiers.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: normalize_root(&root.into()),
        }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the ABI path of an identifier.
    #[must_use]
    pub fn path_of(&self, identifier: &str) -> PathBuf {
        self.root.join(format!("{identifier}.{ABI_EXTENSION}"))
    }

    fn identifier_of(&self, path: &Path) -> Result<String, CodegenError> {
        let relative = path.strip_prefix(&self.root).map_err(|_| {
            CodegenError::generation(format!(
                "ABI path '{}' is outside root '{}'",
                path.display(),
                self.root.display()
            ))
        })?;
        let relative = relative.with_extension("");

        let mut segments = Vec::new();
        for component in relative.components() {
            let segment = component.as_os_str().to_str().ok_or_else(|| {
                CodegenError::generation(format!(
                    "non UTF-8 ABI path '{}'",
                    path.display()
                ))
            })?;
            segments.push(segment);
        }
        Ok(segments.join("/"))
    }
}

impl SchemaSource for FsSchemaSource {
    fn identifiers(&self) -> Result<Vec<String>, CodegenError> {
        let root = self.root.to_str().ok_or_else(|| {
            CodegenError::generation(format!("non UTF-8 ABI root '{}'", self.root.display()))
        })?;
        let pattern = if root.is_empty() {
            format!("**/*.{ABI_EXTENSION}")
        } else {
            format!(
                "{}/**/*.{ABI_EXTENSION}",
                glob::Pattern::escape(root.trim_end_matches('/'))
            )
        };

        let mut identifiers = Vec::new();
        for entry in glob::glob(&pattern)? {
            let path = entry?;
            identifiers.push(self.identifier_of(&path)?);
        }
        identifiers.sort();

        tracing::debug!(root = %self.root.display(), count = identifiers.len(), "found ABI files");
        Ok(identifiers)
    }

    fn read(&self, identifier: &str) -> Result<String, CodegenError> {
        let path = self.path_of(identifier);
        if !path.is_file() {
            return Err(CodegenError::MissingSchema { path });
        }
        Ok(std::fs::read_to_string(&path)?)
    }

    fn location(&self) -> String {
        if self.root.as_os_str().is_empty() {
            "'.'".to_string()
        } else {
            format!("'{}'", self.root.display())
        }
    }
}

/// Drops `.` components; glob reports matches without them.
fn normalize_root(root: &Path) -> PathBuf {
    root.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

/// Writes `<out_dir>/<identifier>.ts` files.
#[derive(Debug, Clone)]
pub struct FsDeclarationSink {
    out_dir: PathBuf,
}

impl FsDeclarationSink {
    /// Creates a sink writing below `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Returns the declaration path of an identifier.
    #[must_use]
    pub fn path_of(&self, identifier: &str) -> PathBuf {
        self.out_dir
            .join(format!("{identifier}.{DECLARATION_EXTENSION}"))
    }
}

impl DeclarationSink for FsDeclarationSink {
    fn write(&self, identifier: &str, text: &str) -> Result<PathBuf, CodegenError> {
        let path = self.path_of(identifier);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, text)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_contract_name() {
        assert_eq!(contract_name("contracts/token/token"), "token");
        assert_eq!(contract_name("eosio.token"), "eosio.token");
        assert_eq!(contract_name(r"contracts\game"), "game");
        assert_eq!(contract_name(""), "");
    }

    #[test]
    fn test_identifiers_are_relative_and_sorted() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("contracts/token");
        std::fs::create_dir_all(&nested).expect("mkdir");
        std::fs::write(nested.join("token.abi"), "{}").expect("write");
        std::fs::write(dir.path().join("alpha.abi"), "{}").expect("write");
        std::fs::write(dir.path().join("notes.txt"), "").expect("write");

        let source = FsSchemaSource::new(dir.path());
        let identifiers = source.identifiers().expect("identifiers");

        assert_eq!(identifiers, vec!["alpha", "contracts/token/token"]);
    }

    #[test]
    fn test_normalize_root() {
        assert_eq!(normalize_root(Path::new("./abis")), PathBuf::from("abis"));
        assert_eq!(normalize_root(Path::new("./abis/./sub/")), PathBuf::from("abis/sub"));
        assert_eq!(normalize_root(Path::new(".")), PathBuf::new());
        assert_eq!(normalize_root(Path::new("/tmp/abis")), PathBuf::from("/tmp/abis"));
    }

    #[test]
    fn test_dot_prefixed_root_lists_relative_identifiers() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join("abis/sub");
        std::fs::create_dir_all(&nested).expect("mkdir");
        std::fs::write(nested.join("tok.abi"), "{}").expect("write");

        let source = FsSchemaSource::new(dir.path().join(".").join("abis"));
        assert_eq!(source.root(), dir.path().join("abis"));

        let identifiers = source.identifiers().expect("identifiers");
        assert_eq!(identifiers, vec!["sub/tok"]);
        assert_eq!(source.read("sub/tok").expect("read"), "{}");
        assert_eq!(contract_name(&identifiers[0]), "tok");
    }

    #[test]
    fn test_dot_prefixed_relative_root_matches_glob_paths() {
        let source = FsSchemaSource::new("./abis");
        let identifier = source
            .identifier_of(Path::new("abis/sub/tok.abi"))
            .expect("identifier");

        assert_eq!(identifier, "sub/tok");
        assert_eq!(source.path_of(&identifier), PathBuf::from("abis/sub/tok.abi"));
        assert_eq!(source.location(), "'abis'");
        assert_eq!(FsSchemaSource::new(".").location(), "'.'");
    }

    #[test]
    fn test_path_outside_root_is_an_error() {
        let source = FsSchemaSource::new("abis");
        let err = source
            .identifier_of(Path::new("other/tok.abi"))
            .unwrap_err();
        assert!(matches!(err, CodegenError::Generation { .. }));
    }

    #[test]
    fn test_identifiers_empty_dir() {
        let dir = tempdir().expect("tempdir");
        let source = FsSchemaSource::new(dir.path());
        assert!(source.identifiers().expect("identifiers").is_empty());
    }

    #[test]
    fn test_read_existing_and_missing() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("token.abi"), "{\"x\": 1}").expect("write");
        let source = FsSchemaSource::new(dir.path());

        assert_eq!(source.read("token").expect("read"), "{\"x\": 1}");

        let err = source.read("missing").unwrap_err();
        match err {
            CodegenError::MissingSchema { path } => {
                assert_eq!(path, dir.path().join("missing.abi"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_sink_creates_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let sink = FsDeclarationSink::new(dir.path());

        let path = sink
            .write("contracts/token/token", "export {};\n")
            .expect("write");

        assert_eq!(path, dir.path().join("contracts/token/token.ts"));
        assert_eq!(
            std::fs::read_to_string(path).expect("read"),
            "export {};\n"
        );
    }
}
