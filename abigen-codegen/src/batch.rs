//! Generation over many ABI files.
//!
//! Each schema is an independent task on the rayon pool. A failing schema is
//! recorded in the [`BatchReport`] and does not stop the others.

use crate::error::CodegenError;
use crate::generate_with_options;
use crate::options::GeneratorOptions;
use crate::source::{DeclarationSink, SchemaSource, contract_name};
use rayon::prelude::*;
use std::path::PathBuf;

/// Outcome of a batch run, in identifier order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Identifiers written, with their output paths.
    pub generated: Vec<(String, PathBuf)>,
    /// Identifiers that failed, with their errors.
    pub failures: Vec<(String, CodegenError)>,
}

impl BatchReport {
    /// Returns true if every schema was generated.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of schemas processed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    /// Returns true if nothing was processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates and writes the declarations of one schema.
///
/// # Errors
/// Returns `CodegenError` if the schema cannot be read, parsed, generated or
/// written. Nothing is written unless generation succeeds.
pub fn generate_types(
    identifier: &str,
    source: &dyn SchemaSource,
    sink: &dyn DeclarationSink,
    options: &GeneratorOptions,
) -> Result<PathBuf, CodegenError> {
    let json = source.read(identifier)?;
    let text = generate_with_options(&json, contract_name(identifier), options)?;
    sink.write(identifier, &text)
}

/// Generates declarations for every schema the source lists.
///
/// # Errors
/// Returns `CodegenError::NoSchemas` if the source is empty, or the error of
/// the enumeration itself. Per-schema failures land in the report.
pub fn generate_all(
    source: &dyn SchemaSource,
    sink: &dyn DeclarationSink,
    options: &GeneratorOptions,
) -> Result<BatchReport, CodegenError> {
    let identifiers = source.identifiers()?;
    if identifiers.is_empty() {
        return Err(CodegenError::NoSchemas {
            location: source.location(),
        });
    }

    let outcomes: Vec<(String, Result<PathBuf, CodegenError>)> = identifiers
        .into_par_iter()
        .map(|identifier| {
            let outcome = generate_types(&identifier, source, sink, options);
            (identifier, outcome)
        })
        .collect();

    let mut report = BatchReport::default();
    for (identifier, outcome) in outcomes {
        match outcome {
            Ok(path) => {
                tracing::info!("Generated {} -> {}", identifier, path.display());
                report.generated.push((identifier, path));
            }
            Err(e) => {
                tracing::error!("Failed to generate {}: {}", identifier, e);
                report.failures.push((identifier, e));
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FsDeclarationSink, FsSchemaSource};
    use abigen_schema::SchemaError;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tempfile::tempdir;

    const GOOD_ABI: &str = r#"{
        "types": [],
        "structs": [{"name": "hi", "base": "", "fields": [{"name": "user", "type": "name"}]}],
        "actions": [{"name": "hi", "type": "hi"}],
        "tables": [],
        "variants": []
    }"#;

    const BAD_ABI: &str = r#"{
        "types": [],
        "structs": [],
        "actions": [{"name": "hi", "type": "hi"}],
        "tables": [],
        "variants": []
    }"#;

    struct MemorySource(HashMap<String, String>);

    impl SchemaSource for MemorySource {
        fn identifiers(&self) -> Result<Vec<String>, CodegenError> {
            let mut ids: Vec<String> = self.0.keys().cloned().collect();
            ids.sort();
            Ok(ids)
        }

        fn read(&self, identifier: &str) -> Result<String, CodegenError> {
            self.0
                .get(identifier)
                .cloned()
                .ok_or_else(|| CodegenError::MissingSchema {
                    path: PathBuf::from(identifier),
                })
        }
    }

    #[derive(Default)]
    struct MemorySink(Mutex<HashMap<String, String>>);

    impl DeclarationSink for MemorySink {
        fn write(&self, identifier: &str, text: &str) -> Result<PathBuf, CodegenError> {
            self.0
                .lock()
                .map_err(|_| CodegenError::generation("sink poisoned"))?
                .insert(identifier.to_string(), text.to_string());
            Ok(PathBuf::from(format!("{identifier}.ts")))
        }
    }

    fn memory_source(entries: &[(&str, &str)]) -> MemorySource {
        MemorySource(
            entries
                .iter()
                .map(|(id, text)| (id.to_string(), text.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_generate_all_isolates_failures() {
        let source = memory_source(&[
            ("a/hello", GOOD_ABI),
            ("b/broken", BAD_ABI),
            ("c/garbage", "not json"),
            ("d/world", GOOD_ABI),
        ]);
        let sink = MemorySink::default();

        let report =
            generate_all(&source, &sink, &GeneratorOptions::default()).expect("batch ran");

        assert!(!report.is_success());
        assert_eq!(report.len(), 4);
        let generated: Vec<&str> = report.generated.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(generated, vec!["a/hello", "d/world"]);

        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].0, "b/broken");
        assert!(matches!(
            report.failures[0].1,
            CodegenError::Schema(SchemaError::ActionStructNotFound { .. })
        ));
        assert!(matches!(report.failures[1].1, CodegenError::Parse(_)));

        let written = sink.0.lock().expect("lock");
        assert_eq!(written.len(), 2);
        assert!(written["a/hello"].contains("export interface Hello extends Contract {"));
        assert!(!written.contains_key("b/broken"));
    }

    #[test]
    fn test_generate_all_requires_schemas() {
        let source = memory_source(&[]);
        let sink = MemorySink::default();

        let err = generate_all(&source, &sink, &GeneratorOptions::default()).unwrap_err();
        assert!(matches!(err, CodegenError::NoSchemas { .. }));
    }

    #[test]
    fn test_generate_types_uses_last_segment_as_contract() {
        let source = memory_source(&[("contracts/eosio.token", GOOD_ABI)]);
        let sink = MemorySink::default();

        generate_types(
            "contracts/eosio.token",
            &source,
            &sink,
            &GeneratorOptions::default(),
        )
        .expect("generated");

        let written = sink.0.lock().expect("lock");
        assert!(written["contracts/eosio.token"].contains("export interface EosioTokenHi {"));
    }

    #[test]
    fn test_generate_all_on_filesystem() {
        let abi_dir = tempdir().expect("tempdir");
        let out_dir = tempdir().expect("tempdir");
        std::fs::create_dir_all(abi_dir.path().join("hello")).expect("mkdir");
        std::fs::write(abi_dir.path().join("hello/hello.abi"), GOOD_ABI).expect("write");

        let source = FsSchemaSource::new(abi_dir.path());
        let sink = FsDeclarationSink::new(out_dir.path());
        let report =
            generate_all(&source, &sink, &GeneratorOptions::default()).expect("batch ran");

        assert!(report.is_success());
        let path = out_dir.path().join("hello/hello.ts");
        assert_eq!(report.generated, vec![("hello/hello".to_string(), path.clone())]);
        let text = std::fs::read_to_string(path).expect("read");
        assert!(text.starts_with("// ====================================================="));
        assert!(text.contains("hi(user: string|number, options?:"));
    }

    #[test]
    fn test_generate_all_empty_directory() {
        let abi_dir = tempdir().expect("tempdir");
        let out_dir = tempdir().expect("tempdir");
        let source = FsSchemaSource::new(abi_dir.path());
        let sink = FsDeclarationSink::new(out_dir.path());

        let err = generate_all(&source, &sink, &GeneratorOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("no ABI files to generate from"));
    }
}
