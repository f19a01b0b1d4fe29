//! Declaration file assembly.

use crate::error::CodegenError;
use crate::options::GeneratorOptions;
use crate::resolver::TypeResolver;
use crate::tree::{DeclarationTree, Node};
use crate::typescript::{AliasGenerator, ContractGenerator, StructGenerator, VariantGenerator};
use abigen_schema::{SchemaIr, dangling_references, validate_schema};

/// Banner written at the top of every generated file.
pub const WARNING_BANNER: [&str; 5] = [
    "// =====================================================",
    "// WARNING: GENERATED FILE",
    "//",
    "// Any changes you make will be overwritten by Lamington",
    "// =====================================================",
];

/// Runtime types every generated file imports.
const RUNTIME_IMPORTS: [&str; 6] = [
    "Account",
    "Contract",
    "GetTableRowsOptions",
    "ExtendedAsset",
    "ExtendedSymbol",
    "ActorPermission",
];

/// Imported only when the contract has tables.
const TABLE_ROWS_IMPORT: &str = "TableRowsResult";

/// Generates the TypeScript declaration file of one contract.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    contract_name: String,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, contract_name: impl Into<String>) -> Self {
        Self::with_options(ir, contract_name, GeneratorOptions::default())
    }

    /// Creates a generator with explicit options.
    #[must_use]
    pub fn with_options(
        ir: &'a SchemaIr,
        contract_name: impl Into<String>,
        options: GeneratorOptions,
    ) -> Self {
        Self {
            ir,
            contract_name: contract_name.into(),
            options,
        }
    }

    /// Generates the declaration text.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if an action has no struct of the
    /// same name. No text is produced in that case.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let tree = self.build_tree()?;
        Ok(tree.flatten(&self.options.indent))
    }

    /// Builds the declaration tree without rendering it.
    ///
    /// # Errors
    /// See [`Generator::generate`].
    pub fn build_tree(&self) -> Result<DeclarationTree, CodegenError> {
        validate_schema(self.ir)?;
        for dangling in dangling_references(self.ir) {
            tracing::warn!(contract = %self.contract_name, "{}", dangling);
        }

        let resolver = TypeResolver::new(&self.contract_name, self.ir);
        self.report_fallbacks(&resolver);

        let mut tree = DeclarationTree::new();
        tree.extend(WARNING_BANNER.iter().map(|line| Node::line(*line)));
        tree.push(Node::blank());
        tree.push_line(self.import_line());
        tree.push(Node::blank());

        tree.push_line("// Table row types");
        let structs = StructGenerator::new(&resolver).generate();
        tracing::debug!(contract = %self.contract_name, count = self.ir.structs.len(), "structs");
        tree.extend(structs);

        tree.push_line("// Added Types");
        tree.extend(AliasGenerator::new(&resolver).generate());
        tracing::debug!(contract = %self.contract_name, count = self.ir.aliases.len(), "aliases");

        tree.push(Node::blank());
        tree.push_line("// Variants");
        tree.extend(VariantGenerator::new(&resolver).generate());
        tracing::debug!(contract = %self.contract_name, count = self.ir.variants.len(), "variants");

        tree.push(Node::blank());
        tree.push(ContractGenerator::new(&resolver).generate()?);
        tracing::debug!(
            contract = %self.contract_name,
            actions = self.ir.actions.len(),
            tables = self.ir.tables.len(),
            "contract interface"
        );
        tree.push(Node::blank());

        Ok(tree)
    }

    fn import_line(&self) -> String {
        let mut imports = RUNTIME_IMPORTS.to_vec();
        if !self.ir.tables.is_empty() {
            imports.push(TABLE_ROWS_IMPORT);
        }
        format!(
            "import {{ {} }} from '{}';",
            imports.join(", "),
            self.options.runtime_module
        )
    }

    /// Logs every type token that degrades to the fallback type.
    fn report_fallbacks(&self, resolver: &TypeResolver<'_>) {
        let struct_fields = self
            .ir
            .structs
            .values()
            .flat_map(|def| def.fields.iter().map(|field| field.type_name.as_str()));
        let aliases = self.ir.aliases.values().map(|alias| alias.type_name.as_str());
        let variants = self
            .ir
            .variants
            .values()
            .flat_map(|def| def.types.iter().map(String::as_str));

        for raw in struct_fields.chain(aliases).chain(variants) {
            for token in resolver.fallback_tokens(raw) {
                tracing::debug!(
                    contract = %self.contract_name,
                    token = %token,
                    expression = %raw,
                    "unknown type, using string"
                );
            }
        }
    }
}
