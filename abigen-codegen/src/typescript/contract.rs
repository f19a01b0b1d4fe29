//! Contract interface generation.
//!
//! Every action is emitted twice: once with positional parameters and once
//! with a single `params` object (method name suffixed with
//! [`OBJECT_METHOD_SUFFIX`]). Tables become paginated read accessors.

use crate::error::CodegenError;
use crate::resolver::TypeResolver;
use crate::tree::Node;
use abigen_schema::ir::to_camel_case;
use abigen_schema::{ActionDef, TableDef};

/// Trailing parameter present on every action method.
pub const OPTIONS_PARAM: &str = "options?: { from?: Account, auths?: ActorPermission[] }";

/// Suffix of the object-parameter form of an action method.
pub const OBJECT_METHOD_SUFFIX: &str = "O";

/// Suffix of table accessor methods.
pub const TABLE_METHOD_SUFFIX: &str = "Table";

/// Generator for the contract interface.
pub struct ContractGenerator<'a> {
    resolver: &'a TypeResolver<'a>,
}

impl<'a> ContractGenerator<'a> {
    /// Creates a new contract generator.
    #[must_use]
    pub fn new(resolver: &'a TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates the `export interface <Contract> extends Contract` block.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if an action has no struct of the
    /// same name.
    pub fn generate(&self) -> Result<Node, CodegenError> {
        let ir = self.resolver.ir();
        let mut positional = Vec::with_capacity(ir.actions.len());
        let mut object = Vec::with_capacity(ir.actions.len());

        for action in &ir.actions {
            let params = self.parameters(action)?;
            positional.push(Node::line(positional_method(action, &params)));
            object.push(Node::line(object_method(action, &params)));
        }

        let mut children = vec![Node::line("// Actions")];
        children.extend(positional);
        children.push(Node::line(
            "// Actions with object params. (This is WIP and not ready for use)",
        ));
        children.extend(object);
        children.push(Node::blank());
        children.push(Node::line("// Tables"));
        children.extend(
            ir.tables
                .iter()
                .map(|table| Node::line(self.table_accessor(table))),
        );

        Ok(Node::block(
            format!("export interface {} extends Contract", self.resolver.prefix()),
            children,
        ))
    }

    /// Resolves an action's parameters as `name: Type` strings.
    fn parameters(&self, action: &ActionDef) -> Result<Vec<String>, CodegenError> {
        let fields = self.resolver.ir().action_fields(action)?;
        Ok(fields
            .iter()
            .map(|field| {
                format!(
                    "{}: {}",
                    field.name,
                    self.resolver.resolve(&field.type_name)
                )
            })
            .collect())
    }

    /// Generates a table accessor signature.
    fn table_accessor(&self, table: &TableDef) -> String {
        format!(
            "{}{}(options?: GetTableRowsOptions): Promise<TableRowsResult<{}>>;",
            to_camel_case(&table.name),
            TABLE_METHOD_SUFFIX,
            self.resolver.local_name(&table.type_name)
        )
    }
}

fn positional_method(action: &ActionDef, params: &[String]) -> String {
    let mut all: Vec<&str> = params.iter().map(String::as_str).collect();
    all.push(OPTIONS_PARAM);
    format!("{}({}): Promise<any>;", action.name, all.join(", "))
}

fn object_method(action: &ActionDef, params: &[String]) -> String {
    format!(
        "{}{}(params: {{{}}}, {}): Promise<any>;",
        action.name,
        OBJECT_METHOD_SUFFIX,
        params.join(", "),
        OPTIONS_PARAM
    )
}
