//! Struct interface generation.

use crate::resolver::TypeResolver;
use crate::tree::Node;
use abigen_schema::StructDef;

/// Generator for struct interfaces.
pub struct StructGenerator<'a> {
    resolver: &'a TypeResolver<'a>,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(resolver: &'a TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates one interface per struct, each followed by a blank line.
    #[must_use]
    pub fn generate(&self) -> Vec<Node> {
        let mut nodes = Vec::new();

        for def in self.resolver.ir().structs.values() {
            nodes.push(self.generate_struct(def));
            nodes.push(Node::blank());
        }

        nodes
    }

    /// Generates a struct interface.
    fn generate_struct(&self, def: &StructDef) -> Node {
        let mut header = format!("export interface {}", self.resolver.local_name(&def.name));
        if let Some(base) = def.base() {
            header.push_str(" extends ");
            header.push_str(&self.resolver.local_name(base));
        }

        let fields = def
            .fields
            .iter()
            .map(|field| {
                Node::line(format!(
                    "{}: {};",
                    field.name,
                    self.resolver.resolve(&field.type_name)
                ))
            })
            .collect();

        Node::block(header, fields)
    }
}
