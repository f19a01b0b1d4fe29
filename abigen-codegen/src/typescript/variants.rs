//! Variant (tagged union) generation.
//!
//! A variant renders as `[string, A | B]`. The first slot carries the
//! runtime tag and is not checked against the member list.

use crate::resolver::TypeResolver;
use crate::tree::Node;
use abigen_schema::VariantDef;
use indexmap::IndexSet;

/// Generator for variant tuple types.
pub struct VariantGenerator<'a> {
    resolver: &'a TypeResolver<'a>,
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new variant generator.
    #[must_use]
    pub fn new(resolver: &'a TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates one type per variant, each followed by a blank line.
    #[must_use]
    pub fn generate(&self) -> Vec<Node> {
        let mut nodes = Vec::new();

        for def in self.resolver.ir().variants.values() {
            nodes.push(self.generate_variant(def));
            nodes.push(Node::blank());
        }

        nodes
    }

    /// Resolves the members of a variant, dropping repeated target types.
    #[must_use]
    pub fn member_types(&self, def: &VariantDef) -> Vec<String> {
        let members: IndexSet<String> = def
            .types
            .iter()
            .map(|member| self.resolver.resolve(member))
            .collect();
        members.into_iter().collect()
    }

    fn generate_variant(&self, def: &VariantDef) -> Node {
        Node::line(format!(
            "export type {} = [string, {}];",
            self.resolver.local_name(&def.name),
            self.member_types(def).join(" | ")
        ))
    }
}
