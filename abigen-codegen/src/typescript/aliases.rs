//! Type alias generation.

use crate::resolver::TypeResolver;
use crate::tree::Node;

/// Generator for `export type` alias lines.
pub struct AliasGenerator<'a> {
    resolver: &'a TypeResolver<'a>,
}

impl<'a> AliasGenerator<'a> {
    /// Creates a new alias generator.
    #[must_use]
    pub fn new(resolver: &'a TypeResolver<'a>) -> Self {
        Self { resolver }
    }

    /// Generates one line per alias.
    #[must_use]
    pub fn generate(&self) -> Vec<Node> {
        self.resolver
            .ir()
            .aliases
            .values()
            .map(|alias| {
                Node::line(format!(
                    "export type {} = {};",
                    self.resolver.local_name(&alias.new_type_name),
                    self.resolver.resolve(&alias.type_name)
                ))
            })
            .collect()
    }
}
