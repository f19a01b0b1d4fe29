//! ABI type expression to TypeScript type resolution.
//!
//! Resolution is total: tokens that are neither schema-local names nor
//! known primitives become `string`.

use abigen_schema::ir::{SchemaIr, to_pascal_case};
use abigen_schema::{PrimitiveType, TypeExpr};

/// TypeScript type used for unrecognized tokens.
pub const FALLBACK_TYPE: &str = "string";

/// What a bare type token refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseKind {
    /// A struct declared in the ABI.
    Struct,
    /// A variant declared in the ABI.
    Variant,
    /// A type alias declared in the ABI.
    Alias,
    /// A built-in primitive.
    Primitive(PrimitiveType),
    /// Nothing known; falls back to [`FALLBACK_TYPE`].
    Unknown,
}

/// Resolves type expressions for one contract.
#[derive(Debug, Clone)]
pub struct TypeResolver<'a> {
    ir: &'a SchemaIr,
    prefix: String,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver that prefixes schema-local names with the
    /// PascalCase form of `contract_name`.
    #[must_use]
    pub fn new(contract_name: &str, ir: &'a SchemaIr) -> Self {
        Self {
            ir,
            prefix: to_pascal_case(contract_name),
        }
    }

    /// Returns the contract prefix (e.g. `EosioToken`).
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the lookup tables this resolver reads.
    #[must_use]
    pub fn ir(&self) -> &'a SchemaIr {
        self.ir
    }

    /// Returns the generated name of a schema-local declaration.
    #[must_use]
    pub fn local_name(&self, name: &str) -> String {
        format!("{}{}", self.prefix, to_pascal_case(name))
    }

    /// Classifies a bare token. Structs win over variants, variants over
    /// aliases, and aliases over primitives.
    #[must_use]
    pub fn classify(&self, token: &str) -> BaseKind {
        if self.ir.get_struct(token).is_some() {
            BaseKind::Struct
        } else if self.ir.get_variant(token).is_some() {
            BaseKind::Variant
        } else if self.ir.get_alias(token).is_some() {
            BaseKind::Alias
        } else if let Some(prim) = PrimitiveType::from_abi_name(token) {
            BaseKind::Primitive(prim)
        } else {
            BaseKind::Unknown
        }
    }

    /// Resolves a raw ABI type string.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> String {
        self.resolve_expr(&TypeExpr::parse(raw))
    }

    /// Resolves a parsed type expression.
    #[must_use]
    pub fn resolve_expr(&self, expr: &TypeExpr) -> String {
        match expr {
            TypeExpr::Named(token) => self.resolve_base(token),
            TypeExpr::Array(inner) => format!("Array<{}>", self.resolve_expr(inner)),
            TypeExpr::Optional(inner) => format!("{}|null", self.resolve_expr(inner)),
            TypeExpr::Pair(key, value) => format!(
                "{{ key: {}; value: {} }}",
                self.resolve_expr(key),
                self.resolve_expr(value)
            ),
        }
    }

    fn resolve_base(&self, token: &str) -> String {
        match self.classify(token) {
            BaseKind::Struct | BaseKind::Variant | BaseKind::Alias => self.local_name(token),
            BaseKind::Primitive(prim) => prim.ts_type().to_string(),
            BaseKind::Unknown => FALLBACK_TYPE.to_string(),
        }
    }

    /// Returns the tokens of `raw` that resolve to [`FALLBACK_TYPE`].
    #[must_use]
    pub fn fallback_tokens(&self, raw: &str) -> Vec<String> {
        TypeExpr::parse(raw)
            .names()
            .into_iter()
            .filter(|token| self.classify(token) == BaseKind::Unknown)
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abigen_schema::{AbiDocument, StructDef, TypeAlias, VariantDef};

    fn game_ir() -> SchemaIr {
        let mut doc = AbiDocument::new();
        doc.add_struct(StructDef::new("player").with_field("id", "uint64"));
        doc.add_struct(StructDef::new("asset"));
        doc.add_variant(VariantDef::new("move_kind", ["uint8", "player"]));
        doc.add_alias(TypeAlias::new("id64", "uint64"));
        SchemaIr::from_document(&doc)
    }

    #[test]
    fn test_primitives_plain_array_optional() {
        let ir = SchemaIr::default();
        let resolver = TypeResolver::new("token", &ir);

        for prim in PrimitiveType::ALL {
            let ts = prim.ts_type();
            let name = prim.abi_name();
            assert_eq!(resolver.resolve(name), ts);
            assert_eq!(resolver.resolve(&format!("{name}[]")), format!("Array<{ts}>"));
            assert_eq!(resolver.resolve(&format!("{name}?")), format!("{ts}|null"));
        }
    }

    #[test]
    fn test_local_names_are_prefixed() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(resolver.resolve("player"), "GamePlayer");
        assert_eq!(resolver.resolve("move_kind"), "GameMoveKind");
        assert_eq!(resolver.resolve("id64"), "GameId64");
        assert_eq!(resolver.resolve("player[]"), "Array<GamePlayer>");
        assert_eq!(resolver.resolve("id64?"), "GameId64|null");
    }

    #[test]
    fn test_struct_shadows_primitive() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(resolver.classify("asset"), BaseKind::Struct);
        assert_eq!(resolver.resolve("asset"), "GameAsset");
    }

    #[test]
    fn test_unknown_falls_back_to_string() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(resolver.resolve("uint256"), "string");
        assert_eq!(resolver.resolve("mystery[]"), "Array<string>");
        assert_eq!(resolver.fallback_tokens("pair_mystery_uint8"), vec!["mystery"]);
        assert!(resolver.fallback_tokens("player").is_empty());
    }

    #[test]
    fn test_pairs() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(
            resolver.resolve("pair_uint64_player"),
            "{ key: number; value: GamePlayer }"
        );
        assert_eq!(
            resolver.resolve("pair_name_pair_uint8_id64"),
            "{ key: string|number; value: { key: number; value: GameId64 } }"
        );
        assert_eq!(
            resolver.resolve("pair_uint8_asset[]"),
            "Array<{ key: number; value: GameAsset }>"
        );
    }

    #[test]
    fn test_pair_value_with_underscores() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(
            resolver.resolve("pair_name_move_kind"),
            "{ key: string|number; value: GameMoveKind }"
        );
        assert_eq!(
            resolver.resolve("pair_uint32_time_point_sec"),
            "{ key: number; value: Date }"
        );
    }

    #[test]
    fn test_optional_array_is_distinct_from_array() {
        let ir = SchemaIr::default();
        let resolver = TypeResolver::new("token", &ir);

        assert_eq!(resolver.resolve("uint8[]"), "Array<number>");
        assert_eq!(resolver.resolve("uint8[]?"), "Array<number>|null");
    }

    #[test]
    fn test_repeated_optional_renders_single_null() {
        let ir = game_ir();
        let resolver = TypeResolver::new("game", &ir);

        assert_eq!(resolver.resolve("uint8??"), "number|null");
        assert_eq!(resolver.resolve("player??[]"), "Array<GamePlayer|null>");
    }

    #[test]
    fn test_prefix_of_dotted_contract() {
        let ir = game_ir();
        let resolver = TypeResolver::new("eosio.game", &ir);
        assert_eq!(resolver.prefix(), "EosioGame");
        assert_eq!(resolver.local_name("player"), "EosioGamePlayer");
    }
}
