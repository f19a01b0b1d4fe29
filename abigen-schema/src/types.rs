//! ABI type definitions.
//!
//! This module contains the data structures representing ABI document
//! elements: structs, variants, type aliases and the built-in primitives.

use crate::actions::{ActionDef, TableDef};
use serde::Deserialize;

/// Complete ABI document.
///
/// The five declaration arrays are required; any other top-level key a
/// compiler emits (`ricardian_clauses`, `error_messages`, ...) is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct AbiDocument {
    /// ABI format version string (e.g. `eosio::abi/1.1`).
    #[serde(default)]
    pub version: Option<String>,
    /// Type aliases, stored under the `types` key.
    #[serde(rename = "types")]
    pub aliases: Vec<TypeAlias>,
    /// Struct definitions.
    pub structs: Vec<StructDef>,
    /// Action definitions.
    pub actions: Vec<ActionDef>,
    /// Table definitions.
    pub tables: Vec<TableDef>,
    /// Variant (tagged union) definitions.
    pub variants: Vec<VariantDef>,
}

impl AbiDocument {
    /// Creates a new empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: None,
            aliases: Vec::new(),
            structs: Vec::new(),
            actions: Vec::new(),
            tables: Vec::new(),
            variants: Vec::new(),
        }
    }

    /// Adds a struct definition to the document.
    pub fn add_struct(&mut self, def: StructDef) {
        self.structs.push(def);
    }

    /// Adds a variant definition to the document.
    pub fn add_variant(&mut self, def: VariantDef) {
        self.variants.push(def);
    }

    /// Adds a type alias to the document.
    pub fn add_alias(&mut self, def: TypeAlias) {
        self.aliases.push(def);
    }

    /// Adds an action to the document.
    pub fn add_action(&mut self, def: ActionDef) {
        self.actions.push(def);
    }

    /// Adds a table to the document.
    pub fn add_table(&mut self, def: TableDef) {
        self.tables.push(def);
    }
}

impl Default for AbiDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Struct definition.
#[derive(Debug, Clone, Deserialize)]
pub struct StructDef {
    /// Struct name.
    pub name: String,
    /// Parent struct name, empty when there is none.
    #[serde(default)]
    pub base: String,
    /// Ordered fields.
    pub fields: Vec<FieldDef>,
}

impl StructDef {
    /// Creates a new struct definition without a base.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: String::new(),
            fields: Vec::new(),
        }
    }

    /// Sets the parent struct.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.fields.push(FieldDef::new(name, type_name));
        self
    }

    /// Returns the parent struct name, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        if self.base.is_empty() {
            None
        } else {
            Some(&self.base)
        }
    }
}

/// Struct field.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Raw type expression.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl FieldDef {
    /// Creates a new field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Variant (tagged union) definition.
#[derive(Debug, Clone, Deserialize)]
pub struct VariantDef {
    /// Variant name.
    pub name: String,
    /// Member type expressions, in declaration order.
    pub types: Vec<String>,
}

impl VariantDef {
    /// Creates a new variant from its member types.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

/// Type alias ("added type").
#[derive(Debug, Clone, Deserialize)]
pub struct TypeAlias {
    /// Alias name.
    pub new_type_name: String,
    /// Aliased type expression.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl TypeAlias {
    /// Creates a new alias.
    #[must_use]
    pub fn new(new_type_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            new_type_name: new_type_name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Built-in ABI primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Boolean.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Signed 128-bit integer.
    Int128,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Unsigned 128-bit integer.
    Uint128,
    /// Variable-length signed 32-bit integer.
    VarInt32,
    /// Variable-length unsigned 32-bit integer.
    VarUint32,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// 128-bit floating point.
    Float128,
    /// Microsecond timestamp.
    TimePoint,
    /// Second timestamp.
    TimePointSec,
    /// Half-second block slot timestamp.
    BlockTimestamp,
    /// Account name.
    Name,
    /// Raw bytes.
    Bytes,
    /// UTF-8 string.
    String,
    /// 160-bit checksum.
    Checksum160,
    /// 256-bit checksum.
    Checksum256,
    /// 512-bit checksum.
    Checksum512,
    /// Public key.
    PublicKey,
    /// Signature.
    Signature,
    /// Token symbol (precision + code).
    Symbol,
    /// Token symbol code.
    SymbolCode,
    /// Token quantity.
    Asset,
    /// Asset with its issuing contract.
    ExtendedAsset,
    /// Symbol with its issuing contract.
    ExtendedSymbol,
}

impl PrimitiveType {
    /// Every primitive, in table order.
    pub const ALL: [Self; 32] = [
        Self::Bool,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Int128,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Uint128,
        Self::VarInt32,
        Self::VarUint32,
        Self::Float32,
        Self::Float64,
        Self::Float128,
        Self::TimePoint,
        Self::TimePointSec,
        Self::BlockTimestamp,
        Self::Name,
        Self::Bytes,
        Self::String,
        Self::Checksum160,
        Self::Checksum256,
        Self::Checksum512,
        Self::PublicKey,
        Self::Signature,
        Self::Symbol,
        Self::SymbolCode,
        Self::Asset,
        Self::ExtendedAsset,
        Self::ExtendedSymbol,
    ];

    /// Returns the TypeScript type for this primitive.
    #[must_use]
    pub const fn ts_type(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Int128
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64
            | Self::Uint128
            | Self::VarInt32
            | Self::VarUint32
            | Self::Float32
            | Self::Float64
            | Self::Float128 => "number",
            Self::TimePoint | Self::TimePointSec | Self::BlockTimestamp => "Date",
            Self::Name => "string|number",
            Self::Bytes
            | Self::String
            | Self::Checksum160
            | Self::Checksum256
            | Self::Checksum512
            | Self::PublicKey
            | Self::Signature
            | Self::Symbol
            | Self::SymbolCode
            | Self::Asset => "string",
            Self::ExtendedAsset => "ExtendedAsset",
            Self::ExtendedSymbol => "ExtendedSymbol",
        }
    }

    /// Returns the ABI type name.
    #[must_use]
    pub const fn abi_name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Int128 => "int128",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Uint128 => "uint128",
            Self::VarInt32 => "varint32",
            Self::VarUint32 => "varuint32",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::Float128 => "float128",
            Self::TimePoint => "time_point",
            Self::TimePointSec => "time_point_sec",
            Self::BlockTimestamp => "block_timestamp_type",
            Self::Name => "name",
            Self::Bytes => "bytes",
            Self::String => "string",
            Self::Checksum160 => "checksum160",
            Self::Checksum256 => "checksum256",
            Self::Checksum512 => "checksum512",
            Self::PublicKey => "public_key",
            Self::Signature => "signature",
            Self::Symbol => "symbol",
            Self::SymbolCode => "symbol_code",
            Self::Asset => "asset",
            Self::ExtendedAsset => "extended_asset",
            Self::ExtendedSymbol => "extended_symbol",
        }
    }

    /// Parses a primitive type from its ABI name.
    #[must_use]
    pub fn from_abi_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.abi_name() == name)
    }
}
