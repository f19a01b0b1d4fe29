//! TypeScript declaration generators.

pub mod aliases;
pub mod contract;
pub mod structs;
pub mod variants;

pub use aliases::AliasGenerator;
pub use contract::ContractGenerator;
pub use structs::StructGenerator;
pub use variants::VariantGenerator;

#[cfg(test)]
pub(crate) mod fixtures {
    use abigen_schema::SchemaIr;
    use abigen_schema::parser::parse_abi;

    /// Builds lookup tables from an inline ABI.
    pub fn ir_from(json: &str) -> SchemaIr {
        let doc = parse_abi(json).expect("Failed to parse");
        SchemaIr::from_document(&doc)
    }
}
