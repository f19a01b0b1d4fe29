//! Example: generate declarations for an inline token ABI.
//!
//! Run with: `cargo run --example generate`

use abigen::prelude::*;

const TOKEN_ABI: &str = r#"{
    "version": "eosio::abi/1.1",
    "types": [{"new_type_name": "account_name", "type": "name"}],
    "structs": [
        {"name": "account", "base": "", "fields": [{"name": "balance", "type": "asset"}]},
        {"name": "currency_stats", "base": "", "fields": [
            {"name": "supply", "type": "asset"},
            {"name": "max_supply", "type": "asset"},
            {"name": "issuer", "type": "account_name"}
        ]},
        {"name": "transfer", "base": "", "fields": [
            {"name": "from", "type": "account_name"},
            {"name": "to", "type": "account_name"},
            {"name": "quantity", "type": "asset"},
            {"name": "memo", "type": "string"}
        ]},
        {"name": "setmeta", "base": "", "fields": [
            {"name": "entries", "type": "pair_name_string[]"},
            {"name": "note", "type": "string?"}
        ]}
    ],
    "actions": [
        {"name": "transfer", "type": "transfer", "ricardian_contract": ""},
        {"name": "setmeta", "type": "setmeta", "ricardian_contract": ""}
    ],
    "tables": [
        {"name": "accounts", "index_type": "i64", "key_names": [], "key_types": [], "type": "account"},
        {"name": "stat", "index_type": "i64", "key_names": [], "key_types": [], "type": "currency_stats"}
    ],
    "variants": [{"name": "balance_or_stats", "types": ["account", "currency_stats"]}]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let document = parse_abi(TOKEN_ABI)?;
    let ir = SchemaIr::from_document(&document);

    let resolver = TypeResolver::new("eosio.token", &ir);
    for raw in ["account_name", "pair_name_string[]", "string?", "currency_stats"] {
        println!("// {raw} -> {}", resolver.resolve(raw));
    }
    println!();

    let generator = Generator::new(&ir, "eosio.token");
    print!("{}", generator.generate()?);

    Ok(())
}
