//! rn-grpc
//!
//! Library entry point for generating React Native gRPC client modules.
//!
//! - Schema model (re-exported from `rn-grpc-schema`)
//! - Generation, options, `Sink` and `GenError` (re-exported from the compiler)
//! - Helpers for JSON schema input

pub use rn_grpc_compiler::{generate_all, generate_file, GenError, GeneratorOptions, MemorySink, Sink, UnsupportedPolicy};
pub use rn_grpc_schema::{Field, FieldKind, Message, Method, SchemaFile, Service};

/// Parse a JSON array of schema files.
pub fn files_from_json(json: &str) -> Result<Vec<SchemaFile>, GenError> {
    Ok(serde_json::from_str(json)?)
}

/// Generate the module for a JSON-described schema file and return it as a string.
pub fn generate_from_json(json: &str, options: &GeneratorOptions) -> Result<String, GenError> {
    let file: SchemaFile = serde_json::from_str(json)?;
    generate_file(&file, options)
}

pub mod template {
    pub use rn_grpc_compiler::template::{render, Bindings};
}

pub mod casing {
    pub use rn_grpc_compiler::casing::{lower, upper};
}

pub mod error {
    pub use rn_grpc_compiler::error::GenError;
}
