//! rn-grpc-compiler
//!
//! This crate implements:
//!  1) A two-pass template renderer (`$scalar$` and line-zipped `$*list*$` placeholders),
//!  2) Field kind translation to TypeScript type names,
//!  3) Per-message and per-method fragment rendering (nested messages flattened),
//!  4) Whole-file assembly of the React Native gRPC module (`generate_file` → `String`),
//!  5) The `Sink` seam, generator options and error types (`GenError`).

pub mod error;
pub mod casing;
pub mod template;
pub mod kinds;
pub mod options;
pub mod fragments;
pub mod assembler;
pub mod traits;

pub use assembler::generate_all;
pub use assembler::generate_file;
pub use error::GenError;
pub use options::{GeneratorOptions, UnsupportedPolicy};
pub use traits::{MemorySink, Sink};
