//! brine-flat-compiler
//!
//! This crate implements:
//!  1) Type mapping from schema types to their C++ wire, pointer and accessor spellings,
//!  2) Emitters for enums, fixed structs and tables (`gen_cpp`),
//!  3) A layout verification pass for fixed structs,
//!  4) The header assembler (`generate_cpp`) and its file-writing wrapper,
//!  5) A JSON codec for the resolved schema model, and the `FlatError` type.

pub mod error;
pub mod config;
pub mod utils;
pub mod layout;
pub mod compiler;
pub mod gen_cpp;
pub mod output;

pub use brine_flat_schema as schema;

pub use compiler::compile_schema_to_cpp;
pub use compiler::decode_resolved_schema;
pub use compiler::encode_resolved_schema;
pub use config::{Config, SizeTieBreak};
pub use error::FlatError;
pub use gen_cpp::generate_cpp;
pub use layout::{verify_schema_layouts, verify_struct_layout};
pub use output::{generate_cpp_file, wrap_header, write_cpp_header};
