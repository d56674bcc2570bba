//! The resolved model consumed by the brine-flat code generator.
//!
//! A [Schema] is produced by an upstream parser and validator; by the time it
//! reaches this crate every type reference is resolved, every struct has its
//! byte layout computed and every table field has its vtable slot assigned.
//! Nothing in the generator mutates it.
//!
//! ```
//! use brine_flat_schema::*;
//!
//! let schema = Schema {
//!     namespace: Namespace::new(["MyGame", "Sample"]),
//!     enums: vec![],
//!     structs: vec![StructDef::table("Monster", vec![
//!         FieldDef::new("hp", Type::Scalar(ScalarKind::Short), 0).with_default("100"),
//!         FieldDef::new("name", Type::String, 1),
//!     ])],
//!     root_struct: Some(StructId(0)),
//! };
//!
//! assert_eq!(schema.struct_def(StructId(0)).name, "Monster");
//! assert_eq!(schema.namespace.to_string(), "MyGame.Sample");
//! ```

pub mod schema;
pub mod types;

pub use schema::*;
pub use types::*;

/// Size in bytes of an offset stored inside a buffer (`uoffset_t`).
pub const UOFFSET_SIZE: usize = 4;

/// Size in bytes of a vtable entry (`voffset_t`).
pub const VOFFSET_SIZE: usize = 2;

/// The largest scalar a field can hold. Size-sorted emission starts here.
pub const LARGEST_SCALAR_SIZE: usize = 8;
