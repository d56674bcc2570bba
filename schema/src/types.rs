use serde::{Deserialize, Serialize};

use crate::UOFFSET_SIZE;

/// The scalar kinds a field can carry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// Discriminant of a union field.
    UType,
    Bool,
    Char,
    UChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    Float,
    Double,
}

impl ScalarKind {
    /// Size of the scalar in bytes. Scalars are naturally aligned, so this is
    /// also their alignment.
    pub fn size_of(self) -> usize {
        match self {
            ScalarKind::UType
            | ScalarKind::Bool
            | ScalarKind::Char
            | ScalarKind::UChar => 1,
            ScalarKind::Short | ScalarKind::UShort => 2,
            ScalarKind::Int | ScalarKind::UInt | ScalarKind::Float => 4,
            ScalarKind::Long | ScalarKind::ULong | ScalarKind::Double => 8,
        }
    }

    /// The fixed-width C type used to store this scalar.
    pub fn c_type_name(self) -> &'static str {
        match self {
            ScalarKind::UType => "uint8_t",
            ScalarKind::Bool => "uint8_t",
            ScalarKind::Char => "int8_t",
            ScalarKind::UChar => "uint8_t",
            ScalarKind::Short => "int16_t",
            ScalarKind::UShort => "uint16_t",
            ScalarKind::Int => "int32_t",
            ScalarKind::UInt => "uint32_t",
            ScalarKind::Long => "int64_t",
            ScalarKind::ULong => "uint64_t",
            ScalarKind::Float => "float",
            ScalarKind::Double => "double",
        }
    }
}

/// Index of a struct or table inside [`Schema::structs`](crate::Schema::structs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructId(pub usize);

/// The type of a field.
///
/// Whether a [`Type::StructRef`] names a fixed struct or a table is decided by
/// the referenced definition, not by the reference itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Type {
    Scalar(ScalarKind),
    String,
    Vector(Box<Type>),
    StructRef(StructId),
    Union,
}

impl Type {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Type::Scalar(_))
    }

    /// Element type of a vector, `None` for anything else.
    pub fn element(&self) -> Option<&Type> {
        match self {
            Type::Vector(elem) => Some(elem),
            _ => None,
        }
    }

    /// Number of bytes a value of this type occupies when stored directly in
    /// a table slot. Everything that is not a scalar or a fixed struct is
    /// stored as a single `uoffset_t`. Fixed struct sizes come from the
    /// schema, so the caller supplies `struct_size` for `StructRef`s that
    /// point at fixed structs.
    pub fn inline_size(&self, struct_size: impl Fn(StructId) -> Option<usize>) -> usize {
        match self {
            Type::Scalar(kind) => kind.size_of(),
            Type::StructRef(id) => struct_size(*id).unwrap_or(UOFFSET_SIZE),
            Type::String | Type::Vector(_) | Type::Union => UOFFSET_SIZE,
        }
    }
}
