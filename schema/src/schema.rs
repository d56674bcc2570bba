use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{StructId, Type};

/// A fully resolved schema, as handed over by the parser and validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub namespace:   Namespace,
    #[serde(default)]
    pub enums:       Vec<EnumDef>,
    /// Structs and tables, in declaration order. [`StructId`]s index this list.
    #[serde(default)]
    pub structs:     Vec<StructDef>,
    #[serde(default)]
    pub root_struct: Option<StructId>,
}

impl Schema {
    /// Looks up a struct or table by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not index [`Schema::structs`]. Ids come from the
    /// resolver, so a dangling one is a bug upstream.
    pub fn struct_def(&self, id: StructId) -> &StructDef {
        &self.structs[id.0]
    }

    /// `true` if `ty` is a reference to a fixed (in-place) struct.
    pub fn is_fixed_struct(&self, ty: &Type) -> bool {
        match ty {
            Type::StructRef(id) => self.struct_def(*id).fixed,
            _ => false,
        }
    }

    /// Bytes a field of type `ty` occupies inline in a table.
    pub fn inline_size(&self, ty: &Type) -> usize {
        ty.inline_size(|id| {
            let def = self.struct_def(id);
            def.fixed.then_some(def.bytesize)
        })
    }
}

/// Ordered path of namespace segments wrapping every emitted declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace {
    pub components: Vec<String>,
}

impl Namespace {
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Namespace {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.components.join("."))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumVal {
    pub name:        String,
    pub value:       i64,
    #[serde(default)]
    pub doc_comment: String,
}

impl EnumVal {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        EnumVal {
            name:        name.into(),
            value,
            doc_comment: String::new(),
        }
    }
}

/// An enum declaration. Values are sorted ascending by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumDef {
    pub name:        String,
    pub vals:        Vec<EnumVal>,
    #[serde(default)]
    pub doc_comment: String,
    /// Already emitted by an earlier generation unit.
    #[serde(default)]
    pub generated:   bool,
}

impl EnumDef {
    pub fn new(name: impl Into<String>, vals: Vec<EnumVal>) -> Self {
        EnumDef {
            name: name.into(),
            vals,
            doc_comment: String::new(),
            generated: false,
        }
    }

    pub fn min_value(&self) -> Option<i64> {
        self.vals.first().map(|v| v.value)
    }

    pub fn max_value(&self) -> Option<i64> {
        self.vals.last().map(|v| v.value)
    }

    /// Average distance between consecutive values, `(max - min + 1) / count`
    /// in integer arithmetic. `None` for an enum without values.
    pub fn sparseness(&self) -> Option<i128> {
        let (min, max) = (self.min_value()?, self.max_value()?);
        let range = max as i128 - min as i128 + 1;
        Some(range / self.vals.len() as i128)
    }
}

/// A field of a struct or table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name:          String,
    #[serde(rename = "type")]
    pub type_:         Type,
    /// Byte offset inside a fixed struct; vtable slot number inside a table.
    pub offset:        u16,
    /// Bit mask of padding following the field in a fixed struct: bits 0..=3
    /// stand for 1, 2, 4 and 8 padding bytes.
    #[serde(default)]
    pub padding:       u8,
    #[serde(default)]
    pub deprecated:    bool,
    /// Default value literal for scalar table fields. Empty means `0`.
    #[serde(default)]
    pub default_value: String,
    #[serde(default)]
    pub doc_comment:   String,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_: Type, offset: u16) -> Self {
        FieldDef {
            name: name.into(),
            type_,
            offset,
            padding: 0,
            deprecated: false,
            default_value: String::new(),
            doc_comment: String::new(),
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc_comment = doc.into();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// The default literal, falling back to `0`.
    pub fn default_literal(&self) -> &str {
        if self.default_value.is_empty() {
            "0"
        } else {
            &self.default_value
        }
    }

    /// Number of padding bytes the mask stands for.
    pub fn padding_bytes(&self) -> usize {
        (0..4)
            .filter(|bit| self.padding & (1 << bit) != 0)
            .map(|bit| 1usize << bit)
            .sum()
    }
}

/// A struct (`fixed == true`) or a table (`fixed == false`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructDef {
    pub name:        String,
    pub fixed:       bool,
    pub fields:      Vec<FieldDef>,
    #[serde(default)]
    pub bytesize:    usize,
    #[serde(default = "default_minalign")]
    pub minalign:    usize,
    /// Emit convenience-constructor calls largest field first.
    #[serde(default)]
    pub sortbysize:  bool,
    #[serde(default)]
    pub doc_comment: String,
    /// Already emitted by an earlier generation unit.
    #[serde(default)]
    pub generated:   bool,
}

fn default_minalign() -> usize {
    1
}

impl StructDef {
    /// A table; field offsets are vtable slots.
    pub fn table(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        StructDef {
            name: name.into(),
            fixed: false,
            fields,
            bytesize: 0,
            minalign: 1,
            sortbysize: false,
            doc_comment: String::new(),
            generated: false,
        }
    }

    /// A fixed struct; field offsets are byte offsets.
    pub fn fixed(
        name: impl Into<String>,
        fields: Vec<FieldDef>,
        bytesize: usize,
        minalign: usize,
    ) -> Self {
        StructDef {
            name: name.into(),
            fixed: true,
            fields,
            bytesize,
            minalign,
            sortbysize: false,
            doc_comment: String::new(),
            generated: false,
        }
    }
}
