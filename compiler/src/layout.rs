use brine_flat_schema::{Schema, StructDef, Type};

use crate::error::FlatError;

/// Padding masks only use bits 0..=3 (1, 2, 4 and 8 bytes).
pub const PADDING_MASK: u8 = 0x0F;

fn layout_error(def: &StructDef, field: &str, reason: String) -> FlatError {
    FlatError::Layout {
        struct_name: def.name.clone(),
        field:       field.to_string(),
        reason,
    }
}

/// Size and alignment of a field stored inside a fixed struct, or `None` if
/// the type cannot live in one.
fn field_size_align(ty: &Type, schema: &Schema) -> Option<(usize, usize)> {
    match ty {
        Type::Scalar(kind) => Some((kind.size_of(), kind.size_of())),
        Type::StructRef(id) => {
            let nested = schema.struct_def(*id);
            nested.fixed.then_some((nested.bytesize, nested.minalign))
        }
        Type::String | Type::Vector(_) | Type::Union => None,
    }
}

/// Checks the byte layout of a fixed struct before any code is emitted for it.
///
/// Every field must start where the previous one (plus its padding) ended,
/// at a multiple of its own alignment; the padding mask must fit in four
/// bits; the fields and padding must add up to `bytesize`; and `minalign`
/// must be a power of two covering every field and dividing `bytesize`.
pub fn verify_struct_layout(def: &StructDef, schema: &Schema) -> Result<(), FlatError> {
    let mut cursor   = 0usize;
    let mut maxalign = 1usize;

    for field in &def.fields {
        if field.padding & !PADDING_MASK != 0 {
            return Err(layout_error(def, &field.name, format!(
                "padding mask {:#04x} has bits outside {:#04x}",
                field.padding, PADDING_MASK
            )));
        }

        let Some((size, align)) = field_size_align(&field.type_, schema) else {
            return Err(layout_error(
                def,
                &field.name,
                "only scalars and fixed structs can be stored in a fixed struct".to_string(),
            ));
        };

        let offset = field.offset as usize;
        if offset != cursor {
            return Err(layout_error(def, &field.name, format!(
                "offset {} does not follow the previous field, expected {}",
                offset, cursor
            )));
        }
        if align == 0 || offset % align != 0 {
            return Err(layout_error(def, &field.name, format!(
                "offset {} is not a multiple of its alignment {}",
                offset, align
            )));
        }

        cursor += size + field.padding_bytes();
        maxalign = maxalign.max(align);
    }

    let last_field = def.fields.last().map(|f| f.name.as_str()).unwrap_or("");

    if cursor != def.bytesize {
        return Err(layout_error(def, last_field, format!(
            "fields and padding cover {} bytes but bytesize is {}",
            cursor, def.bytesize
        )));
    }
    if !def.minalign.is_power_of_two() || def.minalign < maxalign {
        return Err(layout_error(def, last_field, format!(
            "minalign {} must be a power of two no smaller than {}",
            def.minalign, maxalign
        )));
    }
    if def.bytesize % def.minalign != 0 {
        return Err(layout_error(def, last_field, format!(
            "bytesize {} is not a multiple of minalign {}",
            def.bytesize, def.minalign
        )));
    }

    Ok(())
}

/// Runs [verify_struct_layout] over every fixed struct that is about to be
/// emitted.
pub fn verify_schema_layouts(schema: &Schema) -> Result<(), FlatError> {
    for def in schema.structs.iter().filter(|d| d.fixed && !d.generated) {
        verify_struct_layout(def, schema).map_err(|err| {
            tracing::debug!(struct_name = %def.name, "struct layout rejected");
            err
        })?;
    }
    Ok(())
}
