use brine_flat_schema::{FieldDef, Schema, StructDef};

use crate::{
    gen_cpp::type_map::gen_type_get,
    utils::{gen_comment, join_lines},
};

/// Names and C types of the padding members that follow `field`, one per
/// set bit of its mask, lowest bit first. `next_id` numbers them across the
/// whole struct.
fn padding_members(field: &FieldDef, next_id: &mut usize) -> Vec<(String, String)> {
    let mut members = Vec::new();
    for bit in 0..4 {
        if field.padding & (1 << bit) != 0 {
            let bits = (1usize << bit) * 8;
            members.push((format!("int{}_t", bits), format!("__padding{}", next_id)));
            *next_id += 1;
        }
    }
    members
}

/// Generates an in-place struct with private little-endian storage, a
/// constructor taking every field, and one accessor per field.
///
/// The layout must already have passed
/// [verify_struct_layout](crate::layout::verify_struct_layout).
pub fn gen_struct(struct_def: &StructDef, schema: &Schema) -> String {
    let mut lines = gen_comment(&struct_def.doc_comment, "");
    lines.push(format!(
        "MANUALLY_ALIGNED_STRUCT({}) {} {{",
        struct_def.minalign, struct_def.name
    ));

    // Storage is private: it holds little-endian data on every platform.
    lines.push(" private:".to_string());
    let mut padding_id = 0;
    let mut initializers = Vec::new();
    for field in &struct_def.fields {
        lines.push(format!(
            "  {}{}_;",
            gen_type_get(&field.type_, schema, " ", "", " "),
            field.name
        ));
        if field.type_.is_scalar() {
            initializers.push(format!("{}_(fb::EndianScalar({}))", field.name, field.name));
        } else {
            initializers.push(format!("{}_({})", field.name, field.name));
        }
        for (c_type, member) in padding_members(field, &mut padding_id) {
            lines.push(format!("  {} {};", c_type, member));
            initializers.push(format!("{}(0)", member));
        }
    }
    lines.push("".to_string());

    let params: Vec<String> = struct_def
        .fields
        .iter()
        .map(|field| {
            format!(
                "{}{}",
                gen_type_get(&field.type_, schema, " ", "const ", " &"),
                field.name
            )
        })
        .collect();

    lines.push(" public:".to_string());
    lines.push(format!("  {}({})", struct_def.name, params.join(", ")));
    if !initializers.is_empty() {
        lines.push(format!("    : {} {{", initializers.join(", ")));
    } else {
        lines.push("  {".to_string());
    }
    lines.push("  }".to_string());

    for field in &struct_def.fields {
        lines.push("".to_string());
        lines.extend(gen_comment(&field.doc_comment, "  "));
        let value = if field.type_.is_scalar() {
            format!("fb::EndianScalar({}_)", field.name)
        } else {
            format!("{}_", field.name)
        };
        lines.push(format!(
            "  {}{}() const {{ return {}; }}",
            gen_type_get(&field.type_, schema, " ", "const ", " &"),
            field.name,
            value
        ));
    }

    lines.push("};".to_string());
    lines.push(format!(
        "STRUCT_END({}, {});",
        struct_def.name, struct_def.bytesize
    ));
    lines.push("".to_string());

    join_lines(lines)
}
