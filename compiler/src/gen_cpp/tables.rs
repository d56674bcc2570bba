use std::cmp::Reverse;

use brine_flat_schema::{FieldDef, Schema, StructDef, VOFFSET_SIZE};

use crate::{
    config::{Config, SizeTieBreak},
    gen_cpp::type_map::{gen_type_get, gen_type_wire},
    utils::{gen_comment, join_lines},
};

/// Byte offset of a field's entry in its table's vtable. The first two
/// entries hold the vtable size and the object size.
pub fn field_voffset(slot: u16) -> usize {
    (slot as usize + 2) * VOFFSET_SIZE
}

/// Fields of `struct_def` in the order the convenience constructor adds them.
///
/// Deprecated fields are skipped. With `sortbysize` the largest fields come
/// first so the builder inserts less alignment padding; equal-sized fields
/// are ordered by `config`'s tie-break. Slots are unaffected either way.
pub fn construction_order<'a>(
    struct_def: &'a StructDef,
    schema: &Schema,
    config: &Config,
) -> Vec<&'a FieldDef> {
    let mut fields: Vec<&FieldDef> = struct_def.fields.iter().filter(|f| !f.deprecated).collect();
    if struct_def.sortbysize {
        if config.size_tie_break == SizeTieBreak::ReverseDeclarationOrder {
            fields.reverse();
        }
        fields.sort_by_key(|field| Reverse(schema.inline_size(&field.type_)));
    }
    fields
}

/// Generates the accessor struct, the builder and the `Create` function for
/// a table.
pub fn gen_table(struct_def: &StructDef, schema: &Schema, config: &Config) -> String {
    let mut lines = gen_table_accessor(struct_def, schema);
    lines.extend(gen_table_builder(struct_def, schema));
    lines.extend(gen_table_create(struct_def, schema, config));
    join_lines(lines)
}

/// Read accessors of the form
/// `type name() const { return GetField<type>(voffset, default); }`.
fn gen_table_accessor(struct_def: &StructDef, schema: &Schema) -> Vec<String> {
    let mut lines = gen_comment(&struct_def.doc_comment, "");
    lines.push(format!("struct {} : private fb_table {{", struct_def.name));
    for field in struct_def.fields.iter().filter(|f| !f.deprecated) {
        lines.extend(gen_comment(&field.doc_comment, "  "));
        let return_type = gen_type_get(&field.type_, schema, " ", "const ", " *");
        let value_type = gen_type_get(&field.type_, schema, "", "const ", " *");
        let voffset = field_voffset(field.offset);
        let read = if field.type_.is_scalar() {
            format!("GetField<{}>({}, {})", value_type, voffset, field.default_literal())
        } else if schema.is_fixed_struct(&field.type_) {
            format!("GetStruct<{}>({})", value_type, voffset)
        } else {
            format!("GetPointer<{}>({})", value_type, voffset)
        };
        lines.push(format!(
            "  {}{}() const {{ return {}; }}",
            return_type, field.name, read
        ));
    }
    lines.push("};".to_string());
    lines.push("".to_string());
    lines
}

/// Builder with `add_<field>` methods and a `Finish` that closes the table.
fn gen_table_builder(struct_def: &StructDef, schema: &Schema) -> Vec<String> {
    let name = &struct_def.name;
    let mut lines = vec![
        format!("struct {}Builder {{", name),
        "  fb_builder &fbb_;".to_string(),
        "  fb::uoffset_t start_;".to_string(),
    ];
    for field in struct_def.fields.iter().filter(|f| !f.deprecated) {
        let voffset = field_voffset(field.offset);
        let add = if field.type_.is_scalar() {
            format!(
                "AddElement<{}>({}, {}, {})",
                gen_type_wire(&field.type_, schema, ""),
                voffset,
                field.name,
                field.default_literal()
            )
        } else if schema.is_fixed_struct(&field.type_) {
            format!("AddStruct({}, {})", voffset, field.name)
        } else {
            format!("AddOffset({}, {})", voffset, field.name)
        };
        lines.push(format!(
            "  void add_{}({}{}) {{ fbb_.{}; }}",
            field.name,
            gen_type_wire(&field.type_, schema, " "),
            field.name,
            add
        ));
    }
    lines.push(format!(
        "  {}Builder(fb_builder &_fbb) : fbb_(_fbb) {{ start_ = fbb_.StartTable(); }}",
        name
    ));
    // The slot count includes deprecated fields so the vtable keeps its size.
    lines.push(format!(
        "  fb_offset<{}> Finish() {{ return fb_offset<{}>(fbb_.EndTable(start_, {})); }}",
        name,
        name,
        struct_def.fields.len()
    ));
    lines.push("};".to_string());
    lines.push("".to_string());
    lines
}

/// `Create<Table>` building the whole table in one call.
fn gen_table_create(struct_def: &StructDef, schema: &Schema, config: &Config) -> Vec<String> {
    let name = &struct_def.name;
    let mut params = vec!["fb_builder &_fbb".to_string()];
    params.extend(
        struct_def
            .fields
            .iter()
            .filter(|f| !f.deprecated)
            .map(|field| format!("{}{}", gen_type_wire(&field.type_, schema, " "), field.name)),
    );

    let mut lines = vec![
        format!(
            "inline fb_offset<{}> Create{}({}) {{",
            name,
            name,
            params.join(",\n    ")
        ),
        format!("  {}Builder builder_(_fbb);", name),
    ];
    for field in construction_order(struct_def, schema, config) {
        lines.push(format!("  builder_.add_{}({});", field.name, field.name));
    }
    lines.push("  return builder_.Finish();".to_string());
    lines.push("}".to_string());
    lines.push("".to_string());
    lines
}
