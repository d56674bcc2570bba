//! C++ header generation.
//!
//! [generate_cpp] walks the resolved schema once: enums, then forward
//! declarations for every struct and table, then fixed structs, then tables,
//! then the root accessor, all inside the schema's namespace. Each emitter is
//! a pure function of its definition and returns its own block of text;
//! definitions flagged `generated` are filtered out here, before any emitter
//! sees them.

pub mod enums;
pub mod structs;
pub mod tables;
pub mod type_map;

use brine_flat_schema::{EnumDef, Schema, StructDef};

use crate::{config::Config, error::FlatError, layout::verify_schema_layouts};

pub use enums::gen_enum;
pub use structs::gen_struct;
pub use tables::gen_table;

/// Macro aliases that keep generated code from naming the runtime directly.
const RUNTIME_ALIASES: [(&str, &str); 14] = [
    ("fb_offset", "fb::Offset"),
    ("fb_string", "fb::String"),
    ("fb_vector", "fb::Vector"),
    ("fb_table", "fb::Table"),
    ("fb_builder", "fb::FlatBufferBuilder"),
    ("fb_create_string(b, ...)", "(b).CreateString(__VA_ARGS__)"),
    ("fb_create_vector(b, ...)", "(b).CreateVector(__VA_ARGS__)"),
    ("fb_vector_size(v)", "(unsigned)(*(v)).Length()"),
    ("fb_vector_length(v)", "(unsigned)(*(v)).Length()"),
    ("fb_vector_at(v, i)", "(*(v)).Get(i)"),
    ("fb_get_buf(b)", "(b).GetBufferPointer()"),
    ("fb_get_size(b)", "(unsigned)(b).GetSize()"),
    ("fb_clear(b)", "(b).Clear()"),
    ("fb_finish(b, buf)", "(b).Finish(buf)"),
];

fn pending_enums(schema: &Schema) -> impl Iterator<Item = &EnumDef> {
    schema.enums.iter().filter(|def| {
        if def.generated {
            tracing::debug!(name = %def.name, "enum already generated, skipping");
        }
        !def.generated
    })
}

fn pending_structs(schema: &Schema) -> impl Iterator<Item = &StructDef> {
    schema.structs.iter().filter(|def| !def.generated)
}

fn gen_preamble(config: &Config) -> String {
    let mut code = String::new();
    code.push_str(&format!("#include \"{}\"\n", config.runtime_include));
    code.push_str(&format!("\nnamespace fb = {};\n\n", config.runtime_namespace));
    for (name, value) in RUNTIME_ALIASES {
        code.push_str(&format!("#define {:<25} {}\n", name, value));
    }
    code
}

/// Generates the C++ declarations for every definition of `schema` not
/// already marked `generated`.
///
/// Returns an empty string when there is nothing to declare. Fails only when
/// a fixed struct's layout is inconsistent; see
/// [verify_struct_layout](crate::layout::verify_struct_layout).
pub fn generate_cpp(schema: &Schema, config: &Config) -> Result<String, FlatError> {
    verify_schema_layouts(schema)?;

    for def in schema.structs.iter().filter(|def| def.generated) {
        tracing::debug!(name = %def.name, "struct already generated, skipping");
    }

    let enum_code: String = pending_enums(schema)
        .map(|def| gen_enum(def, config))
        .collect();

    // Structs and tables may refer to each other in any order.
    let forward_decl_code: String = pending_structs(schema)
        .map(|def| format!("struct {};\n", def.name))
        .collect();

    let mut decl_code = String::new();
    for def in pending_structs(schema).filter(|def| def.fixed) {
        decl_code.push_str(&gen_struct(def, schema));
    }
    for def in pending_structs(schema).filter(|def| !def.fixed) {
        decl_code.push_str(&gen_table(def, schema, config));
    }

    if enum_code.is_empty() && forward_decl_code.is_empty() && decl_code.is_empty() {
        tracing::debug!("no declarations to emit");
        return Ok(String::new());
    }

    let mut code = gen_preamble(config);
    if !schema.namespace.is_empty() {
        code.push('\n');
        for component in &schema.namespace.components {
            code.push_str(&format!("namespace {} {{\n", component));
        }
    }
    code.push('\n');
    code.push_str(&enum_code);
    if !forward_decl_code.is_empty() {
        code.push_str(&forward_decl_code);
        code.push('\n');
    }
    code.push_str(&decl_code);

    if let Some(root) = schema.root_struct {
        let name = &schema.struct_def(root).name;
        code.push_str(&format!(
            "inline const {} *Get{}(const void *buf) {{ return fb::GetRoot<{}>(buf); }}\n\n",
            name, name, name
        ));
    }

    for component in schema.namespace.components.iter().rev() {
        code.push_str(&format!("}}  // namespace {}\n", component));
    }

    Ok(code)
}
