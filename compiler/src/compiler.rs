use brine_flat_schema::{Schema, StructId, Type};

use crate::{config::Config, error::FlatError, gen_cpp::generate_cpp};

fn check_struct_id(schema: &Schema, id: StructId) -> Result<(), FlatError> {
    if id.0 < schema.structs.len() {
        Ok(())
    } else {
        Err(FlatError::DecodeError(format!("dangling struct id {}", id.0)))
    }
}

fn check_type(schema: &Schema, ty: &Type) -> Result<(), FlatError> {
    match ty {
        Type::StructRef(id) => check_struct_id(schema, *id),
        Type::Vector(elem) => check_type(schema, elem),
        Type::Scalar(_) | Type::String | Type::Union => Ok(()),
    }
}

/// Every struct id in the model must index `structs`.
fn check_struct_ids(schema: &Schema) -> Result<(), FlatError> {
    if let Some(root) = schema.root_struct {
        check_struct_id(schema, root)?;
    }
    for field in schema.structs.iter().flat_map(|def| &def.fields) {
        check_type(schema, &field.type_)?;
    }
    Ok(())
}

/// Decode a resolved schema from its JSON form.
/// Returns `Err(FlatError::DecodeError)` on malformed input or when a struct
/// id does not refer to a declared struct.
pub fn decode_resolved_schema(text: &str) -> Result<Schema, FlatError> {
    let schema: Schema =
        serde_json::from_str(text).map_err(|e| FlatError::DecodeError(e.to_string()))?;
    check_struct_ids(&schema)?;
    Ok(schema)
}

/// Encode a resolved schema as pretty-printed JSON.
pub fn encode_resolved_schema(schema: &Schema) -> Result<String, FlatError> {
    serde_json::to_string_pretty(schema).map_err(|e| FlatError::EncodeError(e.to_string()))
}

/// Decode a resolved schema from JSON and generate its C++ declarations.
pub fn compile_schema_to_cpp(text: &str, config: &Config) -> Result<String, FlatError> {
    let schema = decode_resolved_schema(text)?;
    generate_cpp(&schema, config)
}
