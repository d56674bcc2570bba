//! Maps schema types to the C++ spellings used by generated code.

use brine_flat_schema::{ScalarKind, Schema, Type};

/// The basic C type of a scalar, e.g. `int16_t`.
pub fn gen_type_basic(kind: ScalarKind) -> &'static str {
    kind.c_type_name()
}

/// The pointee type used for non-scalar payloads, specialized to the actual
/// struct/table types and vector element types. Unions stay untyped.
pub fn gen_type_pointer(ty: &Type, schema: &Schema) -> String {
    match ty {
        Type::String => "fb_string".to_string(),
        Type::Vector(elem) => format!("fb_vector<{}>", gen_type_wire(elem, schema, "")),
        Type::StructRef(id) => schema.struct_def(*id).name.clone(),
        Type::Union => "void".to_string(),
        // A scalar has no pointee; callers only get here through a vector of
        // scalars, which goes through gen_type_wire instead.
        Type::Scalar(kind) => gen_type_basic(*kind).to_string(),
    }
}

/// The type used to hand a value to a builder: scalars as themselves, fixed
/// structs as `const T *`, everything else as an `fb_offset<T>`.
pub fn gen_type_wire(ty: &Type, schema: &Schema, postfix: &str) -> String {
    match ty {
        Type::Scalar(kind) => format!("{}{}", gen_type_basic(*kind), postfix),
        _ if schema.is_fixed_struct(ty) => format!("const {} *", gen_type_pointer(ty, schema)),
        _ => format!("fb_offset<{}>{}", gen_type_pointer(ty, schema), postfix),
    }
}

/// The type returned by read accessors. Scalars come back by value followed
/// by `after_basic`; everything else is the pointer form wrapped in
/// `before_ptr`/`after_ptr`, so callers pick `const`, `*` or `&`.
pub fn gen_type_get(
    ty: &Type,
    schema: &Schema,
    after_basic: &str,
    before_ptr: &str,
    after_ptr: &str,
) -> String {
    match ty {
        Type::Scalar(kind) => format!("{}{}", gen_type_basic(*kind), after_basic),
        _ => format!("{}{}{}", before_ptr, gen_type_pointer(ty, schema), after_ptr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brine_flat_schema::{StructDef, StructId};

    fn schema() -> Schema {
        Schema {
            structs: vec![
                StructDef::fixed("Vec3", vec![], 12, 4),
                StructDef::table("Weapon", vec![]),
            ],
            ..Schema::default()
        }
    }

    #[test]
    fn wire_forms() {
        let schema = schema();
        let short = Type::Scalar(ScalarKind::Short);
        assert_eq!(gen_type_wire(&short, &schema, " "), "int16_t ");
        assert_eq!(gen_type_wire(&Type::String, &schema, ""), "fb_offset<fb_string>");
        assert_eq!(
            gen_type_wire(&Type::StructRef(StructId(0)), &schema, " "),
            "const Vec3 *"
        );
        assert_eq!(
            gen_type_wire(&Type::StructRef(StructId(1)), &schema, " "),
            "fb_offset<Weapon> "
        );
        assert_eq!(gen_type_wire(&Type::Union, &schema, ""), "fb_offset<void>");
    }

    #[test]
    fn pointer_forms() {
        let schema = schema();
        assert_eq!(gen_type_pointer(&Type::String, &schema), "fb_string");
        assert_eq!(
            gen_type_pointer(&Type::Vector(Box::new(Type::Scalar(ScalarKind::UChar))), &schema),
            "fb_vector<uint8_t>"
        );
        assert_eq!(
            gen_type_pointer(&Type::Vector(Box::new(Type::StructRef(StructId(1)))), &schema),
            "fb_vector<fb_offset<Weapon>>"
        );
        assert_eq!(
            gen_type_pointer(&Type::Vector(Box::new(Type::StructRef(StructId(0)))), &schema),
            "fb_vector<const Vec3 *>"
        );
        assert_eq!(gen_type_pointer(&Type::Union, &schema), "void");
    }

    #[test]
    fn accessor_forms() {
        let schema = schema();
        let int = Type::Scalar(ScalarKind::Int);
        assert_eq!(gen_type_get(&int, &schema, " ", "const ", " *"), "int32_t ");
        assert_eq!(gen_type_get(&int, &schema, "", "const ", " *"), "int32_t");
        assert_eq!(
            gen_type_get(&Type::String, &schema, " ", "const ", " *"),
            "const fb_string *"
        );
        assert_eq!(
            gen_type_get(&Type::StructRef(StructId(0)), &schema, " ", "const ", " &"),
            "const Vec3 &"
        );
        assert_eq!(
            gen_type_get(&Type::StructRef(StructId(0)), &schema, " ", "", " "),
            "Vec3 "
        );
    }
}
