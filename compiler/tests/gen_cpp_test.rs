#![cfg(test)]

use brine_flat_compiler::{
    compile_schema_to_cpp, decode_resolved_schema, generate_cpp, verify_schema_layouts, Config,
};
use indoc::indoc;

const MONSTER_SCHEMA: &str = indoc! {r#"
    {
      "namespace": ["MyGame"],
      "enums": [
        {
          "name": "Color",
          "vals": [
            { "name": "Red",   "value": 0 },
            { "name": "Green", "value": 1 },
            { "name": "Blue",  "value": 2 }
          ]
        }
      ],
      "structs": [
        {
          "name": "Monster",
          "fixed": false,
          "fields": [
            { "name": "hp",   "type": { "scalar": "short" }, "offset": 0, "default_value": "100" },
            { "name": "name", "type": "string",              "offset": 1 }
          ]
        }
      ],
      "root_struct": 0
    }
"#};

#[test]
fn monster_end_to_end() {
    let code = compile_schema_to_cpp(MONSTER_SCHEMA, &Config::default()).expect("generation failed");

    // Three constants and a dense name table.
    assert!(code.contains("  Color_Red = 0,\n  Color_Green = 1,\n  Color_Blue = 2,\n"));
    assert!(code.contains(r#"static const char *names[] = { "Red", "Green", "Blue", nullptr };"#));
    assert!(code.contains("inline const char *EnumNameColor(int e) {\n  return EnumNamesColor()[e];\n}"));

    // Accessor: hp() defaults to 100 when absent, name() is a string handle.
    assert!(code.contains("  int16_t hp() const { return GetField<int16_t>(4, 100); }"));
    assert!(code.contains("  const fb_string *name() const { return GetPointer<const fb_string *>(6); }"));

    // Builder and one-shot constructor.
    assert!(code.contains("struct MonsterBuilder {"));
    assert!(code.contains("  void add_hp(int16_t hp) { fbb_.AddElement<int16_t>(4, hp, 100); }"));
    assert!(code.contains("  void add_name(fb_offset<fb_string> name) { fbb_.AddOffset(6, name); }"));
    assert!(code.contains(indoc! {"
        inline fb_offset<Monster> CreateMonster(fb_builder &_fbb,
            int16_t hp,
            fb_offset<fb_string> name) {
          MonsterBuilder builder_(_fbb);
          builder_.add_hp(hp);
          builder_.add_name(name);
          return builder_.Finish();
        }
    "}));

    assert!(code.contains("inline const Monster *GetMonster(const void *buf)"));
    assert!(code.contains("namespace MyGame {\n"));
    assert!(code.ends_with("}  // namespace MyGame\n"));
}

#[test]
fn generation_is_a_pure_function_of_the_model() {
    let schema = decode_resolved_schema(MONSTER_SCHEMA).unwrap();
    let first = generate_cpp(&schema, &Config::default()).unwrap();
    let again = generate_cpp(&schema, &Config::default()).unwrap();
    assert_eq!(first, again);
}

const SPARSE_SCHEMA: &str = indoc! {r#"
    {
      "enums": [
        {
          "name": "Code",
          "vals": [
            { "name": "Ok",      "value": 0 },
            { "name": "Missing", "value": 404 },
            { "name": "Broken",  "value": 500 }
          ]
        }
      ]
    }
"#};

#[test]
fn sparse_enum_is_emitted_without_lookup() {
    let code = compile_schema_to_cpp(SPARSE_SCHEMA, &Config::default()).unwrap();
    assert!(code.contains("  Code_Missing = 404,"));
    assert!(!code.contains("EnumNamesCode"));
    assert!(!code.contains("EnumNameCode"));
    // Nothing but the enum, so no forward declarations and no root accessor.
    assert!(!code.contains("struct "));
    assert!(!code.contains("GetRoot"));
}

#[test]
fn dense_enum_lookup_covers_every_value() {
    let text = indoc! {r#"
        {
          "enums": [
            {
              "name": "Dir",
              "vals": [
                { "name": "North", "value": 3 },
                { "name": "East",  "value": 4 },
                { "name": "West",  "value": 6 }
              ]
            }
          ]
        }
    "#};
    let schema = decode_resolved_schema(text).unwrap();
    let code = generate_cpp(&schema, &Config::default()).unwrap();

    // Table is indexed by value - min, so the name of value v sits at slot v - 3.
    let table_line = code
        .lines()
        .find(|line| line.contains("static const char *names[]"))
        .expect("name table missing");
    let body = table_line
        .split('{')
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap();
    let names: Vec<&str> = body.split(',').map(|s| s.trim().trim_matches('"')).collect();
    assert_eq!(names, vec!["North", "East", "", "West", "nullptr"]);

    for val in &schema.enums[0].vals {
        let index = (val.value - 3) as usize;
        assert_eq!(names[index], val.name);
    }
    assert!(code.contains("return EnumNamesDir()[e - Dir_North];"));
}

fn name_table(code: &str) -> Vec<String> {
    let table_line = code
        .lines()
        .find(|line| line.contains("static const char *names[]"))
        .expect("name table missing");
    let body = table_line
        .split('{')
        .nth(1)
        .and_then(|rest| rest.split('}').next())
        .unwrap();
    body.split(',').map(|s| s.trim().trim_matches('"').to_string()).collect()
}

#[test]
fn aliased_enum_lookup_returns_first_declared_name() {
    let text = indoc! {r#"
        {
          "enums": [
            {
              "name": "Mode",
              "vals": [
                { "name": "Off",     "value": 1 },
                { "name": "Default", "value": 1 },
                { "name": "On",      "value": 2 },
                { "name": "Auto",    "value": 4 }
              ]
            }
          ]
        }
    "#};
    let schema = decode_resolved_schema(text).unwrap();
    let code = generate_cpp(&schema, &Config::default()).unwrap();

    let names = name_table(&code);
    assert_eq!(names, vec!["Off", "On", "", "Auto", "nullptr"]);

    // Every declared value maps back to the first name it was declared with.
    for val in &schema.enums[0].vals {
        let first = schema.enums[0]
            .vals
            .iter()
            .find(|v| v.value == val.value)
            .unwrap();
        assert_eq!(names[(val.value - 1) as usize], first.name);
    }
    assert!(code.contains("return EnumNamesMode()[e - Mode_Off];"));
}

const LAYOUT_SCHEMA: &str = indoc! {r#"
    {
      "structs": [
        {
          "name": "Stat",
          "fixed": true,
          "bytesize": 16,
          "minalign": 8,
          "fields": [
            { "name": "id",    "type": { "scalar": "ushort" }, "offset": 0, "padding": 6 },
            { "name": "val",   "type": { "scalar": "long" },   "offset": 8 }
          ]
        },
        {
          "name": "Stats",
          "fixed": false,
          "sortbysize": true,
          "fields": [
            { "name": "flag",  "type": { "scalar": "bool" },   "offset": 0 },
            { "name": "count", "type": { "scalar": "int" },    "offset": 1 },
            { "name": "small", "type": { "scalar": "short" },  "offset": 2 },
            { "name": "big",   "type": { "scalar": "double" }, "offset": 3 },
            { "name": "gone",  "type": { "scalar": "int" },    "offset": 4, "deprecated": true },
            { "name": "best",  "type": { "struct_ref": 0 },    "offset": 5 }
          ]
        }
      ]
    }
"#};

#[test]
fn struct_sizes_and_offsets_hold() {
    let schema = decode_resolved_schema(LAYOUT_SCHEMA).unwrap();
    verify_schema_layouts(&schema).expect("layout should verify");

    let stat = &schema.structs[0];
    let covered: usize = stat
        .fields
        .iter()
        .map(|f| schema.inline_size(&f.type_) + f.padding_bytes())
        .sum();
    assert_eq!(covered, stat.bytesize);
    for field in &stat.fields {
        assert_eq!(field.offset as usize % schema.inline_size(&field.type_), 0);
    }

    let code = generate_cpp(&schema, &Config::default()).unwrap();
    assert!(code.contains("  uint16_t id_;\n  int16_t __padding0;\n  int32_t __padding1;\n  int64_t val_;\n"));
    assert!(code.contains("STRUCT_END(Stat, 16);"));
}

#[test]
fn sorted_table_skips_deprecated_and_orders_by_size() {
    let code = compile_schema_to_cpp(LAYOUT_SCHEMA, &Config::default()).unwrap();

    let calls: Vec<&str> = code
        .lines()
        .filter_map(|line| line.trim().strip_prefix("builder_.add_"))
        .collect();
    assert_eq!(
        calls,
        vec!["best(best);", "big(big);", "count(count);", "small(small);", "flag(flag);"]
    );

    assert!(!code.contains("gone"));
    assert!(code.contains("  const Stat *best() const { return GetStruct<const Stat *>(14); }"));
    assert!(code.contains("fbb_.EndTable(start_, 6)"));
}

#[test]
fn inconsistent_struct_is_refused() {
    let text = LAYOUT_SCHEMA.replace("\"bytesize\": 16", "\"bytesize\": 24");
    let err = compile_schema_to_cpp(&text, &Config::default()).unwrap_err();
    assert!(err.to_string().contains("Stat"));
    assert!(err.to_string().contains("bytesize is 24"));
}
