use brine_flat_schema::EnumDef;

use crate::{
    config::Config,
    utils::{gen_comment, join_lines, quote},
};

/// `true` when the enum is dense enough to get a name table.
pub fn wants_name_table(enum_def: &EnumDef, config: &Config) -> bool {
    enum_def
        .sparseness()
        .is_some_and(|sparseness| sparseness < config.max_sparseness)
}

/// Generates the constants of an enum, followed by a string table and a
/// name lookup function when its values are dense enough.
pub fn gen_enum(enum_def: &EnumDef, config: &Config) -> String {
    let mut lines = gen_comment(&enum_def.doc_comment, "");
    lines.push("enum {".to_string());
    for val in &enum_def.vals {
        lines.extend(gen_comment(&val.doc_comment, "  "));
        lines.push(format!("  {}_{} = {},", enum_def.name, val.name, val.value));
    }
    lines.push("};".to_string());
    lines.push("".to_string());

    if wants_name_table(enum_def, config) {
        lines.extend(gen_enum_names(enum_def));
    } else {
        tracing::debug!(
            name = %enum_def.name,
            sparseness = ?enum_def.sparseness(),
            "enum too sparse for a name table"
        );
    }

    join_lines(lines)
}

/// Dense table covering `[min, max]`, gaps filled with empty strings, and a
/// lookup that indexes it by `e - min`. A value declared more than once keeps
/// the name it was first declared with.
fn gen_enum_names(enum_def: &EnumDef) -> Vec<String> {
    let Some(first) = enum_def.vals.first() else {
        return Vec::new();
    };

    let mut names = Vec::new();
    let mut next = first.value;
    let mut previous = None;
    for val in &enum_def.vals {
        if previous == Some(val.value) {
            continue;
        }
        previous = Some(val.value);
        while next < val.value {
            names.push(quote(""));
            next += 1;
        }
        names.push(quote(&val.name));
        next = val.value.saturating_add(1);
    }
    names.push("nullptr".to_string());

    let index = if first.value != 0 {
        format!("e - {}_{}", enum_def.name, first.name)
    } else {
        "e".to_string()
    };

    vec![
        format!("inline const char **EnumNames{}() {{", enum_def.name),
        format!("  static const char *names[] = {{ {} }};", names.join(", ")),
        "  return names;".to_string(),
        "}".to_string(),
        "".to_string(),
        format!("inline const char *EnumName{}(int e) {{", enum_def.name),
        format!("  return EnumNames{}()[{}];", enum_def.name, index),
        "}".to_string(),
        "".to_string(),
    ]
}
