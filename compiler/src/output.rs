use std::{
    fs,
    path::{Path, PathBuf},
};

use brine_flat_schema::Schema;

use crate::{config::Config, error::FlatError, gen_cpp::generate_cpp, utils::include_guard};

/// Wraps generated code in the banner and include guard of a header named
/// `file_name`. Empty code still yields a guarded shell.
pub fn wrap_header(code: &str, file_name: &str) -> String {
    let guard = include_guard(file_name);
    let mut header = String::new();
    header.push_str("// automatically generated, do not modify\n\n");
    header.push_str(&format!("#ifndef {}\n", guard));
    header.push_str(&format!("#define {}\n\n", guard));
    header.push_str(code);
    header.push_str(&format!("\n#endif  // {}\n", guard));
    header
}

/// Generates the header for `schema` and writes it to `<path>/<file_name><suffix>`.
/// Returns the path written.
pub fn write_cpp_header(
    schema: &Schema,
    config: &Config,
    path: &Path,
    file_name: &str,
) -> Result<PathBuf, FlatError> {
    let code = generate_cpp(schema, config)?;
    let header = wrap_header(&code, file_name);
    let out_path = path.join(config.file_name(file_name));
    fs::write(&out_path, header)?;
    tracing::info!(path = %out_path.display(), "wrote header");
    Ok(out_path)
}

/// [write_cpp_header], reporting only whether the header was written.
pub fn generate_cpp_file(schema: &Schema, config: &Config, path: &Path, file_name: &str) -> bool {
    match write_cpp_header(schema, config, path, file_name) {
        Ok(_) => true,
        Err(err) => {
            tracing::error!(file_name, error = %err, "failed to generate header");
            false
        }
    }
}
