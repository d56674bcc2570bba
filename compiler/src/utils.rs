use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_IDENTIFIER: Regex = Regex::new(r"[^A-Za-z0-9_]").unwrap();
}

/// Quotes `text` as a double-quoted string literal. Identifiers never need
/// escaping, but quotes and backslashes are escaped all the same.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Renders a doc comment as `///` lines, one per source line, each preceded
/// by `prefix`. An empty comment renders nothing.
pub fn gen_comment(doc: &str, prefix: &str) -> Vec<String> {
    doc.lines()
        .map(|line| format!("{}///{}", prefix, line))
        .collect()
}

/// Include guard token for a header named `file_name`.
pub fn include_guard(file_name: &str) -> String {
    let sanitized = NON_IDENTIFIER.replace_all(file_name, "_");
    format!("__{}_FLATBUFFERS_H__", sanitized.to_uppercase())
}

/// Joins emitted lines into a block that ends with a newline.
pub fn join_lines(lines: Vec<String>) -> String {
    let mut code = lines.join("\n");
    code.push('\n');
    code
}
