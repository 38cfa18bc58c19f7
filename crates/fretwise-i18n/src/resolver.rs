//! Dotted-path resolution over JSON content trees

use serde_json::Value;

/// Resolve a dot-delimited key path against a JSON tree.
///
/// Returns the string leaf at the path, or `None` when any segment is
/// missing, an intermediate node is not an object, or the leaf is not a
/// string. Empty paths and paths with empty segments (leading, trailing, or
/// doubled dots) resolve to `None` rather than being treated as wildcards.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a str> {
    if path.is_empty() {
        return None;
    }

    let mut node = root;
    for segment in path.split('.') {
        if segment.is_empty() {
            return None;
        }
        node = node.as_object()?.get(segment)?;
    }
    node.as_str()
}

/// Collect the dotted paths of every string leaf under `root` into `out`.
///
/// Only object nesting is traversed; arrays and other non-object values are
/// leaves and contribute nothing unless they are strings.
pub fn collect_string_paths(root: &Value, prefix: &str, out: &mut Vec<String>) {
    let Some(map) = root.as_object() else {
        return;
    };
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::String(_) => out.push(path),
            Value::Object(_) => collect_string_paths(value, &path, out),
            _ => {}
        }
    }
}
