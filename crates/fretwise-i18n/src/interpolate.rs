//! Placeholder interpolation with mandatory HTML escaping

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashMap;

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("placeholder pattern is valid"));

/// Named variables available to a template's `{{name}}` placeholders
pub type TemplateVars = HashMap<String, Value>;

/// Substitute `{{name}}` placeholders in `template` with escaped values.
///
/// Every substituted value passes through [`escape_html`]; variable values
/// can come from user input or remote content, so escaping is unconditional.
/// Placeholders whose variable is absent or null are left in the output
/// verbatim.
pub fn interpolate(template: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            match vars.get(name) {
                Some(Value::Null) | None => caps[0].to_string(),
                Some(value) => escape_html(&stringify(value)),
            }
        })
        .into_owned()
}

/// Interpolate a JSON value as a template.
///
/// Strings interpolate normally; numbers and booleans coerce to their
/// display form; null, objects, and arrays yield the empty string. Passing
/// `None` for `vars` returns string templates verbatim, with no
/// substitution attempted.
pub fn interpolate_value(template: &Value, vars: Option<&TemplateVars>) -> String {
    match template {
        Value::String(s) => match vars {
            Some(vars) => interpolate(s, vars),
            None => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Object(_) | Value::Array(_) => String::new(),
    }
}

/// Escape the characters HTML treats as markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Macro to build [`TemplateVars`] from key-value pairs
#[macro_export]
macro_rules! template_vars {
    () => {
        None::<$crate::TemplateVars>
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut vars = $crate::TemplateVars::new();
        $(
            vars.insert($key.to_string(), ::serde_json::json!($value));
        )+
        Some(vars)
    }};
}
