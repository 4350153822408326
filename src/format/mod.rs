//! Cell formatting: the default value formatter and the per-column printf path.

pub mod printf;

use crate::value::Value;

/// Pluggable `(header, value) -> cell` conversion owned by each Table.
pub type FormatFn = Box<dyn Fn(&str, &Value) -> String>;

/// Default formatter.
///
/// Order matters: values with a custom `Stringify` are honored before the
/// built-in rules, and the generic `Display` fallback comes last.
pub fn format_value(_header: &str, value: &Value) -> String {
    match value {
        Value::Nil => String::new(),
        Value::Custom(c) => c.stringify(),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        Value::F64(x) => format!("{:.4}", x),
        Value::F32(x) => format!("{:.2}", x),
        other => other.to_string(),
    }
}

pub fn default_formatter() -> FormatFn {
    Box::new(format_value)
}

/// Formats one cell. A non-empty column format wins over the table formatter.
pub(crate) fn format_cell(formatter: &FormatFn, format: &str, header: &str, value: &Value) -> String {
    if format.is_empty() {
        formatter(header, value)
    } else {
        printf::sprintf(format, value)
    }
}
