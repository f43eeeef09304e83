use crate::constants::{FIELD_SEPARATOR, LIST_SEPARATOR};
use std::fmt;

/// Splits a database line on `:` and checks it carries every required field.
///
/// Blank lines and lines whose field count does not exceed `last_required`
/// yield `None`. Fields are returned verbatim: no trimming, no unescaping.
///
/// # Arguments
///
/// * `line` - One line of the file, without its line terminator.
/// * `last_required` - Index of the last field the record cannot do without.
pub fn split_record(line: &str, last_required: usize) -> Option<Vec<&str>> {
    if line.trim().is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() > last_required {
        Some(fields)
    } else {
        None
    }
}

/// Returns the field at `index` if the line was long enough to hold it.
pub fn optional_field(fields: &[&str], index: usize) -> Option<String> {
    fields.get(index).map(|field| field.to_string())
}

/// Splits a comma-separated user list, dropping blank tokens and keeping order.
pub fn parse_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .filter(|token| !token.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Helpers for the `Name=value ; Name=value` rendering shared by all records.
pub(crate) struct DisplayList<'a>(pub &'a [String]);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

pub(crate) fn display_optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
