use crate::header::{HeaderModel, RawEnumCapture};

use super::templates::EnumDeclTemplate;
use askama::Template;

/// An enumeration group with its ordered value list
///
/// Value order is load-bearing: the index of a value in `values` is the
/// ordinal the generated accessors translate to and from, so any
/// reordering changes the wire contract of the binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}

/// Tokenization rule for an `enum class` value list
///
/// Real headers come in two dialects and nothing in the input signals
/// which one applies, so it is detected from the raw text: a comma
/// anywhere selects the comma-delimited rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumDialect {
    /// `RED, GREEN, BLUE`: split on commas, trim each token
    Comma,
    /// `RED GREEN BLUE`: split on whitespace, strip one trailing comma
    Whitespace,
}

impl EnumDialect {
    pub fn detect(raw: &str) -> Self {
        if raw.contains(',') {
            EnumDialect::Comma
        } else {
            EnumDialect::Whitespace
        }
    }
}

/// Tokenize a raw value capture and strip the trailing count sentinel
pub fn parse_enum_values(raw: &str) -> Vec<String> {
    let mut values: Vec<String> = match EnumDialect::detect(raw) {
        EnumDialect::Comma => raw
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(String::from)
            .collect(),
        EnumDialect::Whitespace => raw
            .split_whitespace()
            .map(|token| token.strip_suffix(',').unwrap_or(token).to_string())
            .collect(),
    };
    strip_count_sentinel(&mut values);
    values
}

/// Drop a trailing "count of values" marker: a bare `size`, or a
/// `last = N` assignment. Neither is a real enumerator.
fn strip_count_sentinel(values: &mut Vec<String>) {
    match values.last().map(String::as_str) {
        Some("size") => {
            values.pop();
        }
        Some(token) if is_last_assignment(token) => {
            values.pop();
        }
        _ => {}
    }
    // In the whitespace dialect `last = N` arrives as three tokens.
    if values.len() >= 3
        && values[values.len() - 3] == "last"
        && values[values.len() - 2] == "="
    {
        values.truncate(values.len() - 3);
    }
}

fn is_last_assignment(token: &str) -> bool {
    token
        .strip_prefix("last")
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

/// Key under which an enum's ordered value names are exposed
pub fn name_table_key(enum_name: &str) -> String {
    format!("{}_NAMES", enum_name.to_uppercase())
}

/// The single-line name-lookup table literal for one enum
///
/// Table index is the enum's underlying encoding: the generated getter
/// indexes this table with the stored ordinal and the setter reverses
/// the lookup with a first-match scan.
pub fn name_table_line(def: &EnumDef) -> String {
    let quoted = def
        .values
        .iter()
        .map(|value| format!("'{value}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("    {} = {}", name_table_key(&def.name), quoted)
}

/// Convert the raw enum captures into [`EnumDef`]s plus the rendered
/// extern-declaration blocks
///
/// Returns the defs in declaration order and one declarations string:
/// per-enum blocks separated by a blank line, with a trailing newline,
/// or the empty string when the header has no enums (the renderer
/// treats both uniformly).
pub fn synthesize_enums(
    model: &HeaderModel,
    header_file: &str,
) -> askama::Result<(Vec<EnumDef>, String)> {
    let qualifier = model.record_qualifier();
    let mut defs = Vec::with_capacity(model.enum_groups.len());
    let mut blocks = Vec::with_capacity(model.enum_groups.len());

    for capture in &model.enum_groups {
        let def = enum_def(capture);
        let value_lines = def
            .values
            .iter()
            .map(|value| format!("    cdef {} {}", def.name, value))
            .collect::<Vec<_>>()
            .join("\n");
        let block = EnumDeclTemplate {
            header_file,
            qualifier: &qualifier,
            name: &def.name,
            value_lines,
        }
        .render()?;
        blocks.push(block);
        defs.push(def);
    }

    let mut declarations = blocks
        .iter()
        .map(|block| block.trim_end_matches('\n'))
        .collect::<Vec<_>>()
        .join("\n\n");
    if !declarations.is_empty() {
        declarations.push('\n');
    }
    Ok((defs, declarations))
}

fn enum_def(capture: &RawEnumCapture) -> EnumDef {
    EnumDef {
        name: capture.name.trim().to_string(),
        values: parse_enum_values(&capture.raw_values),
    }
}
