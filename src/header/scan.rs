use super::load::normalize_lines;
use super::types::{FieldGroup, HeaderModel, RawEnumCapture, ScanError};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static NAMESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^namespace (\w+)").expect("namespace regex should be valid"));

static STRUCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^struct (\w+)").expect("struct regex should be valid"));

static ENUM_CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^enum class (\w+) \{([^}]+)\}").expect("enum class regex should be valid")
});

/// Scanner mode: outside any struct, or collecting a struct body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InRecord,
}

/// Scan header text into a [`HeaderModel`]
///
/// Two-mode line scan over the normalized declaration lines:
///
/// - `Searching`: namespace openers accumulate, the first struct opener
///   switches mode, anything else is ignored (headers carry prose and
///   forward declarations before the struct).
/// - `InRecord`: single-line `enum class` definitions are captured raw;
///   a structural terminator ends the scan; every other line must be a
///   field declaration.
///
/// Exhausted input returns whatever accumulated, including the empty
/// model when no struct opener was ever seen.
pub fn extract_model(text: &str) -> Result<HeaderModel, ScanError> {
    let mut model = HeaderModel::default();
    let mut state = ScanState::Searching;

    for line in normalize_lines(text) {
        match state {
            ScanState::Searching => {
                if let Some(caps) = NAMESPACE_RE.captures(line) {
                    model.namespaces.push(caps[1].to_string());
                } else if let Some(caps) = STRUCT_RE.captures(line) {
                    model.record_name = caps[1].to_string();
                    state = ScanState::InRecord;
                }
            }
            ScanState::InRecord => {
                // Must run before the terminator check: the capture line
                // itself contains braces.
                if let Some(caps) = ENUM_CLASS_RE.captures(line) {
                    model.enum_groups.push(RawEnumCapture {
                        name: caps[1].to_string(),
                        raw_values: caps[2].to_string(),
                    });
                    continue;
                }
                if is_body_terminator(line) {
                    break;
                }
                model.fields.push(parse_field_line(line)?);
            }
        }
    }

    Ok(model)
}

/// True when a line means "the record body is finished"
///
/// Method definitions and constructors bring parentheses or braces,
/// `};` closes the struct, and nested `class`/`template` introducers
/// start constructs outside the supported subset.
fn is_body_terminator(line: &str) -> bool {
    line.contains('{')
        || line.contains('(')
        || line.starts_with("};")
        || line.starts_with("class")
        || line.starts_with("template")
}

/// Parse one `type name[, name...];` declaration line
///
/// Tokens are whitespace-split; a single trailing `;` or `,` is removed
/// per token. An `=` and exactly the one token following it are dropped,
/// so a default value spanning several tokens leaks its tail into the
/// variable names. That single-token skip matches the headers this tool
/// has always consumed and is covered by a regression test; widening it
/// would silently change generated bindings.
fn parse_field_line(line: &str) -> Result<FieldGroup, ScanError> {
    let mut tokens = line.split_whitespace();
    let type_name = match tokens.next() {
        Some(first) => first.to_string(),
        None => {
            return Err(ScanError::MalformedField {
                line: line.to_string(),
            })
        }
    };

    let mut variable_names = Vec::new();
    let mut was_equal = false;
    for raw in tokens {
        let token = raw
            .strip_suffix(';')
            .or_else(|| raw.strip_suffix(','))
            .unwrap_or(raw);
        if was_equal {
            warn!(line, token, "skipped a single default-value token after '='");
        } else if token != "=" {
            variable_names.push(token.to_string());
        }
        was_equal = token == "=";
    }

    if variable_names.is_empty() {
        return Err(ScanError::MalformedField {
            line: line.to_string(),
        });
    }
    Ok(FieldGroup {
        type_name,
        variable_names,
    })
}
