use std::fmt;

/// Structural model recovered from one header file
///
/// Built incrementally by the scanner and handed, immutable, to the
/// synthesizers. An all-empty model is valid input (a header with no
/// struct definition yields a binding with only the provenance block).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderModel {
    /// Enclosing namespaces, outermost first
    pub namespaces: Vec<String>,
    /// Name of the struct whose fields are exposed; empty until a
    /// struct opener has been matched
    pub record_name: String,
    /// Field declaration lines, in declaration order
    pub fields: Vec<FieldGroup>,
    /// `enum class` captures, in declaration order
    pub enum_groups: Vec<RawEnumCapture>,
}

impl HeaderModel {
    /// The namespace path joined with the C++ qualifier separator
    pub fn namespace_path(&self) -> String {
        self.namespaces.join("::")
    }

    /// `Namespace::Path::Record` qualifier used by the extern blocks
    pub fn record_qualifier(&self) -> String {
        format!("{}::{}", self.namespace_path(), self.record_name)
    }
}

/// One field declaration line such as `int a, b;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldGroup {
    /// Declared C++ type (first whitespace token of the line)
    pub type_name: String,
    /// Declared variable names; never empty for a scanned group
    pub variable_names: Vec<String>,
}

/// An `enum class` body captured verbatim between its braces
///
/// The value list is kept unparsed here; tokenization rules differ per
/// header dialect and are applied by the enum synthesizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEnumCapture {
    pub name: String,
    pub raw_values: String,
}

/// Error raised while scanning a header's record body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A field declaration line yields zero variable names after cleaning
    MalformedField {
        /// The offending (already normalized) line
        line: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::MalformedField { line } => {
                write!(f, "malformed field declaration '{line}': no variable names")
            }
        }
    }
}

impl std::error::Error for ScanError {}
