use crate::header::HeaderModel;

use super::enums::EnumDef;
use std::collections::{HashMap, HashSet};

/// How a property's accessor pair is generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    /// Pass-through getter/setter typed with the declared C++ type
    Plain,
    /// Getter maps the stored ordinal to a name via the enum's lookup
    /// table; setter reverses the lookup (and the generated code raises
    /// when the name is absent from the table)
    EnumBacked {
        /// The owning enum type
        enum_name: String,
    },
}

/// One accessor to generate, in field declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySpec {
    pub name: String,
    pub type_name: String,
    pub kind: PropertyKind,
}

impl PropertySpec {
    pub fn is_enum_backed(&self) -> bool {
        matches!(self.kind, PropertyKind::EnumBacked { .. })
    }
}

/// Classify every `(type, variable)` pair as plain or enum-backed
///
/// Classification runs against the full set of synthesized enums, never
/// group by group: a field group may appear textually before the enum
/// group that types it. The variable-name map mirrors how the generated
/// wrapper resolves accessors, so a name claimed by an enum-typed group
/// is enum-backed wherever it appears.
pub fn build_properties(model: &HeaderModel, enums: &[EnumDef]) -> Vec<PropertySpec> {
    let enum_names: HashSet<&str> = enums.iter().map(|def| def.name.as_str()).collect();

    let mut variable_enums: HashMap<&str, &str> = HashMap::new();
    for group in &model.fields {
        if enum_names.contains(group.type_name.as_str()) {
            for name in &group.variable_names {
                variable_enums.insert(name.as_str(), group.type_name.as_str());
            }
        }
    }

    let mut props = Vec::new();
    for group in &model.fields {
        for name in &group.variable_names {
            let kind = match variable_enums.get(name.as_str()) {
                Some(enum_name) => PropertyKind::EnumBacked {
                    enum_name: (*enum_name).to_string(),
                },
                None => PropertyKind::Plain,
            };
            props.push(PropertySpec {
                name: name.clone(),
                type_name: group.type_name.clone(),
                kind,
            });
        }
    }
    props
}

/// `%`-style format body for the generated `__str__`
///
/// Enum-backed properties render quoted (`k='%s'`) to signal the value
/// is symbolic; plain properties render bare (`n=%s`).
pub fn display_format(props: &[PropertySpec]) -> String {
    props
        .iter()
        .map(|prop| {
            if prop.is_enum_backed() {
                format!("{}='%s'", prop.name)
            } else {
                format!("{}=%s", prop.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// The storage-accessor expressions feeding the display format, in the
/// same order as the fields were declared
pub fn accessor_expressions(props: &[PropertySpec]) -> String {
    props
        .iter()
        .map(|prop| format!("self.{}", prop.name))
        .collect::<Vec<_>>()
        .join(", ")
}
