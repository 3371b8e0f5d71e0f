use askama::Template;

use super::enums::{name_table_key, name_table_line, synthesize_enums};
use super::props::{
    accessor_expressions, build_properties, display_format, PropertyKind, PropertySpec,
};
use crate::header::HeaderModel;

/// Template data for one enum's extern declaration block
///
/// Declares the `cppclass` under the record's qualification and each
/// value under the enum's own qualification.
#[derive(Template)]
#[template(path = "enum_decl.pyx.txt", escape = "none")]
pub struct EnumDeclTemplate<'a> {
    /// Header path spliced into the `cdef extern from` include
    pub header_file: &'a str,
    /// `Namespace::Path::Record`
    pub qualifier: &'a str,
    /// Enum type name
    pub name: &'a str,
    /// Pre-rendered `    cdef <Enum> <value>` lines
    pub value_lines: String,
}

/// Template data for a plain pass-through property
#[derive(Template)]
#[template(path = "property.pyx.txt", escape = "none")]
pub struct PropertyTemplate<'a> {
    pub prop: &'a str,
    /// Declared C++ type, used to type the setter argument
    pub type_name: &'a str,
}

/// Template data for an enum-backed property
///
/// The getter indexes the name table with the stored ordinal; the setter
/// reverse-looks-up the supplied name (raising at the binding's runtime
/// when the name is absent) and stores the resulting index.
#[derive(Template)]
#[template(path = "enum_property.pyx.txt", escape = "none")]
pub struct EnumPropertyTemplate<'a> {
    pub prop: &'a str,
    /// Owning enum type, used for the ordinal cast
    pub enum_name: &'a str,
    /// `<ENUM>_NAMES` table key
    pub table: String,
}

/// Template data for the whole binding source
#[derive(Template)]
#[template(path = "binding.pyx.txt", escape = "none")]
pub struct BindingTemplate<'a> {
    pub timestamp: &'a str,
    pub header_file: &'a str,
    pub namespace: String,
    pub record_name: &'a str,
    /// Pre-rendered enum declaration blocks, empty when there are none
    pub enum_declarations: String,
    /// Whether the wrapper class section is emitted at all
    pub has_class: bool,
    /// Pre-rendered, indented `type a, b` storage lines
    pub storage_lines: String,
    /// Pre-rendered `<ENUM>_NAMES` table lines
    pub name_tables: String,
    pub str_format: String,
    pub accessor_exprs: String,
    /// Pre-rendered property blocks, blank-line separated
    pub properties: String,
}

/// Render the binding source for a scanned header
///
/// Pure string assembly: the provenance timestamp is injected by the
/// caller so two runs over the same text are byte-identical. When no
/// properties exist the wrapper class (and the record's extern storage
/// declaration with it) is omitted and only the provenance block and
/// enum declarations are emitted.
pub fn synthesize_binding(
    model: &HeaderModel,
    header_file: &str,
    timestamp: &str,
) -> anyhow::Result<String> {
    let (enum_defs, enum_declarations) = synthesize_enums(model, header_file)?;
    let props = build_properties(model, &enum_defs);

    let mut property_blocks = Vec::with_capacity(props.len());
    for prop in &props {
        property_blocks.push(render_property(prop)?);
    }
    let properties = property_blocks.join("\n");

    let mut storage_lines = String::new();
    for group in &model.fields {
        storage_lines.push_str("\n        ");
        storage_lines.push_str(&group.type_name);
        storage_lines.push(' ');
        storage_lines.push_str(&group.variable_names.join(", "));
    }

    let name_tables = if enum_defs.is_empty() {
        String::new()
    } else {
        let lines = enum_defs
            .iter()
            .map(name_table_line)
            .collect::<Vec<_>>()
            .join("\n");
        format!("\n{lines}\n")
    };

    let rendered = BindingTemplate {
        timestamp,
        header_file,
        namespace: model.namespace_path(),
        record_name: &model.record_name,
        enum_declarations,
        has_class: !props.is_empty(),
        storage_lines,
        name_tables,
        str_format: display_format(&props),
        accessor_exprs: accessor_expressions(&props),
        properties,
    }
    .render()?;
    Ok(rendered)
}

fn render_property(prop: &PropertySpec) -> askama::Result<String> {
    match &prop.kind {
        PropertyKind::Plain => PropertyTemplate {
            prop: &prop.name,
            type_name: &prop.type_name,
        }
        .render(),
        PropertyKind::EnumBacked { enum_name } => EnumPropertyTemplate {
            prop: &prop.name,
            enum_name,
            table: name_table_key(enum_name),
        }
        .render(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_property_block() {
        let rendered = PropertyTemplate {
            prop: "n",
            type_name: "int",
        }
        .render()
        .expect("template should render");
        let expected = concat!(
            "    property n:\n",
            "        def __get__(self):\n",
            "            return self._instance.n\n",
            "        def __set__(self, int x):\n",
            "            self._instance.n = x\n",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_enum_property_block() {
        let rendered = EnumPropertyTemplate {
            prop: "k",
            enum_name: "Kind",
            table: "KIND_NAMES".to_string(),
        }
        .render()
        .expect("template should render");
        assert!(rendered.contains("return self.KIND_NAMES[<int> self._instance.k]"));
        assert!(rendered.contains("i = self.KIND_NAMES.index(x)"));
        assert!(rendered.contains("self._instance.k = <Kind>(i)"));
    }

    #[test]
    fn test_enum_decl_block() {
        let rendered = EnumDeclTemplate {
            header_file: "foo.h",
            qualifier: "a::S",
            name: "Kind",
            value_lines: "    cdef Kind X\n    cdef Kind Y".to_string(),
        }
        .render()
        .expect("template should render");
        assert!(rendered.starts_with("cdef extern from \"<foo.h>\" namespace \"a::S\":\n"));
        assert!(rendered.contains("    cdef cppclass Kind:\n        pass\n"));
        assert!(rendered.contains("namespace \"a::S::Kind\":\n    cdef Kind X\n    cdef Kind Y\n"));
    }
}
