use pyxgen::{extract_model, synthesize_binding, EnumDef, PropertyKind};

const TIMESTAMP: &str = "2026-08-05T00:00:00.000000Z";

fn nested_header() -> &'static str {
    "namespace A {\n\
     namespace B {\n\
     struct S {\n\
     enum class Kind { X, Y, size };\n\
     Kind k;\n\
     int n;\n\
     };\n\
     }\n\
     }\n"
}

#[test]
fn test_end_to_end_nested_namespaces() {
    let model = extract_model(nested_header()).expect("header should scan");
    let pyx = synthesize_binding(&model, "state.h", TIMESTAMP).expect("binding should render");

    let expected = concat!(
        "# Automatically generated on 2026-08-05T00:00:00.000000Z\n",
        "# by pyxgen (https://github.com/pyxgen/pyxgen)\n",
        "cdef extern from \"<state.h>\" namespace \"A::B::S\":\n",
        "    cdef cppclass Kind:\n",
        "        pass\n",
        "\n",
        "cdef extern from \"<state.h>\" namespace \"A::B::S::Kind\":\n",
        "    cdef Kind X\n",
        "    cdef Kind Y\n",
        "\n",
        "cdef extern from \"<state.h>\" namespace \"A::B\":\n",
        "    struct S:\n",
        "        Kind k\n",
        "        int n\n",
        "\n",
        "cdef class _S(_Wrapper):\n",
        "    cdef S _instance;\n",
        "\n",
        "    KIND_NAMES = 'X', 'Y'\n",
        "\n",
        "    def __cinit__(self):\n",
        "        clearStruct(self._instance)\n",
        "\n",
        "    def clear(self):\n",
        "        clearStruct(self._instance)\n",
        "\n",
        "    def __str__(self):\n",
        "        return \"(k='%s', n=%s)\" % (\n",
        "            self.k, self.n)\n",
        "\n",
        "    property k:\n",
        "        def __get__(self):\n",
        "            return self.KIND_NAMES[<int> self._instance.k]\n",
        "        def __set__(self, string x):\n",
        "            cdef uint8_t i\n",
        "            i = self.KIND_NAMES.index(x)\n",
        "            self._instance.k = <Kind>(i)\n",
        "\n",
        "    property n:\n",
        "        def __get__(self):\n",
        "            return self._instance.n\n",
        "        def __set__(self, int x):\n",
        "            self._instance.n = x\n",
    );
    assert_eq!(pyx, expected);
}

#[test]
fn test_synthesis_is_deterministic() {
    let model = extract_model(nested_header()).expect("scan");
    let first = synthesize_binding(&model, "state.h", TIMESTAMP).expect("render");
    let second = synthesize_binding(&model, "state.h", TIMESTAMP).expect("render");
    assert_eq!(first, second);
}

#[test]
fn test_accessor_count_matches_declared_variables() {
    let text = "struct S {\nint a, b;\nfloat c;\nint d;\n};\n";
    let model = extract_model(text).expect("scan");
    let pyx = synthesize_binding(&model, "s.h", TIMESTAMP).expect("render");
    assert_eq!(pyx.matches("    property ").count(), 4);
    // Declaration order survives into the artifact.
    let order: Vec<usize> = ["property a:", "property b:", "property c:", "property d:"]
        .iter()
        .map(|needle| pyx.find(needle).expect("property should be present"))
        .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_name_table_index_matches_enum_def_order() {
    let text = "struct S {\nenum class Color { RED, GREEN, BLUE, size };\nColor c;\n};\n";
    let model = extract_model(text).expect("scan");

    let defs: Vec<EnumDef> = model
        .enum_groups
        .iter()
        .map(|g| EnumDef {
            name: g.name.trim().to_string(),
            values: pyxgen::generator::parse_enum_values(&g.raw_values),
        })
        .collect();
    assert_eq!(defs[0].values, vec!["RED", "GREEN", "BLUE"]);

    let pyx = synthesize_binding(&model, "s.h", TIMESTAMP).expect("render");
    assert!(pyx.contains("    COLOR_NAMES = 'RED', 'GREEN', 'BLUE'\n"));
}

#[test]
fn test_enum_backed_field_is_quoted_in_display() {
    let model = extract_model(nested_header()).expect("scan");
    let props = pyxgen::generator::build_properties(
        &model,
        &[EnumDef {
            name: "Kind".to_string(),
            values: vec!["X".to_string(), "Y".to_string()],
        }],
    );
    assert!(matches!(props[0].kind, PropertyKind::EnumBacked { .. }));
    assert!(matches!(props[1].kind, PropertyKind::Plain));

    let pyx = synthesize_binding(&model, "s.h", TIMESTAMP).expect("render");
    assert!(pyx.contains("\"(k='%s', n=%s)\""));
}

#[test]
fn test_no_properties_emits_declarations_only() {
    let text = "struct S {\nenum class Kind { X, Y };\n};\n";
    let model = extract_model(text).expect("scan");
    let pyx = synthesize_binding(&model, "s.h", TIMESTAMP).expect("render");

    assert!(pyx.contains("cdef cppclass Kind"));
    assert!(!pyx.contains("cdef class _S"));
    assert!(!pyx.contains("struct S:"));
    assert!(!pyx.contains("KIND_NAMES"));
}

#[test]
fn test_generate_binding_writes_next_to_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let header = dir.path().join("state.h");
    std::fs::write(&header, nested_header()).expect("write header");

    let out = pyxgen::generate_binding(&header).expect("generate");
    assert_eq!(out, dir.path().join("_state.pyx"));
    let content = std::fs::read_to_string(out).expect("read binding");
    assert!(content.contains("cdef class _S(_Wrapper):"));
}

#[test]
fn test_empty_model_emits_provenance_only() {
    let model = extract_model("#pragma once\n").expect("scan");
    let pyx = synthesize_binding(&model, "s.h", TIMESTAMP).expect("render");
    assert_eq!(
        pyx,
        concat!(
            "# Automatically generated on 2026-08-05T00:00:00.000000Z\n",
            "# by pyxgen (https://github.com/pyxgen/pyxgen)\n",
        )
    );
}
