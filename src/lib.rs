//! # pyxgen
//!
//! **pyxgen** generates Cython `.pyx` binding sources from a restricted
//! subset of C++ headers: enclosing namespaces, one struct definition,
//! and the `enum class` groups nested inside it. Build pipelines run it
//! whenever a native header changes instead of hand-maintaining accessor
//! boilerplate.
//!
//! ## Architecture
//!
//! The library is organized into three modules:
//!
//! - **[`header`]** - line-oriented header scanning into a [`HeaderModel`]
//! - **[`generator`]** - enum/property synthesis and template rendering
//! - **[`cli`]** - the batch command-line front end
//!
//! ## Generation Flow
//!
//! ```text
//! pyxgen state.h
//!   → header::load_header        read + normalize + scan
//!   → generator::synthesize_binding
//!       enums:  RawEnumCapture → EnumDef + extern blocks + name tables
//!       props:  FieldGroup → plain / enum-backed accessor specs
//!       render: askama templates → .pyx text
//!   → generator::generate_binding  write dir/_state.pyx
//! ```
//!
//! Each run is a pure function of the header text; nothing is shared
//! between runs and independent headers can be processed concurrently by
//! independent invocations. The only nondeterminism in an artifact is
//! the provenance timestamp line.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pyxgen::{extract_model, synthesize_binding};
//!
//! # fn main() -> anyhow::Result<()> {
//! let text = std::fs::read_to_string("state.h")?;
//! let model = extract_model(&text)?;
//! let pyx = synthesize_binding(&model, "state.h", "2026-08-05T00:00:00Z")?;
//! print!("{pyx}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Supported header subset
//!
//! The scanner is deliberately not a C++ parser. It recognizes namespace
//! openers, one struct opener, `type name[, name...];` field lines, and
//! single-line `enum class Name { ... };` groups. The first line inside
//! the struct carrying a brace, a parenthesis, a `};`, or a nested
//! `class`/`template` introducer ends the scan. Constructs outside the
//! subset are not errors; they are simply never seen by the model.

pub mod cli;
pub mod generator;
pub mod header;

pub use generator::{
    generate_binding, output_path_for, synthesize_binding, EnumDef, EnumDialect, PropertyKind,
    PropertySpec,
};
pub use header::{
    extract_model, load_header, normalize_lines, FieldGroup, HeaderModel, RawEnumCapture,
    ScanError,
};
