//! # Generator Module
//!
//! Turns a scanned [`crate::header::HeaderModel`] into the final `.pyx`
//! binding source.
//!
//! ## Architecture
//!
//! The generator uses Askama templates to produce the binding:
//!
//! ```text
//! HeaderModel → Enum Synthesizer ┐
//!             → Property Synthesizer ┴→ Template Rendering → .pyx text
//! ```
//!
//! 1. **Enum Synthesizer** (`enums`) - tokenizes each raw enum capture,
//!    strips count sentinels, and renders the extern declaration blocks
//!    plus the `<ENUM>_NAMES` lookup tables
//! 2. **Property Synthesizer** (`props`) - classifies every field as
//!    plain or enum-backed and derives the display format
//! 3. **Template Rendering** (`templates`) - splices everything into
//!    the fixed-slot templates under `templates/`
//! 4. **Output** (`project`) - derives the `_<name>.pyx` sibling path
//!    and writes the artifact
//!
//! Rendering is pure: the only nondeterminism in an artifact is the
//! provenance timestamp, which is injected by the output layer.

mod enums;
mod project;
mod props;
mod templates;

pub use enums::*;
pub use project::*;
pub use props::*;
pub use templates::*;
