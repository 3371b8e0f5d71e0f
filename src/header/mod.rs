//! # Header Module
//!
//! Recovers a structural model from a C++ header without a full grammar.
//!
//! The supported subset is deliberately small: namespace openers, one
//! top-level struct definition, simple `type name[, name...];` field
//! lines, and single-line `enum class` groups. Everything else is either
//! ignored (outside the struct) or treated as the end of the struct body.
//!
//! ## Pipeline position
//!
//! ```text
//! header text → normalize_lines → extract_model → HeaderModel
//! ```
//!
//! The model is immutable once scanned; the [`crate::generator`] module
//! consumes it to synthesize the binding source.

mod load;
mod scan;
mod types;

pub use load::*;
pub use scan::*;
pub use types::*;
