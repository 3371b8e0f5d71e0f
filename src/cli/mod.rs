//! # CLI Module
//!
//! Command-line interface for the binding generator.
//!
//! ## Usage
//!
//! ```bash
//! pyxgen state.h audio/engine.h
//! ```
//!
//! Every argument must be a `.h` header path; anything else fails the
//! whole run before any file is read. Each header is processed
//! independently and writes its `_<name>.pyx` sibling; a failure in one
//! header does not stop the others, but the process exits nonzero.

mod commands;

pub use commands::{run_cli, Cli};
