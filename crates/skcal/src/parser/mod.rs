//! Calendar template parser.
//!
//! This module turns a template string into a sequence of literal text and
//! token markers. The AST is public so the same scan can drive rendering and
//! external tooling.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
