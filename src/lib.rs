//! codexplain - structural documentation for Python source files.
//!
//! codexplain parses a single Python file and emits a Markdown outline of
//! its structure: classes, functions with their arguments and docstrings,
//! imports, assignments, for loops, function calls and return statements.
//! The echoed source rides along for side-by-side viewing.
//!
//! # Architecture
//!
//! tree-sitter does the parsing; everything downstream works on a small
//! mapped tree:
//!
//! - `syntax`: the closed node set the rest of the crate consumes
//! - `parser`: tree-sitter adapter, concrete syntax tree to `syntax::Node`
//! - `outline`: Markdown line generation over the mapped tree
//! - `analyze`: parse-and-report orchestration, one call per file
//! - `view`: immutable session state for interactive front ends
//! - `cli`: command-line interface

pub mod analyze;
pub mod cli;
pub mod outline;
pub mod parser;
pub mod syntax;
pub mod view;

pub use analyze::{
    analyze_bytes, analyze_path, analyze_source, analyze_upload, Analysis, AnalyzeError,
};
pub use outline::{document, REPORT_TITLE};
pub use parser::{ParseError, PythonParser};
pub use syntax::{Callee, Node};
pub use view::{error_line, ViewState, NO_INPUT_WARNING};
