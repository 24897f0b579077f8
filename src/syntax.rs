//! Syntax tree structures produced by the parser.
//!
//! The tree is a closed set of variants: one per construct the outline
//! reports on, plus [`Node::Other`] for everything else. `Other` nodes keep
//! their mapped children so traversal passes through them transparently.
//! Expressions that only ever appear as rendered text (assignment values,
//! loop iterables, return values) are captured as source-text slices at
//! mapping time rather than as subtrees.

use std::fmt;

/// A node of the mapped syntax tree.
///
/// Line numbers are 1-indexed, matching editor conventions.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// The file root. Always the top of a parsed tree, never nested.
    Module { body: Vec<Node> },
    /// `import a, b` - the imported module names, aliases dropped.
    Import { names: Vec<String> },
    /// `from m import a, b` - `module` is empty for `from . import x`.
    ImportFrom { module: String, names: Vec<String> },
    ClassDef {
        name: String,
        line: usize,
        docstring: Option<String>,
        body: Vec<Node>,
    },
    FunctionDef {
        name: String,
        line: usize,
        params: Vec<String>,
        docstring: Option<String>,
        body: Vec<Node>,
    },
    /// `x = 1` or a chain `x = y = 1`; annotated assignments map to `Other`.
    Assign { targets: Vec<String>, value: String },
    For {
        target: String,
        iter: String,
        body: Vec<Node>,
    },
    /// A call expression. `children` holds the mapped callee and argument
    /// subtrees so calls nested inside this one are still reached.
    Call { callee: Callee, children: Vec<Node> },
    /// `return expr`; `None` for a bare `return`.
    Return { value: Option<String> },
    /// Any construct the outline does not report on. Traversed, not printed.
    Other { children: Vec<Node> },
}

/// The callee of a call expression, kept structured so the outline owns
/// the formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Callee {
    /// `obj.method(...)` - the receiver text and the attribute name.
    Attribute { object: String, name: String },
    /// `func(...)` - a plain name.
    Name(String),
    /// Anything else (subscripts, lambdas, call results). Renders empty.
    Opaque,
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Attribute { object, name } => write!(f, "{}.{}", object, name),
            Callee::Name(name) => write!(f, "{}", name),
            Callee::Opaque => Ok(()),
        }
    }
}
