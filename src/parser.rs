//! Python parsing backed by tree-sitter.
//!
//! tree-sitter owns the grammar work; this module maps its concrete syntax
//! tree into the crate's closed [`Node`] variants. Constructs the outline
//! has no line format for become [`Node::Other`] with their children mapped,
//! so traversal passes through them without printing anything.

use thiserror::Error;
use tree_sitter::{Language, Node as TsNode, Parser as TsParser};

use crate::syntax::{Callee, Node};

/// Errors surfaced by the parse step.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The grammar rejected the source, reported at the first bad node.
    #[error("invalid syntax at line {line}, column {column}")]
    InvalidSyntax { line: usize, column: usize },
    /// The Python grammar could not be loaded into the parser.
    #[error("failed to load the Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
    /// tree-sitter gave up without producing a tree.
    #[error("the parser did not produce a syntax tree")]
    TreeUnavailable,
}

/// Python parser.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    fn create_parser(&self) -> Result<TsParser, ParseError> {
        let mut parser = TsParser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }

    /// Parse source text into a mapped syntax tree.
    ///
    /// tree-sitter parses tolerantly, so a tree containing ERROR or MISSING
    /// nodes counts as a parse failure here; callers never see a partial
    /// tree.
    pub fn parse(&self, source: &str) -> Result<Node, ParseError> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(source, None)
            .ok_or(ParseError::TreeUnavailable)?;
        let root = tree.root_node();

        if let Some(bad) = first_error(root) {
            let position = bad.start_position();
            return Err(ParseError::InvalidSyntax {
                line: position.row + 1,
                column: position.column + 1,
            });
        }

        Ok(Node::Module {
            body: map_children(root, source),
        })
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the first ERROR or MISSING node, depth-first.
fn first_error<'a>(node: TsNode<'a>) -> Option<TsNode<'a>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find_map(first_error);
    found
}

/// Text of a node, straight from its source span.
fn text(node: TsNode, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Map one concrete node into the closed variant set.
fn map_node(node: TsNode, source: &str) -> Node {
    match node.kind() {
        "import_statement" => map_import(node, source),
        "import_from_statement" | "future_import_statement" => map_import_from(node, source),
        // Decorators themselves stay out of the outline; report the
        // definition they wrap.
        "decorated_definition" => match node.child_by_field_name("definition") {
            Some(definition) => map_node(definition, source),
            None => Node::Other {
                children: map_children(node, source),
            },
        },
        "class_definition" => map_class(node, source),
        "function_definition" => map_function(node, source),
        "assignment" => map_assignment(node, source),
        "for_statement" => map_for(node, source),
        "call" => map_call(node, source),
        "return_statement" => map_return(node, source),
        _ => Node::Other {
            children: map_children(node, source),
        },
    }
}

fn map_children(node: TsNode, source: &str) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| map_node(child, source))
        .collect()
}

fn map_import(node: TsNode, source: &str) -> Node {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => names.push(text(child, source)),
            // `import x as y` reports the module name, not the alias.
            "aliased_import" => {
                if let Some(name) = child.child_by_field_name("name") {
                    names.push(text(name, source));
                }
            }
            _ => {}
        }
    }
    Node::Import { names }
}

fn map_import_from(node: TsNode, source: &str) -> Node {
    let module_node = node.child_by_field_name("module_name");
    // `from . import x` keeps an empty module name; `from .pkg import x`
    // reports `pkg`. `future_import_statement` carries no module field.
    let module = match module_node {
        Some(found) => text(found, source).trim_start_matches('.').to_string(),
        None => String::from("__future__"),
    };

    let module_id = module_node.map(|found| found.id());
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if Some(child.id()) == module_id {
            continue;
        }
        match child.kind() {
            "dotted_name" => names.push(text(child, source)),
            "aliased_import" => {
                if let Some(name) = child.child_by_field_name("name") {
                    names.push(text(name, source));
                }
            }
            "wildcard_import" => names.push(String::from("*")),
            _ => {}
        }
    }
    Node::ImportFrom { module, names }
}

fn map_class(node: TsNode, source: &str) -> Node {
    let name = node
        .child_by_field_name("name")
        .map(|found| text(found, source))
        .unwrap_or_default();
    let line = node.start_position().row + 1;
    let (docstring, body) = match node.child_by_field_name("body") {
        Some(block) => (
            extract_docstring(block, source),
            map_children(block, source),
        ),
        None => (None, Vec::new()),
    };
    Node::ClassDef {
        name,
        line,
        docstring,
        body,
    }
}

fn map_function(node: TsNode, source: &str) -> Node {
    let name = node
        .child_by_field_name("name")
        .map(|found| text(found, source))
        .unwrap_or_default();
    let line = node.start_position().row + 1;
    let params = node
        .child_by_field_name("parameters")
        .map(|parameters| parameter_names(parameters, source))
        .unwrap_or_default();
    let (docstring, body) = match node.child_by_field_name("body") {
        Some(block) => (
            extract_docstring(block, source),
            map_children(block, source),
        ),
        None => (None, Vec::new()),
    };
    Node::FunctionDef {
        name,
        line,
        params,
        docstring,
        body,
    }
}

fn map_assignment(node: TsNode, source: &str) -> Node {
    // Annotated assignments (`x: int = 1`) have no line format of their own;
    // their children still get traversed.
    if node.child_by_field_name("type").is_some() {
        return Node::Other {
            children: map_children(node, source),
        };
    }

    let mut targets = Vec::new();
    let mut current = node;
    loop {
        if let Some(left) = current.child_by_field_name("left") {
            targets.push(text(left, source));
        }
        let Some(right) = current.child_by_field_name("right") else {
            return Node::Other {
                children: map_children(node, source),
            };
        };
        // `x = y = 1` nests the chain on the right in the grammar; flatten
        // it into the target list so the report reads like the source.
        if right.kind() == "assignment" && right.child_by_field_name("type").is_none() {
            current = right;
        } else {
            return Node::Assign {
                targets,
                value: text(right, source),
            };
        }
    }
}

fn map_for(node: TsNode, source: &str) -> Node {
    let target = node
        .child_by_field_name("left")
        .map(|found| text(found, source))
        .unwrap_or_default();
    let iter = node
        .child_by_field_name("right")
        .map(|found| text(found, source))
        .unwrap_or_default();
    // Only the loop body is walked; for-else clauses stay out of the outline.
    let body = node
        .child_by_field_name("body")
        .map(|block| map_children(block, source))
        .unwrap_or_default();
    Node::For { target, iter, body }
}

fn map_call(node: TsNode, source: &str) -> Node {
    let callee = match node.child_by_field_name("function") {
        Some(function) => map_callee(function, source),
        None => Callee::Opaque,
    };
    // The mapped children cover the callee and the argument list, so calls
    // nested in either are still reached.
    Node::Call {
        callee,
        children: map_children(node, source),
    }
}

fn map_callee(function: TsNode, source: &str) -> Callee {
    match function.kind() {
        "attribute" => Callee::Attribute {
            object: function
                .child_by_field_name("object")
                .map(|found| text(found, source))
                .unwrap_or_default(),
            name: function
                .child_by_field_name("attribute")
                .map(|found| text(found, source))
                .unwrap_or_default(),
        },
        "identifier" => Callee::Name(text(function, source)),
        _ => Callee::Opaque,
    }
}

fn map_return(node: TsNode, source: &str) -> Node {
    let mut cursor = node.walk();
    let value = node
        .named_children(&mut cursor)
        .find(|child| child.kind() != "comment")
        .map(|child| text(child, source));
    Node::Return { value }
}

/// Parameter names in declaration order. Stars, annotations and defaults are
/// stripped; bare `*` and `/` separators are skipped.
fn parameter_names(parameters: TsNode, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = parameters.walk();
    for parameter in parameters.named_children(&mut cursor) {
        match parameter.kind() {
            "identifier" => names.push(text(parameter, source)),
            "typed_parameter" | "list_splat_pattern" | "dictionary_splat_pattern" => {
                if let Some(identifier) = first_identifier(parameter) {
                    names.push(text(identifier, source));
                }
            }
            "default_parameter" | "typed_default_parameter" => {
                if let Some(name) = parameter.child_by_field_name("name") {
                    names.push(text(name, source));
                }
            }
            _ => {}
        }
    }
    names
}

/// First identifier inside a parameter wrapper, document order.
fn first_identifier<'a>(node: TsNode<'a>) -> Option<TsNode<'a>> {
    if node.kind() == "identifier" {
        return Some(node);
    }
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find_map(first_identifier);
    found
}

/// First-statement string literal of a class or function block, quotes
/// stripped. Comments may precede it; f-strings and bytes literals do not
/// count as docstrings.
fn extract_docstring(block: TsNode, source: &str) -> Option<String> {
    let mut cursor = block.walk();
    for statement in block.named_children(&mut cursor) {
        match statement.kind() {
            "comment" => continue,
            "expression_statement" => {
                let mut inner = statement.walk();
                let first = statement
                    .named_children(&mut inner)
                    .find(|child| child.kind() != "comment")?;
                if first.kind() != "string" {
                    return None;
                }
                return string_literal_text(&text(first, source));
            }
            _ => return None,
        }
    }
    None
}

/// Strip prefix letters and quotes from a string literal.
fn string_literal_text(literal: &str) -> Option<String> {
    let literal = literal.trim();
    let quote_at = literal.find(|c| c == '"' || c == '\'')?;
    let prefix = &literal[..quote_at];
    if prefix.chars().any(|c| matches!(c, 'f' | 'F' | 'b' | 'B')) {
        return None;
    }
    let quoted = &literal[quote_at..];
    let inner = if quoted.starts_with("\"\"\"") || quoted.starts_with("'''") {
        &quoted[3..quoted.len().saturating_sub(3)]
    } else {
        &quoted[1..quoted.len().saturating_sub(1)]
    };
    Some(inner.trim().to_string())
}
