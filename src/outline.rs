//! Markdown outline generation.
//!
//! Walks a mapped [`Node`] tree and emits one Markdown line per documented
//! construct. Nesting depth is threaded through the walk explicitly; class,
//! function and for-loop bodies indent by one step, while import lines always
//! sit at the left margin.

use crate::syntax::Node;

/// Markdown heading that opens every report. The trailing newline leaves a
/// blank line after the title once the lines are joined.
pub const REPORT_TITLE: &str = "# 📘 Code Analysis and Auto Documentation\n";

/// Indentation unit for one nesting level.
const INDENT: &str = "  ";

/// Walk a mapped module and build the outline, one Markdown line per entry.
pub fn document(module: &Node) -> Vec<String> {
    let mut lines = vec![REPORT_TITLE.to_string()];
    visit(module, 0, &mut lines);
    lines
}

fn visit(node: &Node, depth: usize, lines: &mut Vec<String>) {
    let prefix = INDENT.repeat(depth);
    match node {
        Node::Module { body } => {
            for child in body {
                visit(child, depth, lines);
            }
        }
        Node::Import { names } => {
            lines.push(format!("- 📦 Import: `{}`", names.join(", ")));
        }
        Node::ImportFrom { module, names } => {
            lines.push(format!(
                "- 📦 From `{}` import `{}`",
                module,
                names.join(", ")
            ));
        }
        Node::ClassDef {
            name,
            line,
            docstring,
            body,
        } => {
            lines.push(format!("{}## 🧱 Class: `{}` (Line {})", prefix, name, line));
            lines.push(format!(
                "{}- 📄 Docstring: {}",
                prefix,
                docstring_or(docstring, "No class docstring found.")
            ));
            for child in body {
                visit(child, depth + 1, lines);
            }
        }
        Node::FunctionDef {
            name,
            line,
            params,
            docstring,
            body,
        } => {
            lines.push(format!(
                "{}### 🔧 Function: `{}` (Line {})",
                prefix, name, line
            ));
            let arguments = if params.is_empty() {
                String::from("None")
            } else {
                params.join(", ")
            };
            lines.push(format!("{}- 🧩 Arguments: {}", prefix, arguments));
            lines.push(format!(
                "{}- 📄 Docstring: {}",
                prefix,
                docstring_or(docstring, "No function docstring found.")
            ));
            for child in body {
                visit(child, depth + 1, lines);
            }
        }
        Node::Assign { targets, value } => {
            lines.push(format!(
                "{}- 📝 Assignment: `{} = {}`",
                prefix,
                targets.join(", "),
                value
            ));
        }
        Node::For { target, iter, body } => {
            lines.push(format!(
                "{}- 🔁 For loop: `for {} in {}`",
                prefix, target, iter
            ));
            for child in body {
                visit(child, depth + 1, lines);
            }
        }
        Node::Call { callee, children } => {
            lines.push(format!("{}- 📞 Function call: `{}`", prefix, callee));
            // Arguments stay at the caller's depth, so a nested call lands
            // directly under the line of the call that wraps it.
            for child in children {
                visit(child, depth, lines);
            }
        }
        Node::Return { value } => {
            lines.push(format!(
                "{}- 🔙 Return statement: `{}`",
                prefix,
                value.as_deref().unwrap_or("?")
            ));
        }
        Node::Other { children } => {
            for child in children {
                visit(child, depth, lines);
            }
        }
    }
}

/// Docstring text, or the fallback when it is absent or empty.
fn docstring_or<'a>(docstring: &'a Option<String>, fallback: &'a str) -> &'a str {
    match docstring.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Callee;

    #[test]
    fn test_empty_module_is_title_only() {
        let lines = document(&Node::Module { body: Vec::new() });
        assert_eq!(lines, vec![REPORT_TITLE.to_string()]);
    }

    #[test]
    fn test_import_lines() {
        let module = Node::Module {
            body: vec![
                Node::Import {
                    names: vec!["os".to_string(), "sys".to_string()],
                },
                Node::ImportFrom {
                    module: "typing".to_string(),
                    names: vec!["List".to_string()],
                },
            ],
        };
        let lines = document(&module);
        assert_eq!(lines[1], "- 📦 Import: `os, sys`");
        assert_eq!(lines[2], "- 📦 From `typing` import `List`");
    }

    #[test]
    fn test_class_with_nested_function() {
        let module = Node::Module {
            body: vec![Node::ClassDef {
                name: "Greeter".to_string(),
                line: 1,
                docstring: Some("Says hello.".to_string()),
                body: vec![Node::FunctionDef {
                    name: "greet".to_string(),
                    line: 3,
                    params: vec!["self".to_string(), "name".to_string()],
                    docstring: None,
                    body: vec![Node::Return {
                        value: Some("name".to_string()),
                    }],
                }],
            }],
        };
        let lines = document(&module);

        assert_eq!(lines[1], "## 🧱 Class: `Greeter` (Line 1)");
        assert_eq!(lines[2], "- 📄 Docstring: Says hello.");
        assert_eq!(lines[3], "  ### 🔧 Function: `greet` (Line 3)");
        assert_eq!(lines[4], "  - 🧩 Arguments: self, name");
        assert_eq!(lines[5], "  - 📄 Docstring: No function docstring found.");
        assert_eq!(lines[6], "    - 🔙 Return statement: `name`");
    }

    #[test]
    fn test_empty_docstring_falls_back() {
        let module = Node::Module {
            body: vec![Node::ClassDef {
                name: "Blank".to_string(),
                line: 1,
                docstring: Some(String::new()),
                body: Vec::new(),
            }],
        };
        let lines = document(&module);
        assert_eq!(lines[2], "- 📄 Docstring: No class docstring found.");
    }

    #[test]
    fn test_function_without_parameters() {
        let module = Node::Module {
            body: vec![Node::FunctionDef {
                name: "main".to_string(),
                line: 1,
                params: Vec::new(),
                docstring: None,
                body: Vec::new(),
            }],
        };
        let lines = document(&module);
        assert_eq!(lines[2], "- 🧩 Arguments: None");
    }

    #[test]
    fn test_imports_ignore_depth() {
        let module = Node::Module {
            body: vec![Node::FunctionDef {
                name: "lazy".to_string(),
                line: 1,
                params: Vec::new(),
                docstring: None,
                body: vec![Node::Import {
                    names: vec!["json".to_string()],
                }],
            }],
        };
        let lines = document(&module);
        assert_eq!(
            lines[4], "- 📦 Import: `json`",
            "import lines stay at the left margin even inside a function"
        );
    }

    #[test]
    fn test_call_children_keep_depth() {
        let module = Node::Module {
            body: vec![Node::For {
                target: "item".to_string(),
                iter: "items".to_string(),
                body: vec![Node::Call {
                    callee: Callee::Name("print".to_string()),
                    children: vec![Node::Call {
                        callee: Callee::Name("len".to_string()),
                        children: Vec::new(),
                    }],
                }],
            }],
        };
        let lines = document(&module);
        assert_eq!(lines[1], "- 🔁 For loop: `for item in items`");
        assert_eq!(lines[2], "  - 📞 Function call: `print`");
        assert_eq!(
            lines[3], "  - 📞 Function call: `len`",
            "nested call sits at the same depth as its wrapper"
        );
    }

    #[test]
    fn test_assignment_and_chain() {
        let module = Node::Module {
            body: vec![
                Node::Assign {
                    targets: vec!["x".to_string()],
                    value: "1".to_string(),
                },
                Node::Assign {
                    targets: vec!["x".to_string(), "y".to_string()],
                    value: "0".to_string(),
                },
            ],
        };
        let lines = document(&module);
        assert_eq!(lines[1], "- 📝 Assignment: `x = 1`");
        assert_eq!(lines[2], "- 📝 Assignment: `x, y = 0`");
    }

    #[test]
    fn test_bare_return_placeholder() {
        let module = Node::Module {
            body: vec![Node::FunctionDef {
                name: "stop".to_string(),
                line: 1,
                params: Vec::new(),
                docstring: None,
                body: vec![Node::Return { value: None }],
            }],
        };
        let lines = document(&module);
        assert_eq!(lines[4], "  - 🔙 Return statement: `?`");
    }

    #[test]
    fn test_three_levels_of_indent() {
        let module = Node::Module {
            body: vec![Node::ClassDef {
                name: "C".to_string(),
                line: 1,
                docstring: None,
                body: vec![Node::FunctionDef {
                    name: "m".to_string(),
                    line: 2,
                    params: Vec::new(),
                    docstring: None,
                    body: vec![Node::For {
                        target: "i".to_string(),
                        iter: "range(3)".to_string(),
                        body: vec![Node::Assign {
                            targets: vec!["total".to_string()],
                            value: "i".to_string(),
                        }],
                    }],
                }],
            }],
        };
        let lines = document(&module);
        let assignment = lines.last().map(String::as_str);
        assert_eq!(assignment, Some("      - 📝 Assignment: `total = i`"));
    }

    #[test]
    fn test_other_nodes_are_transparent() {
        let module = Node::Module {
            body: vec![Node::Other {
                children: vec![Node::Other {
                    children: vec![Node::Call {
                        callee: Callee::Name("setup".to_string()),
                        children: Vec::new(),
                    }],
                }],
            }],
        };
        let lines = document(&module);
        assert_eq!(
            lines[1], "- 📞 Function call: `setup`",
            "wrappers neither print nor indent"
        );
    }
}
