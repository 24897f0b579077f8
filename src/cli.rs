//! Command-line interface for codexplain.

use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use colored::*;

use crate::analyze::{self, Analysis, AnalyzeError};
use crate::view;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Generate Markdown documentation for a Python source file.
///
/// codexplain parses one Python file and prints a structural outline:
/// classes, functions with their arguments and docstrings, imports,
/// assignments, for loops, function calls and return statements, one
/// Markdown line each. Nested constructs indent under their parent.
#[derive(Parser)]
#[command(name = "codexplain")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Python file to document ("-" reads from standard input)
    pub file: Option<PathBuf>,

    /// Append the echoed source under the report
    #[arg(long)]
    pub show_source: bool,

    /// Write the report to a file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the tool.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    match gather(cli) {
        Ok(analysis) => {
            let document = render(&analysis, cli.show_source);
            if let Some(path) = &cli.output {
                if let Err(e) = std::fs::write(path, &document) {
                    eprintln!("Error: failed to write {}: {}", path.display(), e);
                    return Ok(EXIT_ERROR);
                }
            } else {
                print!("{}", document);
            }
            Ok(EXIT_SUCCESS)
        }
        // No input is a prompt, not a failure.
        Err(AnalyzeError::MissingInput) => {
            eprintln!("{}", view::NO_INPUT_WARNING.yellow());
            Ok(EXIT_SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", view::error_line(&err).red());
            Ok(EXIT_FAILED)
        }
    }
}

/// Resolve the input source and analyze it.
fn gather(cli: &Cli) -> Result<Analysis, AnalyzeError> {
    match &cli.file {
        None => analyze::analyze_upload(None),
        Some(path) if path.as_os_str() == "-" => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            analyze::analyze_bytes(&bytes)
        }
        Some(path) => analyze::analyze_path(path),
    }
}

/// Assemble the printable document: the report, then optionally the echoed
/// source under its own heading.
fn render(analysis: &Analysis, show_source: bool) -> String {
    let mut out = analysis.report.clone();
    out.push('\n');
    if show_source {
        out.push_str("\n---\n\n## 📄 Source Code\n\n```python\n");
        out.push_str(&analysis.source);
        if !analysis.source.ends_with('\n') && !analysis.source.is_empty() {
            out.push('\n');
        }
        out.push_str("```\n");
    }
    out
}
