//! Parse-and-report orchestration.
//!
//! One call, one file: parse the source, walk the tree, join the outline
//! into a Markdown report and echo the source back for side-by-side
//! display. Nothing is cached between calls.

use std::io;
use std::path::Path;
use std::str::Utf8Error;

use thiserror::Error;

use crate::outline;
use crate::parser::{ParseError, PythonParser};

/// Errors surfaced while turning an input into a report.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// No file was supplied at all.
    #[error("no input was provided")]
    MissingInput,
    /// The input could not be read.
    #[error("failed to read the input: {0}")]
    Read(#[from] io::Error),
    /// The input is not UTF-8 text.
    #[error("the input is not valid UTF-8: {0}")]
    Decode(#[from] Utf8Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A finished analysis: the Markdown report and the echoed source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub report: String,
    pub source: String,
}

/// Analyze source text already in memory.
pub fn analyze_source(source: &str) -> Result<Analysis, AnalyzeError> {
    let tree = PythonParser::new().parse(source)?;
    let report = outline::document(&tree).join("\n");
    Ok(Analysis {
        report,
        source: source.to_string(),
    })
}

/// Analyze raw bytes, typically an uploaded file body.
pub fn analyze_bytes(bytes: &[u8]) -> Result<Analysis, AnalyzeError> {
    let source = std::str::from_utf8(bytes)?;
    analyze_source(source)
}

/// Analyze an optional upload. Absent input is its own error so callers can
/// show a warning instead of an error banner.
pub fn analyze_upload(upload: Option<&[u8]>) -> Result<Analysis, AnalyzeError> {
    match upload {
        Some(bytes) => analyze_bytes(bytes),
        None => Err(AnalyzeError::MissingInput),
    }
}

/// Analyze a file on disk.
pub fn analyze_path(path: &Path) -> Result<Analysis, AnalyzeError> {
    let bytes = std::fs::read(path)?;
    analyze_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::REPORT_TITLE;

    #[test]
    fn test_report_opens_with_title() {
        let analysis = analyze_source("import os\n").expect("analysis should succeed");
        assert_eq!(
            analysis.report,
            format!("{}\n- 📦 Import: `os`", REPORT_TITLE)
        );
    }

    #[test]
    fn test_function_report() {
        let source = "def f(a, b):\n    return a + b\n";
        let analysis = analyze_source(source).expect("analysis should succeed");

        let expected = format!(
            "{}\n{}\n{}\n{}\n{}",
            REPORT_TITLE,
            "### 🔧 Function: `f` (Line 1)",
            "- 🧩 Arguments: a, b",
            "- 📄 Docstring: No function docstring found.",
            "  - 🔙 Return statement: `a + b`"
        );
        assert_eq!(analysis.report, expected);
    }

    #[test]
    fn test_source_is_echoed_verbatim() {
        let source = "import os\n\n\nx = 1\n";
        let analysis = analyze_source(source).expect("analysis should succeed");
        assert_eq!(analysis.source, source);
    }

    #[test]
    fn test_empty_source_is_title_only() {
        let analysis = analyze_source("").expect("analysis should succeed");
        assert_eq!(analysis.report, REPORT_TITLE);
        assert_eq!(analysis.source, "");
    }

    #[test]
    fn test_missing_upload() {
        let err = analyze_upload(None).expect_err("no upload should fail");
        assert!(matches!(err, AnalyzeError::MissingInput));
        assert_eq!(err.to_string(), "no input was provided");
    }

    #[test]
    fn test_upload_with_bytes() {
        let analysis =
            analyze_upload(Some(b"import sys\n")).expect("upload should be analyzed");
        assert!(analysis.report.contains("- 📦 Import: `sys`"));
    }

    #[test]
    fn test_invalid_utf8_is_rejected() {
        let err = analyze_bytes(&[0xff, 0xfe, 0x00]).expect_err("bad bytes should fail");
        assert!(matches!(err, AnalyzeError::Decode(_)));
    }

    #[test]
    fn test_syntax_error_propagates() {
        let err = analyze_source("def broken(:\n").expect_err("bad syntax should fail");
        match err {
            AnalyzeError::Parse(ParseError::InvalidSyntax { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected a parse error, got {:?}", other),
        }
        let err = analyze_source("def broken(:\n").expect_err("bad syntax should fail");
        assert!(err.to_string().contains("invalid syntax at line 1"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = analyze_path(Path::new("/definitely/not/here.py"))
            .expect_err("missing file should fail");
        assert!(matches!(err, AnalyzeError::Read(_)));
    }
}
