//! Session view state.
//!
//! The interactive front end shows two panels, the report and the source,
//! plus a marker for whether a file is loaded. Every user action folds into
//! a fresh [`ViewState`]; nothing is mutated in place.

use std::path::Path;

use crate::analyze::{self, Analysis, AnalyzeError};

/// Warning shown in the report panel when no file has been supplied.
pub const NO_INPUT_WARNING: &str =
    "### ⚠️ No file uploaded! **Please upload a `.py` file to generate documentation.** ⚠️";

/// One-line banner for a failed analysis.
pub fn error_line(err: &AnalyzeError) -> String {
    format!("❌ Error: {}", err)
}

/// What the front end shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub has_file: bool,
    pub report_text: String,
    pub source_text: String,
}

impl ViewState {
    /// State before the first upload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Drop the loaded file and blank both panels.
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Fold an upload into fresh state. The previous state never leaks
    /// through; each upload fully replaces the panels.
    pub fn upload(&self, upload: Option<&[u8]>) -> Self {
        Self::from_result(analyze::analyze_upload(upload))
    }

    /// Fold a file on disk into fresh state.
    pub fn open(&self, path: &Path) -> Self {
        Self::from_result(analyze::analyze_path(path))
    }

    /// Translate an analysis outcome into panel contents. Absent input gets
    /// the upload warning; any other failure gets the error banner, with the
    /// source panel left blank.
    pub fn from_result(result: Result<Analysis, AnalyzeError>) -> Self {
        match result {
            Ok(analysis) => Self {
                has_file: true,
                report_text: analysis.report,
                source_text: analysis.source,
            },
            Err(AnalyzeError::MissingInput) => Self {
                has_file: false,
                report_text: NO_INPUT_WARNING.to_string(),
                source_text: String::new(),
            },
            Err(err) => Self {
                has_file: true,
                report_text: error_line(&err),
                source_text: String::new(),
            },
        }
    }
}
