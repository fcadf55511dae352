//! Miette diagnostic wrapper for calendar data errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![expect(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use skcal::DataLoadError;
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for malformed calendar data.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid calendar data: {message}")]
#[diagnostic(code(skcal::data))]
pub struct CalendarDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CalendarDiagnostic {
    /// Create a diagnostic from a load error with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &DataLoadError) -> Self {
        let (line, column, message) = match err {
            DataLoadError::Parse {
                line,
                column,
                message,
                ..
            } => (*line, *column, message.clone()),
            DataLoadError::Io { .. } | DataLoadError::DuplicateDay { .. } => {
                (1, 1, err.to_string())
            }
        };

        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = message
            .contains("day key")
            .then(|| "day keys are four digits in MMDD form, e.g. \"0629\"".to_string());

        CalendarDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }
}
