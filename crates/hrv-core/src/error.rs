// File: crates/hrv-core/src/error.rs
// Summary: Error type for the render contract (validation hard-stops plus render-path failures).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The table path does not resolve to a readable file.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// A required column is absent after trimming whitespace from every header name.
    #[error("required column '{missing}' missing. Found: {found:?}")]
    Schema {
        missing: &'static str,
        found: Vec<String>,
    },

    /// The table could not be parsed as delimited text.
    #[error("failed to parse table: {0}")]
    Csv(#[from] csv::Error),

    /// A measurement cell is not a finite number.
    #[error("line {line}: measurement '{value}' is not a number")]
    Measurement { line: u64, value: String },

    /// Surface allocation, PNG encoding, or file write failed.
    #[error(transparent)]
    Render(#[from] anyhow::Error),
}
