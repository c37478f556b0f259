use thiserror::Error;

/// Errors that abort a batch run.
///
/// Per-row problems (missing `@`, unencodable domains) are not errors; they
/// surface as `n/a` cells in the output.
#[derive(Error, Debug)]
pub enum BatchError {
    /// I/O error while opening, reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV input or a failed CSV write.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// The configured email column does not exist.
    #[error("email column {0} not found")]
    MissingColumn(String),
    /// Header mode was requested but the input has no header row.
    #[error("input has no header row")]
    EmptyInput,
}
