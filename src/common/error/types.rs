//! Unified error types for stockdeck.
//!
//! Errors are split by origin: [`InputError`] for anything wrong with the
//! deck data handed to the builders, [`OoxmlError`] for package generation,
//! and plain I/O errors for the filesystem.
use crate::ooxml::error::OoxmlError;
use thiserror::Error;

/// Main error type for stockdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The deck input is missing data or is inconsistent
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Presentation package could not be produced or read back
    #[error("Package error: {0}")]
    Ooxml(#[from] OoxmlError),

    /// A written deck read back with a different slide count
    #[error("verification failed: wrote {written} slides, read back {read}")]
    Verification { written: usize, read: usize },
}

/// Problems with the structured deck input.
#[derive(Error, Debug)]
pub enum InputError {
    /// A required top-level key is absent from the input record
    #[error("missing required key `{0}`")]
    MissingKey(&'static str),

    /// Malformed JSON or a value of the wrong type
    #[error("malformed deck input: {0}")]
    Json(#[from] serde_json::Error),

    /// A table row does not have one cell per header
    #[error("row {row} has {got} cells but the table has {expected} columns")]
    RowLength {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Column widths were supplied for the wrong number of columns
    #[error("{got} column widths given for a table with {expected} columns")]
    ColumnWidths { expected: usize, got: usize },

    /// Sensitivity matrix rows do not line up with the scenario labels
    #[error("{scenarios} scenario labels but the sensitivity matrix has {rows} rows")]
    ScenarioCount { scenarios: usize, rows: usize },

    /// A list that the layout depends on is empty
    #[error("`{0}` must not be empty")]
    EmptyField(&'static str),

    /// Upside cannot be computed against this price
    #[error("price must be a positive number, got {0}")]
    InvalidPrice(f64),
}

/// Result type for stockdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
