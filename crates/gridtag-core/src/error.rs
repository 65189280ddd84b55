//! Error types for gridtag core.

use thiserror::Error;

use gridtag_engine::selection::SelectionError;

/// Errors that can occur in the gridtag application
#[derive(Error, Debug)]
pub enum GridtagError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV file is empty")]
    EmptyCsv,

    #[error(transparent)]
    Selection(#[from] SelectionError),
}

pub type Result<T> = std::result::Result<T, GridtagError>;
