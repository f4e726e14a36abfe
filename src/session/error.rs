use thiserror::Error;

use crate::ledger::LedgerError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid menu selection: '{0}'")]
    InvalidMenuSelection(String),
    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },
    #[error("Input closed")]
    EndOfInput,
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
