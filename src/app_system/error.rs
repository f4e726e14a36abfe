use thiserror::Error;

use crate::ledger::LedgerError;
use crate::session::SessionError;

/// Failures that end the process with a non-zero exit code.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
    #[error("Ledger unavailable: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Session failed: {0}")]
    Session(#[from] SessionError),
}
