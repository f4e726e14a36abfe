use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LedgerError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("No pending requests")]
    NoPendingRequests,
    #[error("No clients waiting")]
    NoWaitingClients,
    #[error("No changes to undo")]
    NothingToUndo,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
