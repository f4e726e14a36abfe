use tokio::sync::oneshot;
use crate::domain::{Product, Request, WaitingClient};
use crate::ledger::{LedgerError, UndoOutcome};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the ledger service. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum LedgerRequest {
    RegisterProduct {
        product: Product,
        respond_to: ServiceResponse<(), LedgerError>,
    },
    RemoveProduct {
        name: String,
        respond_to: ServiceResponse<Product, LedgerError>,
    },
    QueryProduct {
        name: String,
        respond_to: ServiceResponse<Product, LedgerError>,
    },
    ListProducts {
        respond_to: ServiceResponse<Vec<Product>, LedgerError>,
    },
    RegisterRequest {
        description: String,
        respond_to: ServiceResponse<Request, LedgerError>,
    },
    ProcessRequest {
        respond_to: ServiceResponse<Request, LedgerError>,
    },
    CurrentRequest {
        respond_to: ServiceResponse<Request, LedgerError>,
    },
    ListRequests {
        respond_to: ServiceResponse<Vec<Request>, LedgerError>,
    },
    RegisterClient {
        name: String,
        respond_to: ServiceResponse<WaitingClient, LedgerError>,
    },
    AttendClient {
        respond_to: ServiceResponse<WaitingClient, LedgerError>,
    },
    ListWaiting {
        respond_to: ServiceResponse<Vec<WaitingClient>, LedgerError>,
    },
    UndoLast {
        respond_to: ServiceResponse<UndoOutcome, LedgerError>,
    },
    ChangeCount {
        respond_to: ServiceResponse<usize, LedgerError>,
    },
    Shutdown,
    #[cfg(test)]
    GetProductCount {
        respond_to: ServiceResponse<usize, LedgerError>,
    },
}
