use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{Product, Request, WaitingClient};
use crate::ledger::{LedgerError, UndoOutcome};
use crate::messages::LedgerRequest;

/// Client for the ledger service. Thin wrapper around the mailbox sender.
#[derive(Clone, Debug)]
pub struct LedgerClient {
    sender: mpsc::Sender<LedgerRequest>,
}

impl LedgerClient {
    pub fn new(sender: mpsc::Sender<LedgerRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop. No response is expected.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), LedgerError> {
        debug!("Sending shutdown request");
        self.sender
            .send(LedgerRequest::Shutdown)
            .await
            .map_err(|e| LedgerError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(LedgerClient => fn register_product(product: Product) -> () as LedgerRequest::RegisterProduct, Error = LedgerError);
client_method!(LedgerClient => fn remove_product(name: String) -> Product as LedgerRequest::RemoveProduct, Error = LedgerError);
client_method!(LedgerClient => fn query_product(name: String) -> Product as LedgerRequest::QueryProduct, Error = LedgerError);
client_method!(LedgerClient => fn list_products() -> Vec<Product> as LedgerRequest::ListProducts, Error = LedgerError);

client_method!(LedgerClient => fn register_request(description: String) -> Request as LedgerRequest::RegisterRequest, Error = LedgerError);
client_method!(LedgerClient => fn process_request() -> Request as LedgerRequest::ProcessRequest, Error = LedgerError);
client_method!(LedgerClient => fn current_request() -> Request as LedgerRequest::CurrentRequest, Error = LedgerError);
client_method!(LedgerClient => fn list_requests() -> Vec<Request> as LedgerRequest::ListRequests, Error = LedgerError);

client_method!(LedgerClient => fn register_client(name: String) -> WaitingClient as LedgerRequest::RegisterClient, Error = LedgerError);
client_method!(LedgerClient => fn attend_client() -> WaitingClient as LedgerRequest::AttendClient, Error = LedgerError);
client_method!(LedgerClient => fn list_waiting() -> Vec<WaitingClient> as LedgerRequest::ListWaiting, Error = LedgerError);

client_method!(LedgerClient => fn undo_last() -> UndoOutcome as LedgerRequest::UndoLast, Error = LedgerError);
client_method!(LedgerClient => fn change_count() -> usize as LedgerRequest::ChangeCount, Error = LedgerError);

// Test-only method for internal state inspection
#[cfg(test)]
client_method!(LedgerClient => fn get_product_count() -> usize as LedgerRequest::GetProductCount, Error = LedgerError);
