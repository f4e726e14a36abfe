//! The ledger service: a single actor that owns the [`Ledger`] and serializes
//! every operation on it through its mailbox.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use crate::clients::LedgerClient;
use crate::domain::{Product, Request, WaitingClient};
use crate::ledger::{Ledger, LedgerError, UndoOutcome};
use crate::messages::{LedgerRequest, ServiceResponse};

pub struct LedgerService {
    receiver: mpsc::Receiver<LedgerRequest>,
    ledger: Ledger,
}

impl LedgerService {
    pub fn new(buffer_size: usize) -> (Self, LedgerClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            ledger: Ledger::new(),
        };
        let client = LedgerClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Ends on `Shutdown` or when every client is dropped.
    #[instrument(name = "ledger_service", skip(self))]
    pub async fn run(mut self) {
        info!("LedgerService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                LedgerRequest::RegisterProduct { product, respond_to } => {
                    self.handle_register_product(product, respond_to);
                }
                LedgerRequest::RemoveProduct { name, respond_to } => {
                    self.handle_remove_product(name, respond_to);
                }
                LedgerRequest::QueryProduct { name, respond_to } => {
                    self.handle_query_product(name, respond_to);
                }
                LedgerRequest::ListProducts { respond_to } => {
                    self.handle_list_products(respond_to);
                }
                LedgerRequest::RegisterRequest { description, respond_to } => {
                    self.handle_register_request(description, respond_to);
                }
                LedgerRequest::ProcessRequest { respond_to } => {
                    self.handle_process_request(respond_to);
                }
                LedgerRequest::CurrentRequest { respond_to } => {
                    let _ = respond_to.send(self.ledger.current_request());
                }
                LedgerRequest::ListRequests { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.list_requests()));
                }
                LedgerRequest::RegisterClient { name, respond_to } => {
                    self.handle_register_client(name, respond_to);
                }
                LedgerRequest::AttendClient { respond_to } => {
                    self.handle_attend_client(respond_to);
                }
                LedgerRequest::ListWaiting { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.list_waiting()));
                }
                LedgerRequest::UndoLast { respond_to } => {
                    self.handle_undo_last(respond_to);
                }
                LedgerRequest::ChangeCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.change_count()));
                }
                LedgerRequest::Shutdown => {
                    info!("LedgerService shutting down");
                    break;
                }
                #[cfg(test)]
                LedgerRequest::GetProductCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.ledger.product_count()));
                }
            }
        }

        info!("LedgerService stopped");
    }

    #[instrument(fields(product_name = %product.name, quantity = product.quantity), skip(self, product, respond_to))]
    fn handle_register_product(&mut self, product: Product, respond_to: ServiceResponse<(), LedgerError>) {
        debug!("Processing register_product request");
        self.ledger.register_product(product);
        info!(change_count = self.ledger.change_count(), "Product registered");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(product_name = %name), skip(self, respond_to))]
    fn handle_remove_product(&mut self, name: String, respond_to: ServiceResponse<Product, LedgerError>) {
        debug!("Processing remove_product request");
        let result = self.ledger.remove_product(&name);
        match &result {
            Ok(_) => info!(change_count = self.ledger.change_count(), "Product removed"),
            Err(e) => debug!(error = %e, "Product not removed"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(product_name = %name), skip(self, respond_to))]
    fn handle_query_product(&self, name: String, respond_to: ServiceResponse<Product, LedgerError>) {
        debug!("Processing query_product request");
        let _ = respond_to.send(self.ledger.query_product(&name));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_list_products(&self, respond_to: ServiceResponse<Vec<Product>, LedgerError>) {
        let products = self.ledger.list_products();
        debug!(product_count = products.len(), "Listed products");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(skip(self, description, respond_to))]
    fn handle_register_request(&mut self, description: String, respond_to: ServiceResponse<Request, LedgerError>) {
        let request = self.ledger.register_request(description);
        info!(request_id = request.id, "Request registered");
        let _ = respond_to.send(Ok(request));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_process_request(&mut self, respond_to: ServiceResponse<Request, LedgerError>) {
        let result = self.ledger.process_request();
        match &result {
            Ok(request) => info!(request_id = request.id, "Request processed"),
            Err(e) => debug!(error = %e, "Nothing to process"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_register_client(&mut self, name: String, respond_to: ServiceResponse<WaitingClient, LedgerError>) {
        let client = self.ledger.register_client(name);
        info!(client_id = client.id, "Client added to waiting list");
        let _ = respond_to.send(Ok(client));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_attend_client(&mut self, respond_to: ServiceResponse<WaitingClient, LedgerError>) {
        let result = self.ledger.attend_client();
        match &result {
            Ok(client) => info!(client_id = client.id, client_name = %client.name, "Client attended"),
            Err(e) => debug!(error = %e, "Nobody waiting"),
        }
        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_undo_last(&mut self, respond_to: ServiceResponse<UndoOutcome, LedgerError>) {
        debug!("Processing undo_last request");
        let result = self.ledger.undo_last();
        match &result {
            Ok(outcome) => info!(?outcome, change_count = self.ledger.change_count(), "Change undone"),
            Err(e) => warn!(error = %e, "Undo requested with empty history"),
        }
        let _ = respond_to.send(result);
    }
}
