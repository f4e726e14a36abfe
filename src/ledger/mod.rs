//! The inventory ledger: products, requests, waiting clients and the change
//! log that drives single-step undo.

pub mod error;

pub use error::*;

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::domain::{ChangeEntry, ChangeKind, Product, Request, WaitingClient};

/// What an undo actually reverted.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    /// A registration was reverted by removing the product again.
    RemovedAdded(Product),
    /// A removal was reverted by appending the snapshot back.
    RestoredRemoved(Product),
    /// The registered product was already gone; only the log entry was consumed.
    AddedAlreadyGone(String),
}

/// Owner of the four managed sequences.
///
/// Lookups are linear and the first product with a matching name wins.
/// Duplicate names are allowed but only the first one is ever acted upon.
#[derive(Debug)]
pub struct Ledger {
    products: Vec<Product>,
    requests: VecDeque<Request>,
    waiting: VecDeque<WaitingClient>,
    changes: Vec<ChangeEntry>,
    next_request_id: u32,
    next_client_id: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            requests: VecDeque::new(),
            waiting: VecDeque::new(),
            changes: Vec::new(),
            next_request_id: 1,
            next_client_id: 1,
        }
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    // --- Inventory ---

    pub fn register_product(&mut self, product: Product) {
        self.changes.push(ChangeEntry::added(product.clone()));
        self.products.push(product);
    }

    pub fn remove_product(&mut self, name: &str) -> Result<Product, LedgerError> {
        let index = self
            .position_of(name)
            .ok_or_else(|| LedgerError::ProductNotFound(name.to_string()))?;
        self.changes.push(ChangeEntry::removed(self.products[index].clone()));
        Ok(self.products.remove(index))
    }

    pub fn query_product(&self, name: &str) -> Result<Product, LedgerError> {
        self.products
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| LedgerError::ProductNotFound(name.to_string()))
    }

    /// Products sorted by name. Sorts a copy; the stored order is untouched.
    pub fn list_products(&self) -> Vec<Product> {
        let mut sorted = self.products.clone();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));
        sorted
    }

    // --- Requests ---

    pub fn register_request(&mut self, description: String) -> Request {
        let request = Request::new(self.next_request_id, description);
        self.next_request_id += 1;
        self.requests.push_back(request.clone());
        request
    }

    pub fn process_request(&mut self) -> Result<Request, LedgerError> {
        self.requests.pop_front().ok_or(LedgerError::NoPendingRequests)
    }

    pub fn current_request(&self) -> Result<Request, LedgerError> {
        self.requests.front().cloned().ok_or(LedgerError::NoPendingRequests)
    }

    pub fn list_requests(&self) -> Vec<Request> {
        self.requests.iter().cloned().collect()
    }

    // --- Waiting list ---

    pub fn register_client(&mut self, name: String) -> WaitingClient {
        let client = WaitingClient::new(self.next_client_id, name);
        self.next_client_id += 1;
        self.waiting.push_back(client.clone());
        client
    }

    pub fn attend_client(&mut self) -> Result<WaitingClient, LedgerError> {
        self.waiting.pop_front().ok_or(LedgerError::NoWaitingClients)
    }

    pub fn list_waiting(&self) -> Vec<WaitingClient> {
        self.waiting.iter().cloned().collect()
    }

    // --- History ---

    pub fn change_count(&self) -> usize {
        self.changes.len()
    }

    #[cfg(test)]
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Reverts the most recent inventory change. The popped entry is discarded,
    /// never turned into a redo entry.
    pub fn undo_last(&mut self) -> Result<UndoOutcome, LedgerError> {
        let entry = self.changes.pop().ok_or(LedgerError::NothingToUndo)?;
        debug!(kind = %entry.kind, product_name = %entry.product.name, "Reverting change");

        match entry.kind {
            ChangeKind::Add => match self.position_of(&entry.product.name) {
                Some(index) => Ok(UndoOutcome::RemovedAdded(self.products.remove(index))),
                None => {
                    warn!(product_name = %entry.product.name, "Registered product already gone");
                    Ok(UndoOutcome::AddedAlreadyGone(entry.product.name))
                }
            },
            ChangeKind::Remove => {
                self.products.push(entry.product.clone());
                Ok(UndoOutcome::RestoredRemoved(entry.product))
            }
        }
    }
}
