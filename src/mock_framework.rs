//! # Mock Framework
//!
//! Utilities for testing code that talks to the ledger without running the service.
//!
//! Use [`create_mock_client`] to get a client and the raw mailbox receiver.
//! Then use helpers like [`expect_register_product`] or [`expect_undo_last`]
//! to pop the next request, assert on it and answer it.

use tokio::sync::mpsc;
use crate::clients::LedgerClient;
use crate::domain::Product;
use crate::ledger::{LedgerError, UndoOutcome};
use crate::messages::{LedgerRequest, ServiceResponse};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the part of the service: every request the client sends
/// arrives on `receiver`, and the test decides the reply (success, failure or
/// a dropped responder).
pub fn create_mock_client(buffer_size: usize) -> (LedgerClient, mpsc::Receiver<LedgerRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Helper to verify that the next message is a RegisterProduct request
pub async fn expect_register_product(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(Product, ServiceResponse<(), LedgerError>)> {
    match receiver.recv().await {
        Some(LedgerRequest::RegisterProduct { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a RemoveProduct request
pub async fn expect_remove_product(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<(String, ServiceResponse<Product, LedgerError>)> {
    match receiver.recv().await {
        Some(LedgerRequest::RemoveProduct { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UndoLast request
pub async fn expect_undo_last(
    receiver: &mut mpsc::Receiver<LedgerRequest>,
) -> Option<ServiceResponse<UndoOutcome, LedgerError>> {
    match receiver.recv().await {
        Some(LedgerRequest::UndoLast { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let register_task = tokio::spawn(async move {
            client.register_product(Product::new("Widget", 9.99, 5)).await
        });

        let (product, responder) = expect_register_product(&mut receiver)
            .await
            .expect("Expected RegisterProduct request");
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 5);
        responder.send(Ok(())).unwrap();

        assert_eq!(register_task.await.unwrap(), Ok(()));
    }

    #[tokio::test]
    async fn test_dropped_responder_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let undo_task = tokio::spawn(async move { client.undo_last().await });

        let responder = expect_undo_last(&mut receiver).await.expect("Expected UndoLast request");
        drop(responder);

        assert_eq!(
            undo_task.await.unwrap(),
            Err(LedgerError::ActorCommunicationError("Actor dropped".to_string()))
        );
    }

    #[tokio::test]
    async fn test_closed_mailbox_is_a_communication_error() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        assert_eq!(
            client.list_products().await,
            Err(LedgerError::ActorCommunicationError("Actor closed".to_string()))
        );
    }
}
