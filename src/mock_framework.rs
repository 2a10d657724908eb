//! # Mock Framework
//!
//! Utilities for testing order-service collaborators in isolation.
//!
//! Use [`create_mock_client`] to get an `OrderClient` wired to a channel you
//! control, then helpers like [`expect_confirm_booking`] or
//! [`expect_apply_update`] to assert what reached the service side. Use
//! [`RecordingSink`] to capture notifications instead of raising toasts.

use std::sync::Mutex;
use tokio::sync::{mpsc, oneshot};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderUpdate};
use crate::error::BookingError;
use crate::messages::{BookingRequest, OrderRequest};
use crate::notify::NotificationSink;

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// We don't spin up a full `OrderService` when we are only testing the
/// producer side (a client call site, or an update forwarder). The mock
/// client sends messages to a channel we control; the test inspects what
/// arrives and answers the oneshot responders deterministically.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a ConfirmBooking request
pub async fn expect_confirm_booking(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(BookingRequest, oneshot::Sender<Result<Order, BookingError>>)> {
    match receiver.recv().await {
        Some(OrderRequest::ConfirmBooking { request, respond_to }) => Some((request, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an ApplyUpdate event
pub async fn expect_apply_update(receiver: &mut mpsc::Receiver<OrderRequest>) -> Option<OrderUpdate> {
    match receiver.recv().await {
        Some(OrderRequest::ApplyUpdate { update }) => Some(update),
        _ => None,
    }
}

/// Notification sink that records deliveries for assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<(String, String)>>,
}

impl NotificationSink for RecordingSink {
    fn deliver(&self, title: &str, body: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OrderStatus;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        // Test ConfirmBooking
        let confirm_task = tokio::spawn(async move {
            let request = BookingRequest {
                service_id: "plumbing".to_string(),
                description: "Leaking sink".to_string(),
                preferred_time: "ASAP (30 mins)".to_string(),
                address_id: None,
                amount: 800,
            };
            client.confirm_booking(request).await
        });

        let (request, responder) =
            expect_confirm_booking(&mut receiver).await.expect("Expected ConfirmBooking request");
        assert_eq!(request.service_id, "plumbing");
        assert_eq!(request.amount, 800);
        responder
            .send(Err(BookingError::UnknownService("plumbing".to_string())))
            .unwrap();

        let result = confirm_task.await.unwrap();
        assert_eq!(result, Err(BookingError::UnknownService("plumbing".to_string())));
    }

    #[tokio::test]
    async fn forwarded_updates_reach_the_service_channel() {
        let (client, mut receiver) = create_mock_client(10);

        let update = OrderUpdate {
            order_id: "order_7".to_string(),
            status: OrderStatus::ProviderAssigned,
            provider: None,
            eta: None,
        };
        client.apply_update(update).await;

        let received = expect_apply_update(&mut receiver).await.expect("Expected ApplyUpdate");
        assert_eq!(received.order_id, "order_7");
        assert_eq!(received.status, OrderStatus::ProviderAssigned);
    }
}
