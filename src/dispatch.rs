use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;
use crate::domain::{OrderStatus, OrderUpdate, Provider};

/// Source of asynchronous fulfillment updates for an order.
///
/// `subscribe` must never block: implementations hand back a channel and
/// deliver events on their own schedule. Sources are not required to be
/// exactly-once or in-order; the order service tolerates stale, duplicate,
/// and out-of-order delivery, so a real push or streaming channel can back
/// this trait without extra coordination.
pub trait UpdateSource: Send + Sync {
    fn subscribe(&self, order_id: String) -> mpsc::Receiver<OrderUpdate>;
}

/// Stand-in for the real dispatch channel: assigns the same provider to every
/// order after a fixed delay, then closes the subscription.
///
/// The delivery is not cancellable. If the order was superseded in the
/// meantime the event still fires and is dropped as stale by the service.
pub struct SimulatedDispatch {
    delay: Duration,
}

impl SimulatedDispatch {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    pub fn new() -> Self {
        Self::with_delay(Self::DEFAULT_DELAY)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    fn assigned_provider() -> Provider {
        Provider {
            name: "Rajesh Kumar".to_string(),
            phone: "+91 9876543210".to_string(),
            rating: 4.8,
        }
    }
}

impl Default for SimulatedDispatch {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateSource for SimulatedDispatch {
    fn subscribe(&self, order_id: String) -> mpsc::Receiver<OrderUpdate> {
        let (sender, receiver) = mpsc::channel(4);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(order_id = %order_id, "Simulated dispatch assigning provider");
            let update = OrderUpdate {
                order_id,
                status: OrderStatus::ProviderAssigned,
                provider: Some(Self::assigned_provider()),
                eta: Some("25 mins".to_string()),
            };
            // The subscriber may be gone if the system shut down first.
            let _ = sender.send(update).await;
        });
        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_exactly_one_assignment_then_closes() {
        let dispatch = SimulatedDispatch::with_delay(Duration::ZERO);
        let mut updates = dispatch.subscribe("order_42".to_string());

        let update = updates.recv().await.expect("expected one update");
        assert_eq!(update.order_id, "order_42");
        assert_eq!(update.status, OrderStatus::ProviderAssigned);
        let provider = update.provider.expect("provider must be set");
        assert_eq!(provider.name, "Rajesh Kumar");
        assert_eq!(provider.phone, "+91 9876543210");
        assert_eq!(provider.rating, 4.8);
        assert_eq!(update.eta.as_deref(), Some("25 mins"));

        assert!(updates.recv().await.is_none(), "source must close after one event");
    }
}
