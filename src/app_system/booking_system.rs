use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::watch;
use tracing::{error, info};
use crate::actors::OrderService;
use crate::clients::OrderClient;
use crate::dispatch::{SimulatedDispatch, UpdateSource};
use crate::domain::{sample_profile, Order, UserProfile};
use crate::notify::{LogSink, Notifier};

/// The main application system that wires the order service to its
/// collaborators.
///
/// Responsible for starting up the actor, injecting the update source and
/// notifier, and handling shutdown.
pub struct BookingSystem {
    pub order_client: OrderClient,
    /// Latest active-order snapshot; a view layer re-renders on changes.
    pub changes: watch::Receiver<Option<Order>>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl BookingSystem {
    /// Production-default wiring: simulated dispatch with the stock 3 s
    /// delay, granted notification permission, sample customer profile.
    pub fn new() -> Self {
        Self::with_parts(
            Arc::new(SimulatedDispatch::new()),
            Notifier::new(true, Arc::new(LogSink)),
            sample_profile(),
        )
    }

    pub fn with_parts(
        dispatch: Arc<dyn UpdateSource>,
        notifier: Notifier,
        profile: UserProfile,
    ) -> Self {
        info!(customer = %profile.name, "Starting booking system");

        // Time-based order ids, with a counter as tiebreaker for bookings
        // confirmed within the same millisecond.
        let order_seq = Arc::new(AtomicU64::new(0));
        let next_order_id = move || {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            let seq = order_seq.fetch_add(1, Ordering::SeqCst);
            format!("order_{millis}_{seq}")
        };

        let (service, order_client, changes) =
            OrderService::new(32, dispatch, notifier, profile, next_order_id);
        let handle = tokio::spawn(service.run());

        Self {
            order_client,
            changes,
            handles: vec![handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        self.order_client.shutdown().await;
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for BookingSystem {
    fn default() -> Self {
        Self::new()
    }
}
