use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};
use crate::domain::{Order, OrderRecord, OrderUpdate};
use crate::error::{BookingError, OrderError};
use crate::messages::{BookingRequest, OrderRequest};

// =============================================================================
// Client method macro
// =============================================================================

macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

// =============================================================================
// Order Client
// =============================================================================

/// Handle for talking to the order service.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    /// Feeds a status update into the order service.
    ///
    /// Fire-and-forget: stale or invalid updates are dropped inside the
    /// service, and a closed channel only means the system is shutting down.
    #[instrument(fields(order_id = %update.order_id, status = %update.status), skip(self, update))]
    pub async fn apply_update(&self, update: OrderUpdate) {
        debug!("Sending update");
        if self
            .sender
            .send(OrderRequest::ApplyUpdate { update })
            .await
            .is_err()
        {
            debug!("Order service closed; dropping update");
        }
    }

    pub async fn shutdown(&self) {
        let _ = self.sender.send(OrderRequest::Shutdown).await;
    }
}

client_method!(OrderClient => fn confirm_booking(request: BookingRequest) -> Order as OrderRequest::ConfirmBooking, Error = BookingError);
client_method!(OrderClient => fn active_order() -> Option<Order> as OrderRequest::GetActiveOrder, Error = OrderError);
client_method!(OrderClient => fn order_history() -> Vec<OrderRecord> as OrderRequest::GetHistory, Error = OrderError);
