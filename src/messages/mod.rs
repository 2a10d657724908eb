use tokio::sync::oneshot;
use crate::domain::{Order, OrderRecord, OrderUpdate};
use crate::error::{BookingError, OrderError};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Everything the booking form collects before the customer confirms.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub service_id: String,
    pub description: String,
    pub preferred_time: String,
    /// Saved address to book against; the profile default when `None`.
    pub address_id: Option<String>,
    pub amount: u32,
}

/// Typed messages for the order service. Each request variant carries a
/// oneshot channel for the response; `ApplyUpdate` is fire-and-forget, since
/// update sources never wait on ingestion.
#[derive(Debug)]
pub enum OrderRequest {
    ConfirmBooking {
        request: BookingRequest,
        respond_to: ServiceResponse<Order, BookingError>,
    },
    ApplyUpdate {
        update: OrderUpdate,
    },
    GetActiveOrder {
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    GetHistory {
        respond_to: ServiceResponse<Vec<OrderRecord>, OrderError>,
    },
    Shutdown,
}
