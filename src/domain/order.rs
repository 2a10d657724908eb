use std::fmt;

/// Fulfillment status of a booking.
///
/// The fulfillment sequence is
/// `SearchingProvider → ProviderAssigned → EnRoute → Arrived → InProgress →
/// Completed`. `Cancelled` and `Failed` are terminal exits reachable from any
/// non-terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    SearchingProvider,
    ProviderAssigned,
    EnRoute,
    Arrived,
    InProgress,
    Completed,
    Cancelled,
    Failed,
}

impl OrderStatus {
    /// Wire name of the status, as delivered by an update source.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::SearchingProvider => "searching_provider",
            OrderStatus::ProviderAssigned => "provider_assigned",
            OrderStatus::EnRoute => "en_route",
            OrderStatus::Arrived => "arrived",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Failed => "failed",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "searching_provider" => Some(OrderStatus::SearchingProvider),
            "provider_assigned" => Some(OrderStatus::ProviderAssigned),
            "en_route" => Some(OrderStatus::EnRoute),
            "arrived" => Some(OrderStatus::Arrived),
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            "failed" => Some(OrderStatus::Failed),
            _ => None,
        }
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Failed
        )
    }

    /// Next step in the fulfillment sequence, if any.
    fn successor(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::SearchingProvider => Some(OrderStatus::ProviderAssigned),
            OrderStatus::ProviderAssigned => Some(OrderStatus::EnRoute),
            OrderStatus::EnRoute => Some(OrderStatus::Arrived),
            OrderStatus::Arrived => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Completed),
            OrderStatus::Completed | OrderStatus::Cancelled | OrderStatus::Failed => None,
        }
    }

    /// Whether a status update moving to `next` is legal from this status.
    ///
    /// Only the direct successor is accepted; backward, skipping, and
    /// duplicate transitions are rejected. Cancellation and failure are
    /// accepted from any non-terminal status.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            OrderStatus::Cancelled | OrderStatus::Failed => true,
            _ => self.successor() == Some(next),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The provider assigned to fulfill a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct Provider {
    pub name: String,
    pub phone: String,
    pub rating: f64,
}

/// A confirmed service booking and its evolving fulfillment state.
///
/// `service`, `amount`, `address`, and `description` are fixed at booking
/// time; `address` is a snapshot, so later profile edits never reach a placed
/// order. `provider` and `eta` stay `None` until an update supplies them.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: String,
    pub service: String,
    pub status: OrderStatus,
    pub provider: Option<Provider>,
    pub eta: Option<String>,
    pub amount: u32,
    pub address: super::Address,
    pub description: String,
}

impl Order {
    /// Folds a status update into the order.
    ///
    /// The caller is responsible for matching the order id and validating the
    /// transition first. `provider` and `eta` are merged only when the update
    /// carries them; an update without them never erases known values.
    pub fn fold_update(&mut self, update: OrderUpdate) {
        self.status = update.status;
        if let Some(provider) = update.provider {
            self.provider = Some(provider);
        }
        if let Some(eta) = update.eta {
            self.eta = Some(eta);
        }
    }
}

/// A single status-change event for an order. Consumed once, never stored.
#[derive(Debug, Clone)]
pub struct OrderUpdate {
    pub order_id: String,
    pub status: OrderStatus,
    pub provider: Option<Provider>,
    pub eta: Option<String>,
}

/// An archived history entry for a finished order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub id: String,
    pub service: String,
    pub provider: Option<String>,
    pub date: String,
    pub status: OrderStatus,
    pub amount: u32,
    pub rating: Option<u8>,
}

impl OrderRecord {
    pub fn from_order(order: &Order, date: String) -> Self {
        Self {
            id: order.id.clone(),
            service: order.service.clone(),
            provider: order.provider.as_ref().map(|p| p.name.clone()),
            date,
            status: order.status,
            amount: order.amount,
            rating: None,
        }
    }
}

/// Seed history shipped with the sample account.
pub fn sample_history() -> Vec<OrderRecord> {
    vec![OrderRecord {
        id: "order_001".to_string(),
        service: "Plumbing".to_string(),
        provider: Some("Rajesh Kumar".to_string()),
        date: "2025-08-20".to_string(),
        status: OrderStatus::Completed,
        amount: 800,
        rating: Some(5),
    }]
}
