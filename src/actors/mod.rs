use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use crate::clients::OrderClient;
use crate::dispatch::UpdateSource;
use crate::domain::{
    catalog, sample_history, Address, Order, OrderRecord, OrderStatus, OrderUpdate,
    ServiceCategory, UserProfile,
};
use crate::error::{BookingError, OrderError};
use crate::messages::{BookingRequest, OrderRequest, ServiceResponse};
use crate::notify::{status_text, Notifier};

// =============================================================================
// ORDER SERVICE
// =============================================================================

/// The order service owns the single active order and its lifecycle.
///
/// Bookings enter through `ConfirmBooking`; every later status change enters
/// through `ApplyUpdate`, no matter which update source produced it. The
/// service is the only place order state is mutated, so delivery order on its
/// channel is the only ordering that matters.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    /// Used by update forwarders to feed source events back into the service.
    self_sender: mpsc::Sender<OrderRequest>,
    active: Option<Order>,
    history: Vec<OrderRecord>,
    catalog: Vec<ServiceCategory>,
    profile: UserProfile,
    dispatch: Arc<dyn UpdateSource>,
    notifier: Notifier,
    changes: watch::Sender<Option<Order>>,
    next_id_fn: Box<dyn Fn() -> String + Send + Sync>,
}

impl OrderService {
    /// Creates the service together with its client handle and a watch
    /// channel carrying the latest active-order snapshot (the "view should
    /// refresh" signal).
    pub fn new(
        buffer_size: usize,
        dispatch: Arc<dyn UpdateSource>,
        notifier: Notifier,
        profile: UserProfile,
        next_id_fn: impl Fn() -> String + Send + Sync + 'static,
    ) -> (Self, OrderClient, watch::Receiver<Option<Order>>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (changes, changes_rx) = watch::channel(None);
        let service = Self {
            receiver,
            self_sender: sender.clone(),
            active: None,
            history: sample_history(),
            catalog: catalog(),
            profile,
            dispatch,
            notifier,
            changes,
            next_id_fn: Box::new(next_id_fn),
        };
        let client = OrderClient::new(sender);
        (service, client, changes_rx)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::ConfirmBooking { request, respond_to } => {
                    self.handle_confirm_booking(request, respond_to);
                }
                OrderRequest::ApplyUpdate { update } => {
                    self.handle_apply_update(update);
                }
                OrderRequest::GetActiveOrder { respond_to } => {
                    self.handle_get_active_order(respond_to);
                }
                OrderRequest::GetHistory { respond_to } => {
                    self.handle_get_history(respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }
        info!("OrderService stopped");
    }

    #[instrument(fields(service_id = %request.service_id), skip(self, request, respond_to))]
    fn handle_confirm_booking(
        &mut self,
        request: BookingRequest,
        respond_to: ServiceResponse<Order, BookingError>,
    ) {
        info!("Processing confirm_booking request");

        if request.description.trim().is_empty() {
            error!("Issue description missing");
            let _ = respond_to.send(Err(BookingError::MissingDescription));
            return;
        }

        let service = match self.catalog.iter().find(|s| s.id == request.service_id) {
            Some(service) => service,
            None => {
                error!("Unknown service");
                let _ = respond_to.send(Err(BookingError::UnknownService(request.service_id)));
                return;
            }
        };
        if !service.available {
            error!(service = %service.name, "Service unavailable");
            let _ = respond_to.send(Err(BookingError::UnavailableService(service.name.clone())));
            return;
        }

        // Snapshot the address now; later profile edits must not reach a
        // placed order.
        let address: Address = match &request.address_id {
            Some(id) => match self.profile.addresses.iter().find(|a| &a.id == id) {
                Some(address) => address.clone(),
                None => {
                    error!(address_id = %id, "Unknown address");
                    let _ = respond_to.send(Err(BookingError::UnknownAddress(id.clone())));
                    return;
                }
            },
            None => match self.profile.default_address() {
                Some(address) => address.clone(),
                None => {
                    error!("Profile has no saved address");
                    let _ = respond_to.send(Err(BookingError::UnknownAddress("default".to_string())));
                    return;
                }
            },
        };

        if let Some(previous) = &self.active {
            warn!(superseded_id = %previous.id, "Superseding active order");
        }

        let id = (self.next_id_fn)();
        let order = Order {
            id: id.clone(),
            service: service.name.clone(),
            status: OrderStatus::SearchingProvider,
            provider: None,
            eta: None,
            amount: request.amount,
            address,
            description: request.description,
        };
        debug!(preferred_time = %request.preferred_time, "Booking details captured");

        self.active = Some(order.clone());
        let _ = self.changes.send(self.active.clone());
        self.spawn_update_forwarder(id.clone());

        info!(order_id = %id, service = %order.service, amount = order.amount, "Booking confirmed");
        let _ = respond_to.send(Ok(order));
    }

    /// Subscribes to the update source for a freshly booked order and pumps
    /// every event back into the service channel. The forwarder is never
    /// cancelled when the order is superseded; the stale no-op rule in
    /// `handle_apply_update` makes late delivery safe.
    fn spawn_update_forwarder(&self, order_id: String) {
        let mut updates = self.dispatch.subscribe(order_id);
        let sender = self.self_sender.clone();
        tokio::spawn(async move {
            while let Some(update) = updates.recv().await {
                if sender.send(OrderRequest::ApplyUpdate { update }).await.is_err() {
                    debug!("Order service closed; dropping remaining updates");
                    break;
                }
            }
        });
    }

    #[instrument(fields(order_id = %update.order_id, status = %update.status), skip(self, update))]
    fn handle_apply_update(&mut self, update: OrderUpdate) {
        let Some(order) = self.active.as_mut() else {
            debug!("No active order; dropping update");
            return;
        };
        if order.id != update.order_id {
            debug!(active_id = %order.id, "Stale update for superseded order; dropping");
            return;
        }
        if !order.status.can_transition_to(update.status) {
            warn!(from = %order.status, to = %update.status, "Ignoring out-of-order status update");
            return;
        }

        order.fold_update(update);
        let status = order.status;
        info!(status = %status, "Order updated");

        self.notifier.notify(
            "QuickFix",
            &format!("Order Update: {}", status_text(status.as_str())),
        );

        if status.is_terminal() {
            if let Some(finished) = self.active.take() {
                info!(order_id = %finished.id, status = %finished.status, "Archiving finished order");
                let date = chrono::Local::now().format("%Y-%m-%d").to_string();
                self.history.push(OrderRecord::from_order(&finished, date));
            }
        }
        let _ = self.changes.send(self.active.clone());
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_active_order(&self, respond_to: ServiceResponse<Option<Order>, OrderError>) {
        debug!("Processing get_active_order request");
        let _ = respond_to.send(Ok(self.active.clone()));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_get_history(&self, respond_to: ServiceResponse<Vec<OrderRecord>, OrderError>) {
        debug!("Processing get_history request");
        let _ = respond_to.send(Ok(self.history.clone()));
    }
}
