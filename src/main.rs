mod actors;
mod app_system;
mod clients;
mod dispatch;
mod domain;
mod error;
mod location;
mod messages;
mod notify;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, Instrument};
use crate::app_system::{setup_tracing, BookingSystem};
use crate::location::{fetch_startup_location, SimulatedLocation};
use crate::messages::BookingRequest;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting QuickFix booking system");

    let system = BookingSystem::new();

    // Best-effort one-shot location fetch; the booking flow works without it.
    fetch_startup_location(&SimulatedLocation);

    let request = BookingRequest {
        service_id: "plumbing".to_string(),
        description: "Kitchen sink is leaking under the counter".to_string(),
        preferred_time: "ASAP (30 mins)".to_string(),
        address_id: None,
        amount: 800,
    };

    let span = tracing::info_span!("booking_flow");
    let order = async {
        info!("Confirming booking");
        system
            .order_client
            .confirm_booking(request)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(
        order_id = %order.id,
        status = %order.status,
        "Booking confirmed; waiting for provider assignment"
    );

    // Watch order snapshots until the simulated dispatch assigns a provider.
    let mut changes = system.changes.clone();
    let span = tracing::info_span!("order_tracking");
    async {
        loop {
            if changes.changed().await.is_err() {
                break;
            }
            let snapshot = changes.borrow_and_update().clone();
            if let Some(order) = snapshot {
                info!(status = %order.status, "Order changed");
                if let Some(provider) = &order.provider {
                    info!(
                        provider = %provider.name,
                        rating = provider.rating,
                        eta = order.eta.as_deref().unwrap_or("unknown"),
                        "Provider assigned"
                    );
                    break;
                }
            }
        }
    }
    .instrument(span)
    .await;

    match system.order_client.active_order().await {
        Ok(Some(order)) => info!(order_id = %order.id, status = %order.status, "Active order snapshot"),
        Ok(None) => info!("No active order"),
        Err(e) => error!(error = %e, "Failed to fetch active order"),
    }

    match system.order_client.order_history().await {
        Ok(history) => info!(orders = history.len(), "Order history loaded"),
        Err(e) => error!(error = %e, "Failed to fetch order history"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
