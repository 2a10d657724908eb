use std::sync::Arc;
use tracing::{debug, info};

/// Maps a wire status to the text shown to the customer.
///
/// Total: statuses this build does not know about are displayed verbatim, so
/// a newer backend can ship statuses ahead of the app.
pub fn status_text(status: &str) -> &str {
    match status {
        "searching_provider" => "Finding provider",
        "provider_assigned" => "Provider assigned",
        "en_route" => "Provider on the way",
        "arrived" => "Provider arrived",
        "in_progress" => "Work in progress",
        "completed" => "Service completed",
        "cancelled" => "Booking cancelled",
        "failed" => "Booking failed",
        other => other,
    }
}

/// Delivery backend for user-facing notifications (the platform toast
/// surface in production).
pub trait NotificationSink: Send + Sync {
    /// Best-effort delivery. Errors are reported so the notifier can log
    /// them, never surfaced further.
    fn deliver(&self, title: &str, body: &str) -> Result<(), String>;
}

/// Sink that logs notifications instead of raising OS toasts.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn deliver(&self, title: &str, body: &str) -> Result<(), String> {
        info!(title = %title, body = %body, "Notification");
        Ok(())
    }
}

/// Permission-gated, fire-and-forget notification capability.
///
/// The grant is decided outside the app (the platform permission prompt) and
/// fixed at construction. A denied grant or a failing sink downgrades every
/// `notify` to a debug log; nothing propagates to the caller.
#[derive(Clone)]
pub struct Notifier {
    granted: bool,
    sink: Arc<dyn NotificationSink>,
}

impl Notifier {
    pub fn new(granted: bool, sink: Arc<dyn NotificationSink>) -> Self {
        Self { granted, sink }
    }

    pub fn notify(&self, title: &str, body: &str) {
        if !self.granted {
            debug!("Notification permission not granted; dropping");
            return;
        }
        if let Err(e) = self.sink.deliver(title, body) {
            debug!(error = %e, "Notification delivery failed");
        }
    }
}
