use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::dispute::DriverNotification;
use crate::state::AppState;

pub async fn enqueue_notification(
    state: &AppState,
    notification: DriverNotification,
) -> Result<(), AppError> {
    state
        .notify_tx
        .send(notification)
        .await
        .map_err(|err| AppError::Internal(format!("notification queue send failed: {err}")))?;

    state.metrics.notifications_in_queue.inc();
    Ok(())
}

/// Hands queued driver notifications to the delivery boundary (here: the
/// structured log plus the event channel feeding /ws and the gRPC watch
/// stream). The push-notification transport itself lives outside the engine.
pub async fn run_notification_relay(
    state: Arc<AppState>,
    mut notify_rx: mpsc::Receiver<DriverNotification>,
) {
    info!("notification relay started");

    while let Some(notification) = notify_rx.recv().await {
        state.metrics.notifications_in_queue.dec();

        info!(
            driver_id = %notification.driver_id,
            title = %notification.title,
            "driver notified"
        );

        let _ = state.notification_events_tx.send(notification);
    }

    warn!("notification relay stopped: queue channel closed");
}
