use dashmap::DashMap;
use tokio::sync::{broadcast, mpsc};
use uuid::Uuid;

use crate::models::contract::PayContract;
use crate::models::delivery::{DeliveryLoad, PartnerCompany, PreDeliveryCheck};
use crate::models::dispute::{BalanceDispute, DriverNotification};
use crate::models::settlement::Settlement;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub companies: DashMap<Uuid, PartnerCompany>,
    pub contracts: DashMap<Uuid, PayContract>,
    pub loads: DashMap<Uuid, DeliveryLoad>,
    /// Final settlements only, keyed by trip. Previews are never stored.
    pub settlements: DashMap<Uuid, Settlement>,
    /// Last computed pre-delivery check per load; dropped on balance change.
    pub checks: DashMap<Uuid, PreDeliveryCheck>,
    pub disputes: DashMap<Uuid, BalanceDispute>,
    /// Open-dispute index, load id -> dispute id. One open dispute per load.
    pub open_disputes: DashMap<Uuid, Uuid>,
    pub notify_tx: mpsc::Sender<DriverNotification>,
    pub notification_events_tx: broadcast::Sender<DriverNotification>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(
        notify_queue_size: usize,
        event_buffer_size: usize,
    ) -> (Self, mpsc::Receiver<DriverNotification>) {
        let (notify_tx, notify_rx) = mpsc::channel(notify_queue_size);
        let (notification_events_tx, _unused_rx) = broadcast::channel(event_buffer_size);

        (
            Self {
                companies: DashMap::new(),
                contracts: DashMap::new(),
                loads: DashMap::new(),
                settlements: DashMap::new(),
                checks: DashMap::new(),
                disputes: DashMap::new(),
                open_disputes: DashMap::new(),
                notify_tx,
                notification_events_tx,
                metrics: Metrics::new(),
            },
            notify_rx,
        )
    }
}
