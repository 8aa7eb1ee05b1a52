use chrono::Utc;
use dashmap::mapref::entry::Entry;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::engine::notify::enqueue_notification;
use crate::error::AppError;
use crate::models::dispute::{
    BalanceDispute, DisputeResolution, DisputeStatus, DriverNotification,
};
use crate::state::AppState;

/// Result of a resolution: the terminal dispute plus the balance now in
/// effect for the load, when the resolution changed it.
#[derive(Debug, Clone)]
pub struct DisputeOutcome {
    pub dispute: BalanceDispute,
    pub updated_balance: Option<Decimal>,
}

/// Open a dispute on a load's balance. A load can carry at most one open
/// dispute; a second open attempt is rejected rather than superseding.
pub fn open_dispute(
    state: &AppState,
    load_id: Uuid,
    driver_id: Uuid,
    driver_note: String,
) -> Result<BalanceDispute, AppError> {
    let original_balance = state
        .loads
        .get(&load_id)
        .map(|load| load.balance_due_on_delivery)
        .ok_or_else(|| AppError::NotFound(format!("load {load_id} not found")))?;

    let dispute = BalanceDispute {
        id: Uuid::new_v4(),
        load_id,
        driver_id,
        original_balance,
        driver_note,
        status: DisputeStatus::Open,
        opened_at: Utc::now(),
        resolved_at: None,
    };

    // The index entry is the one-open-dispute-per-load gate; insertion only
    // happens through the vacant arm, so two racing opens cannot both win.
    match state.open_disputes.entry(load_id) {
        Entry::Occupied(_) => {
            return Err(AppError::Conflict(format!(
                "load {load_id} already has an open dispute"
            )));
        }
        Entry::Vacant(slot) => {
            slot.insert(dispute.id);
        }
    }

    state.disputes.insert(dispute.id, dispute.clone());

    info!(
        dispute_id = %dispute.id,
        load_id = %load_id,
        original_balance = %original_balance,
        "balance dispute opened"
    );

    Ok(dispute)
}

/// Resolve an open dispute exactly once. The status re-check happens inside
/// the map entry guard, so a second dispatcher racing the first is rejected
/// with InvalidState instead of overwriting the resolution.
pub async fn resolve_dispute(
    state: &AppState,
    dispute_id: Uuid,
    resolution: DisputeResolution,
) -> Result<DisputeOutcome, AppError> {
    // A bad amount must leave the dispute open, so validate before touching it.
    if let DisputeResolution::BalanceUpdated { new_balance } = &resolution {
        if *new_balance < Decimal::ZERO {
            return Err(AppError::Validation(
                "new_balance must be non-negative".to_string(),
            ));
        }
    }

    let (dispute, updated_balance, notification) = {
        let mut entry = state
            .disputes
            .get_mut(&dispute_id)
            .ok_or_else(|| AppError::NotFound(format!("dispute {dispute_id} not found")))?;

        if entry.status.is_terminal() {
            return Err(AppError::InvalidState(format!(
                "dispute {dispute_id} is already {}",
                entry.status.label()
            )));
        }

        if !state.loads.contains_key(&entry.load_id) {
            return Err(AppError::NotFound(format!(
                "load {} for dispute {dispute_id} not found",
                entry.load_id
            )));
        }

        let (status, updated_balance, title, body) = match &resolution {
            DisputeResolution::ConfirmedZero => (
                DisputeStatus::ConfirmedZero,
                Some(Decimal::ZERO),
                "Balance dispute resolved".to_string(),
                format!(
                    "Dispatch confirmed a zero balance for load {}. Nothing to collect at delivery.",
                    entry.load_id
                ),
            ),
            DisputeResolution::BalanceUpdated { new_balance } => (
                DisputeStatus::BalanceUpdated,
                Some(*new_balance),
                "Balance dispute resolved".to_string(),
                format!(
                    "Dispatch corrected the balance for load {} to ${new_balance}.",
                    entry.load_id
                ),
            ),
            DisputeResolution::Cancelled => (
                DisputeStatus::Cancelled,
                None,
                "Balance dispute closed".to_string(),
                format!(
                    "Dispatch reviewed load {}; the original balance of ${} stands.",
                    entry.load_id, entry.original_balance
                ),
            ),
        };

        entry.status = status;
        entry.resolved_at = Some(Utc::now());
        let dispute = entry.clone();

        // Apply the balance effect and drop the now-stale cached check while
        // the dispute entry is still held, so no reader can observe a
        // terminal dispute with the old balance still served.
        if let Some(balance) = updated_balance {
            if let Some(mut load) = state.loads.get_mut(&dispute.load_id) {
                load.balance_due_on_delivery = balance;
                load.balance_revision += 1;
            }
            state.checks.remove(&dispute.load_id);
        }

        state.open_disputes.remove(&dispute.load_id);

        let notification = DriverNotification {
            driver_id: dispute.driver_id,
            title,
            body,
            queued_at: Utc::now(),
        };

        (dispute, updated_balance, notification)
    };

    enqueue_notification(state, notification).await?;

    state
        .metrics
        .disputes_resolved_total
        .with_label_values(&[dispute.status.label()])
        .inc();

    info!(
        dispute_id = %dispute.id,
        load_id = %dispute.load_id,
        outcome = dispute.status.label(),
        "balance dispute resolved"
    );

    Ok(DisputeOutcome {
        dispute,
        updated_balance,
    })
}
