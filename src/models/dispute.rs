use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisputeStatus {
    Open,
    ConfirmedZero,
    BalanceUpdated,
    Cancelled,
}

impl DisputeStatus {
    pub const fn is_terminal(self) -> bool {
        !matches!(self, DisputeStatus::Open)
    }

    pub const fn label(self) -> &'static str {
        match self {
            DisputeStatus::Open => "open",
            DisputeStatus::ConfirmedZero => "confirmed_zero",
            DisputeStatus::BalanceUpdated => "balance_updated",
            DisputeStatus::Cancelled => "cancelled",
        }
    }
}

/// A driver's claim that a load's balance due is wrong. At most one open
/// dispute may exist per load; terminal states are final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceDispute {
    pub id: Uuid,
    pub load_id: Uuid,
    pub driver_id: Uuid,
    pub original_balance: Decimal,
    pub driver_note: String,
    pub status: DisputeStatus,
    pub opened_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

/// Dispatcher's resolution. `confirmed_zero` is kept apart from
/// `balance_updated(0)` because it carries different notification copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "resolution", rename_all = "snake_case")]
pub enum DisputeResolution {
    ConfirmedZero,
    BalanceUpdated { new_balance: Decimal },
    Cancelled,
}

/// Message handed to the notification relay for delivery to a driver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverNotification {
    pub driver_id: Uuid,
    pub title: String,
    pub body: String,
    pub queued_at: DateTime<Utc>,
}
