use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::contract::TripMetrics;
use crate::models::trip::{CollectionItem, ExpenseItem};

/// Whether a settlement is a mid-trip estimate or the authoritative figure.
/// The computation is identical in both modes; the label only controls
/// whether the result is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementMode {
    Preview,
    Final,
}

impl SettlementMode {
    pub const fn label(self) -> &'static str {
        match self {
            SettlementMode::Preview => "preview",
            SettlementMode::Final => "final",
        }
    }
}

/// One itemized contribution to gross pay, rounded to the cent on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayLineItem {
    pub component: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
}

/// Gross pay plus the per-component breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossPay {
    pub gross_pay: Decimal,
    pub breakdown: Vec<PayLineItem>,
}

/// Net-pay snapshot for a driver over one trip.
/// Invariant: `net_pay == gross_pay + reimbursements - collections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    pub trip_id: Uuid,
    pub driver_id: Uuid,
    pub mode: SettlementMode,
    pub gross_pay: Decimal,
    pub pay_breakdown: Vec<PayLineItem>,
    pub reimbursements: Decimal,
    pub reimbursement_items: Vec<ExpenseItem>,
    pub collections: Decimal,
    pub collection_items: Vec<CollectionItem>,
    pub net_pay: Decimal,
    pub metrics: TripMetrics,
    pub computed_at: DateTime<Utc>,
}
