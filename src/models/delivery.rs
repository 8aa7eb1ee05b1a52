use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partner company standing. A trusted partner may owe the carrier money
/// after delivery; a cod_required partner must pre-fund any shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    Trusted,
    CodRequired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerCompany {
    pub id: Uuid,
    pub name: String,
    pub trust_level: TrustLevel,
    pub updated_at: DateTime<Utc>,
}

/// Financials for one load about to be delivered. `contract_rate_per_cuft`
/// wins over `rate_per_cuft` when both are present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryLoad {
    pub id: Uuid,
    pub company_id: Uuid,
    pub actual_cuft_loaded: Decimal,
    pub rate_per_cuft: Option<Decimal>,
    pub contract_rate_per_cuft: Option<Decimal>,
    pub contract_accessorials_total: Decimal,
    pub balance_due_on_delivery: Decimal,
    /// Bumped on every balance correction so cached checks are identifiably stale.
    pub balance_revision: u32,
    pub created_at: DateTime<Utc>,
}

impl DeliveryLoad {
    pub fn effective_rate_per_cuft(&self) -> Option<Decimal> {
        self.contract_rate_per_cuft.or(self.rate_per_cuft)
    }
}

/// Dispatcher-side flags that short-circuit the COD requirement.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CodOverrides {
    #[serde(default)]
    pub cod_received: bool,
    #[serde(default)]
    pub company_approved_exception: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Success,
    Danger,
}

/// Unload-or-withhold instruction computed for one load. Never persisted as
/// truth; it must be recomputed whenever the load's balance changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreDeliveryCheck {
    pub load_id: Uuid,
    pub carrier_rate: Decimal,
    pub customer_balance: Decimal,
    pub shortfall: Decimal,
    pub requires_cod: bool,
    pub cod_amount_required: Decimal,
    pub status_message: String,
    pub action_required: String,
    pub alert_level: AlertLevel,
    pub balance_revision: u32,
    pub computed_at: DateTime<Utc>,
}
