use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Pay terms keyed by mode. Each variant carries only the rates its mode
/// uses, so a contract can never hold a stray rate for a mode it is not in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pay_mode", rename_all = "snake_case")]
pub enum PayTerms {
    PerMile {
        rate_per_mile: Decimal,
    },
    PerCuft {
        rate_per_cuft: Decimal,
    },
    PerMileAndCuft {
        rate_per_mile: Decimal,
        rate_per_cuft: Decimal,
    },
    PercentOfRevenue {
        percent_of_revenue: Decimal,
    },
    FlatDailyRate {
        flat_daily_rate: Decimal,
    },
}

impl PayTerms {
    pub const fn mode_label(&self) -> &'static str {
        match self {
            PayTerms::PerMile { .. } => "per_mile",
            PayTerms::PerCuft { .. } => "per_cuft",
            PayTerms::PerMileAndCuft { .. } => "per_mile_and_cuft",
            PayTerms::PercentOfRevenue { .. } => "percent_of_revenue",
            PayTerms::FlatDailyRate { .. } => "flat_daily_rate",
        }
    }

    /// A negative rate can only come from a misconfigured contract, so it
    /// blocks settlement instead of silently pricing the trip at zero.
    pub fn validate(&self) -> Result<(), AppError> {
        match self {
            PayTerms::PerMile { rate_per_mile } => require_rate("rate_per_mile", *rate_per_mile),
            PayTerms::PerCuft { rate_per_cuft } => require_rate("rate_per_cuft", *rate_per_cuft),
            PayTerms::PerMileAndCuft {
                rate_per_mile,
                rate_per_cuft,
            } => {
                require_rate("rate_per_mile", *rate_per_mile)?;
                require_rate("rate_per_cuft", *rate_per_cuft)
            }
            PayTerms::PercentOfRevenue { percent_of_revenue } => {
                require_rate("percent_of_revenue", *percent_of_revenue)
            }
            PayTerms::FlatDailyRate { flat_daily_rate } => {
                require_rate("flat_daily_rate", *flat_daily_rate)
            }
        }
    }
}

fn require_rate(field: &str, rate: Decimal) -> Result<(), AppError> {
    if rate < Decimal::ZERO {
        return Err(AppError::Configuration(format!(
            "{field} must be non-negative"
        )));
    }
    Ok(())
}

/// Per-driver pay contract. Registered once by a dispatcher and immutable
/// afterwards; a trip it has priced always reprices identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayContract {
    pub id: Uuid,
    pub driver_id: Uuid,
    #[serde(flatten)]
    pub terms: PayTerms,
    pub created_at: DateTime<Utc>,
}

/// Trip totals derived from completed loads. Read-only input to pay math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripMetrics {
    pub actual_miles: Decimal,
    pub total_cuft: Decimal,
    pub total_revenue: Decimal,
    pub days_worked: u32,
}

impl TripMetrics {
    pub fn validate(&self) -> Result<(), AppError> {
        for (field, value) in [
            ("actual_miles", self.actual_miles),
            ("total_cuft", self.total_cuft),
            ("total_revenue", self.total_revenue),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "{field} must be non-negative"
                )));
            }
        }
        Ok(())
    }
}
