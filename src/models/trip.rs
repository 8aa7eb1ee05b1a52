use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Who fronted the money for an expense. Only driver-funded items are
/// reimbursable; a company card is carrier money from the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaidBy {
    DriverCash,
    DriverCard,
    CompanyCard,
    CompanyFuelAccount,
}

impl PaidBy {
    pub const fn driver_funded(self) -> bool {
        matches!(self, PaidBy::DriverCash | PaidBy::DriverCard)
    }
}

/// Expense recorded by a driver during a trip. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub id: Uuid,
    pub amount: Decimal,
    pub expense_type: String,
    pub paid_by: PaidBy,
    pub incurred_at: DateTime<Utc>,
    pub receipt_key: String,
}

impl ExpenseItem {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "expense {} amount must be non-negative",
                self.id
            )));
        }
        if self.receipt_key.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "expense {} is missing a receipt reference",
                self.id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    Cash,
    Check,
}

/// Money a driver took in at a delivery. Reduces net pay because the driver
/// is holding carrier money until settlement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionItem {
    pub load_id: Uuid,
    pub amount: Decimal,
    pub method: CollectionMethod,
    pub collected_at: DateTime<Utc>,
}

impl CollectionItem {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.amount < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "collection for load {} must be non-negative",
                self.load_id
            )));
        }
        Ok(())
    }
}
