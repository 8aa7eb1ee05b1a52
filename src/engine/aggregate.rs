use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::trip::{CollectionItem, ExpenseItem};
use crate::money::sum_cents;

/// Reimbursable expense total plus the items behind it, so callers can
/// render the same breakdown the total came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: Decimal,
    pub items: Vec<ExpenseItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub total: Decimal,
    pub items: Vec<CollectionItem>,
}

/// Sum the expenses the driver fronted out of pocket. Company-funded
/// payment methods are excluded; their money never left the carrier.
pub fn sum_reimbursable(expenses: &[ExpenseItem]) -> ExpenseSummary {
    let items: Vec<ExpenseItem> = expenses
        .iter()
        .filter(|item| item.paid_by.driver_funded())
        .cloned()
        .collect();
    let total = sum_cents(items.iter().map(|item| item.amount));

    ExpenseSummary { total, items }
}

/// Sum everything the driver collected at deliveries. Items are stored
/// decimal-exact; this only sums, it never recomputes.
pub fn sum_collections(collections: &[CollectionItem]) -> CollectionSummary {
    let items = collections.to_vec();
    let total = sum_cents(items.iter().map(|item| item.amount));

    CollectionSummary { total, items }
}
