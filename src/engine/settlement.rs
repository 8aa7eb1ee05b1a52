use chrono::Utc;
use uuid::Uuid;

use crate::engine::aggregate::{sum_collections, sum_reimbursable};
use crate::engine::pay::compute_gross_pay;
use crate::error::AppError;
use crate::models::contract::{PayContract, TripMetrics};
use crate::models::settlement::{Settlement, SettlementMode};
use crate::models::trip::{CollectionItem, ExpenseItem};
use crate::money::round_cents;

/// Compose gross pay, reimbursements, and collections into a settlement.
///
/// Previews and final settlements run this exact function; a mid-trip
/// estimate shown to a driver must be the figure settlement later confirms.
/// Persistence of final settlements is the caller's concern.
pub fn assemble(
    trip_id: Uuid,
    contract: &PayContract,
    metrics: &TripMetrics,
    expenses: &[ExpenseItem],
    collections: &[CollectionItem],
    mode: SettlementMode,
) -> Result<Settlement, AppError> {
    for expense in expenses {
        expense.validate()?;
    }
    for collection in collections {
        collection.validate()?;
    }

    let gross = compute_gross_pay(&contract.terms, metrics)?;
    let reimbursed = sum_reimbursable(expenses);
    let collected = sum_collections(collections);

    let net_pay = round_cents(gross.gross_pay + reimbursed.total - collected.total);

    Ok(Settlement {
        trip_id,
        driver_id: contract.driver_id,
        mode,
        gross_pay: gross.gross_pay,
        pay_breakdown: gross.breakdown,
        reimbursements: reimbursed.total,
        reimbursement_items: reimbursed.items,
        collections: collected.total,
        collection_items: collected.items,
        net_pay,
        metrics: metrics.clone(),
        computed_at: Utc::now(),
    })
}
