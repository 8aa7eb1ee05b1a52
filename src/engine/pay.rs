use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::contract::{PayTerms, TripMetrics};
use crate::models::settlement::{GrossPay, PayLineItem};
use crate::money::{round_cents, sum_cents};

/// Price a trip under the given pay terms. Pure and idempotent, so it is
/// safe to call repeatedly for live previews while the trip is in progress.
pub fn compute_gross_pay(terms: &PayTerms, metrics: &TripMetrics) -> Result<GrossPay, AppError> {
    terms.validate()?;
    metrics.validate()?;

    let breakdown = match terms {
        PayTerms::PerMile { rate_per_mile } => {
            vec![line_item("miles", metrics.actual_miles, *rate_per_mile)]
        }
        PayTerms::PerCuft { rate_per_cuft } => {
            vec![line_item("cuft", metrics.total_cuft, *rate_per_cuft)]
        }
        PayTerms::PerMileAndCuft {
            rate_per_mile,
            rate_per_cuft,
        } => vec![
            line_item("miles", metrics.actual_miles, *rate_per_mile),
            line_item("cuft", metrics.total_cuft, *rate_per_cuft),
        ],
        PayTerms::PercentOfRevenue { percent_of_revenue } => {
            let amount =
                round_cents(metrics.total_revenue * *percent_of_revenue / Decimal::ONE_HUNDRED);
            vec![PayLineItem {
                component: "revenue_share".to_string(),
                quantity: metrics.total_revenue,
                rate: *percent_of_revenue,
                amount,
            }]
        }
        PayTerms::FlatDailyRate { flat_daily_rate } => vec![line_item(
            "days",
            Decimal::from(metrics.days_worked),
            *flat_daily_rate,
        )],
    };

    // Each line item is already cent-rounded; the total rounds once more so
    // summation cannot reintroduce sub-cent residue.
    let gross_pay = sum_cents(breakdown.iter().map(|item| item.amount));

    Ok(GrossPay {
        gross_pay,
        breakdown,
    })
}

fn line_item(component: &str, quantity: Decimal, rate: Decimal) -> PayLineItem {
    PayLineItem {
        component: component.to_string(),
        quantity,
        rate,
        amount: round_cents(quantity * rate),
    }
}
