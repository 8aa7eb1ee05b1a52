use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::delivery::{AlertLevel, CodOverrides, DeliveryLoad, PreDeliveryCheck, TrustLevel};
use crate::money::round_cents;

/// Decide whether a load may be unloaded or payment must be collected from
/// the partner company first.
///
/// A trusted partner may owe the carrier the shortfall after delivery; a
/// cod_required partner must pre-fund it or the driver does not unload.
/// Stateless: the caller re-runs this whenever the load's balance changes.
pub fn evaluate(
    load: &DeliveryLoad,
    trust_level: TrustLevel,
    overrides: &CodOverrides,
) -> Result<PreDeliveryCheck, AppError> {
    let rate_per_cuft = load.effective_rate_per_cuft().ok_or_else(|| {
        AppError::Validation(format!("load {} has no cuft rate configured", load.id))
    })?;

    for (field, value) in [
        ("actual_cuft_loaded", load.actual_cuft_loaded),
        ("rate_per_cuft", rate_per_cuft),
        (
            "contract_accessorials_total",
            load.contract_accessorials_total,
        ),
    ] {
        if value < Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "{field} must be non-negative"
            )));
        }
    }

    let carrier_rate =
        round_cents(load.actual_cuft_loaded * rate_per_cuft + load.contract_accessorials_total);
    let customer_balance = load.balance_due_on_delivery;
    let shortfall = round_cents(carrier_rate - customer_balance);

    let requires_cod = trust_level == TrustLevel::CodRequired
        && shortfall > Decimal::ZERO
        && !overrides.cod_received
        && !overrides.company_approved_exception;
    let cod_amount_required = if requires_cod { shortfall } else { Decimal::ZERO };

    let (status_message, action_required, alert_level) = if overrides.cod_received {
        (
            "COD already received from the partner company.".to_string(),
            "Collect the customer balance and proceed with unloading.".to_string(),
            AlertLevel::Success,
        )
    } else if overrides.company_approved_exception {
        (
            "Company approved an exception for this delivery.".to_string(),
            "Collect the customer balance and proceed with unloading.".to_string(),
            AlertLevel::Success,
        )
    } else {
        match (trust_level, shortfall > Decimal::ZERO) {
            (TrustLevel::Trusted, true) => (
                format!(
                    "Trusted partner; the remaining ${shortfall} settles after delivery."
                ),
                "Collect the customer balance and proceed with unloading.".to_string(),
                AlertLevel::Success,
            ),
            (TrustLevel::Trusted, false) | (TrustLevel::CodRequired, false) => (
                "Customer balance covers the carrier rate.".to_string(),
                "Collect the customer balance and proceed with unloading.".to_string(),
                AlertLevel::Success,
            ),
            (TrustLevel::CodRequired, true) => (
                format!(
                    "Partner company must pre-fund ${shortfall} before this load moves."
                ),
                format!(
                    "Do not unload. Collect ${shortfall} from the partner company first."
                ),
                AlertLevel::Danger,
            ),
        }
    };

    Ok(PreDeliveryCheck {
        load_id: load.id,
        carrier_rate,
        customer_balance,
        shortfall,
        requires_cod,
        cod_amount_required,
        status_message,
        action_required,
        alert_level,
        balance_revision: load.balance_revision,
        computed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::evaluate;
    use crate::error::AppError;
    use crate::models::delivery::{AlertLevel, CodOverrides, DeliveryLoad, TrustLevel};

    fn load(cuft: Decimal, rate: Decimal, balance: Decimal) -> DeliveryLoad {
        DeliveryLoad {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            actual_cuft_loaded: cuft,
            rate_per_cuft: Some(rate),
            contract_rate_per_cuft: None,
            contract_accessorials_total: dec!(0),
            balance_due_on_delivery: balance,
            balance_revision: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn trusted_partner_may_owe_the_shortfall() {
        // 1000 cuft at 2.50 -> carrier_rate 2500.00, balance 1800.00.
        let load = load(dec!(1000), dec!(2.50), dec!(1800.00));
        let check = evaluate(&load, TrustLevel::Trusted, &CodOverrides::default()).unwrap();

        assert_eq!(check.carrier_rate, dec!(2500.00));
        assert_eq!(check.shortfall, dec!(700.00));
        assert!(!check.requires_cod);
        assert_eq!(check.cod_amount_required, Decimal::ZERO);
        assert_eq!(check.alert_level, AlertLevel::Success);
    }

    #[test]
    fn untrusted_partner_with_shortfall_blocks_unloading() {
        let load = load(dec!(1000), dec!(2.50), dec!(1800.00));
        let check = evaluate(&load, TrustLevel::CodRequired, &CodOverrides::default()).unwrap();

        assert!(check.requires_cod);
        assert_eq!(check.cod_amount_required, dec!(700.00));
        assert_eq!(check.alert_level, AlertLevel::Danger);
        assert!(check.action_required.starts_with("Do not unload"));
    }

    #[test]
    fn untrusted_partner_without_shortfall_proceeds() {
        let load = load(dec!(1000), dec!(2.50), dec!(2600.00));
        let check = evaluate(&load, TrustLevel::CodRequired, &CodOverrides::default()).unwrap();

        assert_eq!(check.shortfall, dec!(-100.00));
        assert!(!check.requires_cod);
        assert_eq!(check.alert_level, AlertLevel::Success);
    }

    #[test]
    fn cod_received_clears_the_requirement_regardless_of_shortfall() {
        let load = load(dec!(1000), dec!(2.50), dec!(0));
        let overrides = CodOverrides {
            cod_received: true,
            company_approved_exception: false,
        };
        let check = evaluate(&load, TrustLevel::CodRequired, &overrides).unwrap();

        assert!(!check.requires_cod);
        assert_eq!(check.cod_amount_required, Decimal::ZERO);
        assert_eq!(check.alert_level, AlertLevel::Success);
    }

    #[test]
    fn approved_exception_clears_the_requirement() {
        let load = load(dec!(1000), dec!(2.50), dec!(0));
        let overrides = CodOverrides {
            cod_received: false,
            company_approved_exception: true,
        };
        let check = evaluate(&load, TrustLevel::CodRequired, &overrides).unwrap();

        assert!(!check.requires_cod);
        assert_eq!(check.alert_level, AlertLevel::Success);
    }

    #[test]
    fn danger_case_never_reads_as_success() {
        let load = load(dec!(500), dec!(3.00), dec!(100.00));
        let check = evaluate(&load, TrustLevel::CodRequired, &CodOverrides::default()).unwrap();

        assert!(check.requires_cod);
        assert_eq!(check.alert_level, AlertLevel::Danger);
        assert!(!check.status_message.to_lowercase().contains("proceed"));
    }

    #[test]
    fn contract_rate_wins_over_listed_rate() {
        let mut load = load(dec!(1000), dec!(2.00), dec!(1800.00));
        load.contract_rate_per_cuft = Some(dec!(2.50));

        let check = evaluate(&load, TrustLevel::Trusted, &CodOverrides::default()).unwrap();
        assert_eq!(check.carrier_rate, dec!(2500.00));
    }

    #[test]
    fn accessorials_raise_the_carrier_rate() {
        let mut load = load(dec!(1000), dec!(2.50), dec!(1800.00));
        load.contract_accessorials_total = dec!(150.00);

        let check = evaluate(&load, TrustLevel::CodRequired, &CodOverrides::default()).unwrap();
        assert_eq!(check.carrier_rate, dec!(2650.00));
        assert_eq!(check.cod_amount_required, dec!(850.00));
    }

    #[test]
    fn missing_rate_is_a_validation_error() {
        let mut load = load(dec!(1000), dec!(2.50), dec!(1800.00));
        load.rate_per_cuft = None;
        load.contract_rate_per_cuft = None;

        let err = evaluate(&load, TrustLevel::Trusted, &CodOverrides::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
