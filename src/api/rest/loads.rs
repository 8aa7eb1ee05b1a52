use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::cod;
use crate::error::AppError;
use crate::models::delivery::{CodOverrides, DeliveryLoad, PreDeliveryCheck};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/loads", post(create_load))
        .route("/loads/:id", get(get_load))
        .route(
            "/loads/:id/pre-delivery-check",
            post(run_pre_delivery_check).get(get_cached_check),
        )
}

#[derive(Deserialize)]
pub struct CreateLoadRequest {
    pub company_id: Uuid,
    pub actual_cuft_loaded: Decimal,
    pub rate_per_cuft: Option<Decimal>,
    pub contract_rate_per_cuft: Option<Decimal>,
    #[serde(default)]
    pub contract_accessorials_total: Decimal,
    pub balance_due_on_delivery: Decimal,
}

async fn create_load(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLoadRequest>,
) -> Result<Json<DeliveryLoad>, AppError> {
    if !state.companies.contains_key(&payload.company_id) {
        return Err(AppError::NotFound(format!(
            "company {} not found",
            payload.company_id
        )));
    }

    if payload.rate_per_cuft.is_none() && payload.contract_rate_per_cuft.is_none() {
        return Err(AppError::Validation(
            "a cuft rate is required: rate_per_cuft or contract_rate_per_cuft".to_string(),
        ));
    }

    for (field, value) in [
        ("actual_cuft_loaded", Some(payload.actual_cuft_loaded)),
        ("rate_per_cuft", payload.rate_per_cuft),
        ("contract_rate_per_cuft", payload.contract_rate_per_cuft),
        (
            "contract_accessorials_total",
            Some(payload.contract_accessorials_total),
        ),
        (
            "balance_due_on_delivery",
            Some(payload.balance_due_on_delivery),
        ),
    ] {
        if let Some(value) = value {
            if value < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "{field} must be non-negative"
                )));
            }
        }
    }

    let load = DeliveryLoad {
        id: Uuid::new_v4(),
        company_id: payload.company_id,
        actual_cuft_loaded: payload.actual_cuft_loaded,
        rate_per_cuft: payload.rate_per_cuft,
        contract_rate_per_cuft: payload.contract_rate_per_cuft,
        contract_accessorials_total: payload.contract_accessorials_total,
        balance_due_on_delivery: payload.balance_due_on_delivery,
        balance_revision: 0,
        created_at: Utc::now(),
    };

    state.loads.insert(load.id, load.clone());
    Ok(Json(load))
}

async fn get_load(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryLoad>, AppError> {
    let load = state
        .loads
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("load {} not found", id)))?;

    Ok(Json(load.value().clone()))
}

async fn run_pre_delivery_check(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(overrides): Json<CodOverrides>,
) -> Result<Json<PreDeliveryCheck>, AppError> {
    let load = state
        .loads
        .get(&id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("load {} not found", id)))?;

    let trust_level = state
        .companies
        .get(&load.company_id)
        .map(|company| company.trust_level)
        .ok_or_else(|| AppError::NotFound(format!("company {} not found", load.company_id)))?;

    let check = cod::evaluate(&load, trust_level, &overrides)?;

    let outcome = if check.requires_cod { "blocked" } else { "proceed" };
    state
        .metrics
        .predelivery_checks_total
        .with_label_values(&[outcome])
        .inc();

    tracing::info!(
        load_id = %id,
        requires_cod = check.requires_cod,
        shortfall = %check.shortfall,
        "pre-delivery check computed"
    );

    state.checks.insert(id, check.clone());
    Ok(Json(check))
}

/// Serve the last computed check, but only while it still matches the load's
/// balance revision. A corrected balance makes the cache vanish here.
async fn get_cached_check(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PreDeliveryCheck>, AppError> {
    let current_revision = state
        .loads
        .get(&id)
        .map(|load| load.balance_revision)
        .ok_or_else(|| AppError::NotFound(format!("load {} not found", id)))?;

    let check = state
        .checks
        .get(&id)
        .filter(|check| check.balance_revision == current_revision)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "no current pre-delivery check for load {id}; recompute required"
            ))
        })?;

    Ok(Json(check))
}
