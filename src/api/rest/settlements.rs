use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::pay::compute_gross_pay;
use crate::engine::settlement::assemble;
use crate::error::AppError;
use crate::models::contract::{PayContract, PayTerms, TripMetrics};
use crate::models::settlement::{GrossPay, Settlement, SettlementMode};
use crate::models::trip::{CollectionItem, ExpenseItem};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/contracts", post(create_contract))
        .route("/contracts/:id", get(get_contract))
        .route("/pay/gross", post(gross_pay))
        .route("/settlements", post(create_settlement))
        .route("/settlements/:trip_id", get(get_settlement))
}

#[derive(Deserialize)]
pub struct CreateContractRequest {
    pub driver_id: Uuid,
    #[serde(flatten)]
    pub terms: PayTerms,
}

async fn create_contract(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateContractRequest>,
) -> Result<Json<PayContract>, AppError> {
    payload.terms.validate()?;

    let contract = PayContract {
        id: Uuid::new_v4(),
        driver_id: payload.driver_id,
        terms: payload.terms,
        created_at: Utc::now(),
    };

    state.contracts.insert(contract.id, contract.clone());

    tracing::info!(
        contract_id = %contract.id,
        driver_id = %contract.driver_id,
        pay_mode = contract.terms.mode_label(),
        "pay contract registered"
    );

    Ok(Json(contract))
}

async fn get_contract(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PayContract>, AppError> {
    let contract = state
        .contracts
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("contract {} not found", id)))?;

    Ok(Json(contract.value().clone()))
}

#[derive(Deserialize)]
pub struct GrossPayRequest {
    pub contract_id: Uuid,
    pub metrics: TripMetrics,
}

async fn gross_pay(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GrossPayRequest>,
) -> Result<Json<GrossPay>, AppError> {
    let contract = state
        .contracts
        .get(&payload.contract_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            AppError::NotFound(format!("contract {} not found", payload.contract_id))
        })?;

    let gross = compute_gross_pay(&contract.terms, &payload.metrics)?;
    Ok(Json(gross))
}

#[derive(Deserialize)]
pub struct CreateSettlementRequest {
    pub trip_id: Uuid,
    pub contract_id: Uuid,
    pub metrics: TripMetrics,
    #[serde(default)]
    pub expenses: Vec<ExpenseItem>,
    #[serde(default)]
    pub collections: Vec<CollectionItem>,
    pub mode: SettlementMode,
}

async fn create_settlement(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateSettlementRequest>,
) -> Result<Json<Settlement>, AppError> {
    let contract = state
        .contracts
        .get(&payload.contract_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            AppError::NotFound(format!("contract {} not found", payload.contract_id))
        })?;

    let start = Instant::now();
    let settlement = assemble(
        payload.trip_id,
        &contract,
        &payload.metrics,
        &payload.expenses,
        &payload.collections,
        payload.mode,
    )?;

    // A trip settles once. The vacancy check runs under the entry guard so
    // two racing finals cannot both persist.
    if payload.mode == SettlementMode::Final {
        match state.settlements.entry(payload.trip_id) {
            Entry::Occupied(_) => {
                return Err(AppError::Conflict(format!(
                    "trip {} already has a final settlement",
                    payload.trip_id
                )));
            }
            Entry::Vacant(slot) => {
                slot.insert(settlement.clone());
            }
        }

        tracing::info!(
            trip_id = %payload.trip_id,
            driver_id = %settlement.driver_id,
            net_pay = %settlement.net_pay,
            "final settlement recorded"
        );
    }

    let mode_label = payload.mode.label();
    state
        .metrics
        .settlement_compute_seconds
        .with_label_values(&[mode_label])
        .observe(start.elapsed().as_secs_f64());
    state
        .metrics
        .settlements_total
        .with_label_values(&[mode_label])
        .inc();

    Ok(Json(settlement))
}

async fn get_settlement(
    State(state): State<Arc<AppState>>,
    Path(trip_id): Path<Uuid>,
) -> Result<Json<Settlement>, AppError> {
    let settlement = state
        .settlements
        .get(&trip_id)
        .ok_or_else(|| {
            AppError::NotFound(format!("no final settlement for trip {trip_id}"))
        })?;

    Ok(Json(settlement.value().clone()))
}
