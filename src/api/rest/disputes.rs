use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::engine::dispute::{open_dispute, resolve_dispute};
use crate::error::AppError;
use crate::models::dispute::{BalanceDispute, DisputeResolution};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/loads/:id/disputes", post(create_dispute))
        .route("/disputes/:id", get(get_dispute))
        .route("/disputes/:id/resolve", post(resolve))
}

#[derive(Deserialize)]
pub struct CreateDisputeRequest {
    pub driver_id: Uuid,
    #[serde(default)]
    pub note: String,
}

async fn create_dispute(
    State(state): State<Arc<AppState>>,
    Path(load_id): Path<Uuid>,
    Json(payload): Json<CreateDisputeRequest>,
) -> Result<Json<BalanceDispute>, AppError> {
    let dispute = open_dispute(&state, load_id, payload.driver_id, payload.note)?;
    Ok(Json(dispute))
}

async fn get_dispute(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BalanceDispute>, AppError> {
    let dispute = state
        .disputes
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("dispute {} not found", id)))?;

    Ok(Json(dispute.value().clone()))
}

#[derive(Serialize)]
pub struct ResolveDisputeResponse {
    pub dispute: BalanceDispute,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_balance: Option<Decimal>,
}

async fn resolve(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(resolution): Json<DisputeResolution>,
) -> Result<Json<ResolveDisputeResponse>, AppError> {
    let outcome = resolve_dispute(&state, id, resolution).await?;

    Ok(Json(ResolveDisputeResponse {
        dispute: outcome.dispute,
        updated_balance: outcome.updated_balance,
    }))
}
