use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{patch, post};
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::delivery::{PartnerCompany, TrustLevel};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/companies", post(create_company).get(list_companies))
        .route("/companies/:id/trust", patch(update_trust_level))
}

#[derive(Deserialize)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub trust_level: TrustLevel,
}

#[derive(Deserialize)]
pub struct UpdateTrustRequest {
    pub trust_level: TrustLevel,
}

async fn create_company(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateCompanyRequest>,
) -> Result<Json<PartnerCompany>, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let company = PartnerCompany {
        id: Uuid::new_v4(),
        name: payload.name,
        trust_level: payload.trust_level,
        updated_at: Utc::now(),
    };

    state.companies.insert(company.id, company.clone());
    Ok(Json(company))
}

async fn list_companies(State(state): State<Arc<AppState>>) -> Json<Vec<PartnerCompany>> {
    let companies = state
        .companies
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(companies)
}

async fn update_trust_level(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTrustRequest>,
) -> Result<Json<PartnerCompany>, AppError> {
    let mut company = state
        .companies
        .get_mut(&id)
        .ok_or_else(|| AppError::NotFound(format!("company {} not found", id)))?;

    company.trust_level = payload.trust_level;
    company.updated_at = Utc::now();

    Ok(Json(company.clone()))
}
