use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::Stream;
use tokio_stream::StreamExt;
use tonic::{Request, Response, Status};
use uuid::Uuid;

use crate::engine::cod;
use crate::engine::dispute::resolve_dispute;
use crate::engine::pay::compute_gross_pay;
use crate::error::AppError;
use crate::models::contract::TripMetrics;
use crate::models::delivery::{AlertLevel, CodOverrides};
use crate::models::dispute::{DisputeResolution, DriverNotification};
use crate::state::AppState;

pub mod pb {
    tonic::include_proto!("settlement");
}

use pb::settlement_service_server::SettlementService;
use pb::{
    GrossPayRequest, GrossPayResponse, NotificationEvent, PayLineItem, PreDeliveryRequest,
    PreDeliveryResponse, ResolveDisputeRequest, ResolveDisputeResponse,
    WatchNotificationsRequest,
};

pub struct GrpcSettlementService {
    state: Arc<AppState>,
}

impl GrpcSettlementService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

fn status_from(err: AppError) -> Status {
    match err {
        AppError::Validation(msg) | AppError::Configuration(msg) => Status::invalid_argument(msg),
        AppError::InvalidState(msg) | AppError::Conflict(msg) => Status::failed_precondition(msg),
        AppError::NotFound(msg) => Status::not_found(msg),
        AppError::Internal(msg) => Status::internal(msg),
    }
}

fn parse_uuid(raw: &str, field: &str) -> Result<Uuid, Status> {
    Uuid::parse_str(raw)
        .map_err(|err| Status::invalid_argument(format!("invalid {field}: {err}")))
}

fn parse_decimal(raw: &str, field: &str) -> Result<Decimal, Status> {
    Decimal::from_str(raw)
        .map_err(|err| Status::invalid_argument(format!("invalid {field}: {err}")))
}

fn notification_to_proto(n: &DriverNotification) -> NotificationEvent {
    NotificationEvent {
        driver_id: n.driver_id.to_string(),
        title: n.title.clone(),
        body: n.body.clone(),
        queued_at: n.queued_at.to_rfc3339(),
    }
}

#[tonic::async_trait]
impl SettlementService for GrpcSettlementService {
    async fn compute_gross_pay(
        &self,
        request: Request<GrossPayRequest>,
    ) -> Result<Response<GrossPayResponse>, Status> {
        let req = request.into_inner();
        let contract_id = parse_uuid(&req.contract_id, "contract_id")?;
        let metrics = req
            .metrics
            .ok_or_else(|| Status::invalid_argument("metrics are required"))?;

        let metrics = TripMetrics {
            actual_miles: parse_decimal(&metrics.actual_miles, "actual_miles")?,
            total_cuft: parse_decimal(&metrics.total_cuft, "total_cuft")?,
            total_revenue: parse_decimal(&metrics.total_revenue, "total_revenue")?,
            days_worked: metrics.days_worked,
        };

        let contract = self
            .state
            .contracts
            .get(&contract_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Status::not_found(format!("contract {contract_id} not found")))?;

        let gross = compute_gross_pay(&contract.terms, &metrics).map_err(status_from)?;

        Ok(Response::new(GrossPayResponse {
            gross_pay: gross.gross_pay.to_string(),
            breakdown: gross
                .breakdown
                .iter()
                .map(|item| PayLineItem {
                    component: item.component.clone(),
                    quantity: item.quantity.to_string(),
                    rate: item.rate.to_string(),
                    amount: item.amount.to_string(),
                })
                .collect(),
        }))
    }

    async fn evaluate_pre_delivery(
        &self,
        request: Request<PreDeliveryRequest>,
    ) -> Result<Response<PreDeliveryResponse>, Status> {
        let req = request.into_inner();
        let load_id = parse_uuid(&req.load_id, "load_id")?;

        let load = self
            .state
            .loads
            .get(&load_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Status::not_found(format!("load {load_id} not found")))?;

        let trust_level = self
            .state
            .companies
            .get(&load.company_id)
            .map(|company| company.trust_level)
            .ok_or_else(|| {
                Status::not_found(format!("company {} not found", load.company_id))
            })?;

        let overrides = CodOverrides {
            cod_received: req.cod_received,
            company_approved_exception: req.company_approved_exception,
        };

        let check = cod::evaluate(&load, trust_level, &overrides).map_err(status_from)?;

        let outcome = if check.requires_cod { "blocked" } else { "proceed" };
        self.state
            .metrics
            .predelivery_checks_total
            .with_label_values(&[outcome])
            .inc();
        self.state.checks.insert(load_id, check.clone());

        Ok(Response::new(PreDeliveryResponse {
            load_id: check.load_id.to_string(),
            carrier_rate: check.carrier_rate.to_string(),
            customer_balance: check.customer_balance.to_string(),
            shortfall: check.shortfall.to_string(),
            requires_cod: check.requires_cod,
            cod_amount_required: check.cod_amount_required.to_string(),
            status_message: check.status_message,
            action_required: check.action_required,
            alert_level: match check.alert_level {
                AlertLevel::Success => "success".to_string(),
                AlertLevel::Danger => "danger".to_string(),
            },
        }))
    }

    async fn resolve_dispute(
        &self,
        request: Request<ResolveDisputeRequest>,
    ) -> Result<Response<ResolveDisputeResponse>, Status> {
        let req = request.into_inner();
        let dispute_id = parse_uuid(&req.dispute_id, "dispute_id")?;

        let resolution = match req.resolution.as_str() {
            "confirmed_zero" => DisputeResolution::ConfirmedZero,
            "balance_updated" => {
                if req.new_balance.is_empty() {
                    return Err(Status::invalid_argument(
                        "new_balance is required for balance_updated",
                    ));
                }
                DisputeResolution::BalanceUpdated {
                    new_balance: parse_decimal(&req.new_balance, "new_balance")?,
                }
            }
            "cancelled" => DisputeResolution::Cancelled,
            other => {
                return Err(Status::invalid_argument(format!(
                    "unknown resolution: {other}, expected confirmed_zero/balance_updated/cancelled"
                )));
            }
        };

        let outcome = resolve_dispute(&self.state, dispute_id, resolution)
            .await
            .map_err(status_from)?;

        Ok(Response::new(ResolveDisputeResponse {
            dispute_id: outcome.dispute.id.to_string(),
            status: outcome.dispute.status.label().to_string(),
            updated_balance: outcome
                .updated_balance
                .map(|balance| balance.to_string())
                .unwrap_or_default(),
        }))
    }

    type WatchNotificationsStream =
        Pin<Box<dyn Stream<Item = Result<NotificationEvent, Status>> + Send>>;

    async fn watch_notifications(
        &self,
        _request: Request<WatchNotificationsRequest>,
    ) -> Result<Response<Self::WatchNotificationsStream>, Status> {
        let rx = self.state.notification_events_tx.subscribe();
        let stream = BroadcastStream::new(rx).filter_map(|result| match result {
            Ok(notification) => Some(Ok(notification_to_proto(&notification))),
            Err(_) => None,
        });

        Ok(Response::new(Box::pin(stream)))
    }
}
