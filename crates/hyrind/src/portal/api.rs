use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{IntakeUpdate, UserId, UserRole};
use super::export::roster_csv;
use super::service::PortalService;
use super::summary::plan_distribution;
use crate::error::AppError;

/// JSON surface for the store commands. Unknown ids leave state untouched
/// and answer 404.
pub(crate) fn api_routes() -> Router<Arc<PortalService>> {
    Router::new()
        .route("/api/admin/toggle-status", post(toggle_status))
        .route("/api/admin/assign-recruiter", post(assign_recruiter))
        .route("/api/admin/trigger-payment", post(trigger_payment))
        .route("/api/admin/summary", get(admin_summary))
        .route("/api/admin/candidates/export", get(export_roster))
        .route("/api/payments/subscribe", post(subscribe))
        .route("/api/candidates/:candidate_id/intake", put(update_intake))
        .route("/api/documents/upload", post(upload_document))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleStatusRequest {
    pub id: UserId,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssignRecruiterRequest {
    pub candidate_id: UserId,
    #[serde(default)]
    pub recruiter_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubscribeRequest {
    pub candidate_id: UserId,
    pub plan_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadRequest {
    pub candidate_id: UserId,
    pub file_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentLinkRequest {
    pub candidate_id: UserId,
}

fn not_found(kind: &str, id: &UserId) -> Response {
    let payload = json!({
        "error": format!("{kind} '{id}' not found"),
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

pub(crate) async fn toggle_status(
    State(service): State<Arc<PortalService>>,
    Json(request): Json<ToggleStatusRequest>,
) -> Response {
    match service.write(|store| store.toggle_status(&request.id, request.role)) {
        Some(is_active) => {
            let payload = json!({
                "id": request.id,
                "role": request.role,
                "is_active": is_active,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => not_found("account", &request.id),
    }
}

pub(crate) async fn assign_recruiter(
    State(service): State<Arc<PortalService>>,
    Json(request): Json<AssignRecruiterRequest>,
) -> Response {
    let updated = service.write(|store| {
        store
            .assign_recruiter(&request.candidate_id, &request.recruiter_id)
            .cloned()
    });
    match updated {
        Some(candidate) => (StatusCode::OK, Json(candidate)).into_response(),
        None => not_found("candidate", &request.candidate_id),
    }
}

pub(crate) async fn subscribe(
    State(service): State<Arc<PortalService>>,
    Json(request): Json<SubscribeRequest>,
) -> Response {
    let today = service.today();
    let updated = service.write(|store| {
        store
            .update_subscription(&request.candidate_id, &request.plan_id, today)
            .cloned()
    });
    match updated {
        Some(candidate) => {
            let payload = json!({
                "message": "Payment Successful! Subscription Active.",
                "candidate": candidate,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => not_found("candidate", &request.candidate_id),
    }
}

pub(crate) async fn update_intake(
    State(service): State<Arc<PortalService>>,
    Path(candidate_id): Path<String>,
    Json(update): Json<IntakeUpdate>,
) -> Response {
    let id = UserId(candidate_id);
    let updated = service.write(|store| store.update_profile_intake(&id, update).cloned());
    match updated {
        Some(candidate) => {
            let payload = json!({
                "message": "Profile Intake Updated Successfully",
                "candidate": candidate,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => not_found("candidate", &id),
    }
}

pub(crate) async fn upload_document(
    State(service): State<Arc<PortalService>>,
    Json(request): Json<UploadRequest>,
) -> Response {
    let notice = service.read(|store| store.upload_document(&request.candidate_id, &request.file_name));
    (StatusCode::ACCEPTED, Json(json!({ "message": notice.message }))).into_response()
}

pub(crate) async fn trigger_payment(
    State(service): State<Arc<PortalService>>,
    Json(request): Json<PaymentLinkRequest>,
) -> Response {
    match service.read(|store| store.send_payment_link(&request.candidate_id)) {
        Some(notice) => (StatusCode::ACCEPTED, Json(json!({ "message": notice.message }))).into_response(),
        None => not_found("candidate", &request.candidate_id),
    }
}

pub(crate) async fn admin_summary(State(service): State<Arc<PortalService>>) -> Response {
    let payload = service.read(|store| {
        json!({
            "summary": store.summary(),
            "plan_distribution": plan_distribution(store.candidates(), store.plans()),
            "revenue": store.revenue(),
        })
    });
    (StatusCode::OK, Json(payload)).into_response()
}

pub(crate) async fn export_roster(
    State(service): State<Arc<PortalService>>,
) -> Result<Response, AppError> {
    let csv = service.read(|store| roster_csv(store.candidates(), store.recruiters(), store.plans()))?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"candidates.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
