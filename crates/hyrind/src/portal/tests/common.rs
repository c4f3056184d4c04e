use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::portal::domain::UserId;
use crate::portal::service::PortalService;
use crate::portal::store::PortalStore;
use crate::portal::workspace::CandidateDesk;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

pub(super) fn id(raw: &str) -> UserId {
    UserId::from(raw)
}

pub(super) fn store() -> PortalStore {
    PortalStore::seeded()
}

pub(super) fn service() -> Arc<PortalService> {
    Arc::new(PortalService::new(store()).pinned_to(today()))
}

/// Workspace for an arbitrary candidate, bypassing the demo login which
/// always picks the first record.
pub(super) fn candidate_desk<'a>(store: &'a PortalStore, candidate_id: &str) -> CandidateDesk<'a> {
    CandidateDesk {
        candidate: store
            .candidate(&id(candidate_id))
            .expect("seeded candidate"),
        recruiters: store.recruiters(),
        plans: store.plans(),
        documents: store.documents(),
    }
}

pub(super) fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

pub(super) fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

pub(super) fn json_request(method: Method, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

pub(super) fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header")
}

pub(super) async fn read_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
