use axum::http::{header, Method, StatusCode};
use chrono::Duration;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::portal::domain::SubscriptionStatus;
use crate::portal::portal_router;

#[tokio::test]
async fn unknown_path_renders_landing() {
    let app = portal_router(service());

    for uri in [
        "/",
        "/nowhere",
        "/deep/unknown/path",
        "/%FF",
        "/landing?view=a&view=b",
        "/?view=a&view=b",
    ] {
        let response = app.clone().oneshot(get(uri)).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let body = read_body(response).await;
        assert!(body.contains("Launch Your Career"), "{uri}");
    }
}

#[tokio::test]
async fn dashboard_without_session_redirects_with_empty_body() {
    let app = portal_router(service());

    let response = app.oneshot(get("/dashboard")).await.expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    assert!(read_body(response).await.is_empty());
}

#[tokio::test]
async fn candidate_login_then_subscribe_updates_billing() {
    let service = service();
    let app = portal_router(service.clone());

    let response = app
        .clone()
        .oneshot(form_post("/actions/login", "role=CANDIDATE"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let response = app
        .clone()
        .oneshot(get("/dashboard?view=billing&plan=plan-pro"))
        .await
        .expect("response");
    let body = read_body(response).await;
    assert!(body.contains("Confirm Subscription"));

    let response = app
        .clone()
        .oneshot(form_post("/actions/subscribe", "plan_id=plan-pro"))
        .await
        .expect("response");
    assert_eq!(location(&response), "/dashboard?view=billing");

    let body = read_body(app.clone().oneshot(get("/dashboard")).await.expect("response")).await;
    assert!(body.contains("Payment Successful! Subscription Active."));
    assert!(body.contains("<h2>Pro Aggressive</h2>"));

    let body = read_body(app.oneshot(get("/dashboard")).await.expect("response")).await;
    assert!(!body.contains("Payment Successful!"));

    let next_billing = service.read(|store| {
        store
            .candidate(&id("cand-1"))
            .and_then(|candidate| candidate.next_billing_date)
    });
    assert_eq!(next_billing, Some(today() + Duration::days(30)));
}

#[tokio::test]
async fn subscribe_without_candidate_session_goes_to_login() {
    let service = service();
    let app = portal_router(service.clone());

    let response = app
        .oneshot(form_post("/actions/subscribe", "plan_id=plan-pro"))
        .await
        .expect("response");
    assert_eq!(location(&response), "/login");

    let untouched = service.read(|store| {
        store
            .candidates()
            .iter()
            .filter(|candidate| candidate.subscription_status == SubscriptionStatus::Active)
            .count()
    });
    assert_eq!(untouched, 1);
}

#[tokio::test]
async fn upload_without_a_file_name_is_not_acknowledged() {
    let app = portal_router(service());

    app.clone()
        .oneshot(form_post("/actions/login", "role=CANDIDATE"))
        .await
        .expect("response");
    let response = app
        .clone()
        .oneshot(form_post("/actions/upload-document", "file_name=+"))
        .await
        .expect("response");
    assert_eq!(location(&response), "/dashboard?view=documents");

    let body = read_body(
        app.oneshot(get("/dashboard?view=documents"))
            .await
            .expect("response"),
    )
    .await;
    assert!(!body.contains("successfully! (Mock)"));
    assert!(body.contains("name=\"file_name\" placeholder=\"resume.pdf\" required"));
}

#[tokio::test]
async fn logout_returns_to_landing_and_locks_the_dashboard() {
    let app = portal_router(service());

    app.clone()
        .oneshot(form_post("/actions/login", "role=ADMIN"))
        .await
        .expect("response");
    let response = app
        .clone()
        .oneshot(form_post("/actions/logout", ""))
        .await
        .expect("response");
    assert_eq!(location(&response), "/landing");

    let response = app.oneshot(get("/dashboard")).await.expect("response");
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn interest_submission_renders_confirmation() {
    let app = portal_router(service());

    let response = app
        .oneshot(form_post(
            "/actions/interest",
            "first_name=Ana&last_name=Diaz&email=ana%40uni.edu&university=NEU&major=CS&graduation_date=2024-05-01&visa_status=F-1+OPT",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(read_body(response).await.contains("Interest Received!"));
}

#[tokio::test]
async fn registration_notice_appears_on_login_page() {
    let app = portal_router(service());

    let response = app
        .clone()
        .oneshot(form_post(
            "/actions/register",
            "role=recruiter&first_name=Jo&last_name=Ng&email=jo%40hyrind.com&password=pw",
        ))
        .await
        .expect("response");
    assert_eq!(location(&response), "/login");

    let body = read_body(app.oneshot(get("/login")).await.expect("response")).await;
    assert!(body.contains("Registration Successful for jo@hyrind.com as RECRUITER. Please login."));
}

#[tokio::test]
async fn register_page_honours_role_toggle() {
    let app = portal_router(service());

    let body = read_body(
        app.oneshot(get("/register?as=recruiter"))
            .await
            .expect("response"),
    )
    .await;
    assert!(body.contains("name=\"role\" value=\"recruiter\""));
    assert!(!body.contains("name=\"university\""));
}

#[tokio::test]
async fn admin_form_actions_redirect_back_to_their_tables() {
    let service = service();
    let app = portal_router(service.clone());

    let response = app
        .clone()
        .oneshot(form_post(
            "/actions/assign-recruiter",
            "candidate_id=cand-1&recruiter_id=rec-2",
        ))
        .await
        .expect("response");
    assert_eq!(location(&response), "/dashboard?view=candidates");

    let response = app
        .oneshot(form_post("/actions/toggle-status", "id=rec-2&role=RECRUITER"))
        .await
        .expect("response");
    assert_eq!(location(&response), "/dashboard?view=recruiters");

    service.read(|store| {
        let candidate = store.candidate(&id("cand-1")).expect("seeded");
        assert_eq!(candidate.assigned_recruiter_id, Some(id("rec-2")));
        let recruiter = store.recruiter(&id("rec-2")).expect("seeded");
        assert!(!recruiter.profile.is_active);
    });
}

#[tokio::test]
async fn api_toggle_status_reports_new_flag_or_not_found() {
    let app = portal_router(service());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/admin/toggle-status",
            json!({ "id": "cand-1", "role": "CANDIDATE" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["is_active"], json!(false));

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/admin/toggle-status",
            json!({ "id": "cand-404", "role": "CANDIDATE" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_subscribe_and_intake_return_updated_candidate() {
    let app = portal_router(service());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/payments/subscribe",
            json!({ "candidate_id": "cand-1", "plan_id": "plan-basic" }),
        ))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["candidate"]["plan_id"], json!("plan-basic"));
    assert_eq!(body["candidate"]["status"], json!("ACTIVE"));
    assert_eq!(body["candidate"]["next_billing_date"], json!("2024-03-31"));

    let response = app
        .oneshot(json_request(
            Method::PUT,
            "/api/candidates/cand-1/intake",
            json!({ "linkedin_url": "https://linkedin.com/in/rahul" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(
        body["candidate"]["intake"]["linkedin_url"],
        json!("https://linkedin.com/in/rahul")
    );
    assert_eq!(body["candidate"]["intake"]["phone"], json!("555-0199"));
}

#[tokio::test]
async fn api_summary_and_export_reflect_seed_data() {
    let app = portal_router(service());

    let response = app
        .clone()
        .oneshot(get("/api/admin/summary"))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["summary"]["total_candidates"], json!(4));
    assert_eq!(body["summary"]["monthly_revenue"], json!(300));
    assert_eq!(body["plan_distribution"].as_array().map(Vec::len), Some(3));

    let response = app
        .oneshot(get("/api/admin/candidates/export"))
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/csv; charset=utf-8")
    );
    let csv = read_body(response).await;
    assert_eq!(csv.lines().count(), 5);
}

#[tokio::test]
async fn api_acknowledgements_are_returned_in_the_body() {
    let app = portal_router(service());

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/documents/upload",
            json!({ "candidate_id": "cand-1", "file_name": "i20.pdf" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        read_json_body(response).await["message"],
        json!("Uploaded i20.pdf successfully! (Mock)")
    );

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/admin/trigger-payment",
            json!({ "candidate_id": "cand-3" }),
        ))
        .await
        .expect("response");
    assert_eq!(
        read_json_body(response).await["message"],
        json!("Payment link sent to m.ross@usc.edu")
    );
}
