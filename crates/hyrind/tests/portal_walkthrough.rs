use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use hyrind::portal::{
    portal_router, CandidateStatus, PortalService, PortalStore, Route, SubscriptionStatus, UserId,
    UserRole,
};
use tower::ServiceExt;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

fn app() -> (Router, Arc<PortalService>) {
    let service = Arc::new(PortalService::new(PortalStore::seeded()).pinned_to(fixed_today()));
    (portal_router(service.clone()), service)
}

async fn send(app: &Router, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, String) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request builds"))
        .await
        .expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn fragments_map_to_pages_and_fall_back_to_landing() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/interest", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Candidate Interest Form"));

    let (_, body) = send(&app, Method::GET, "/login", None).await;
    assert!(body.contains("Welcome Back"));

    let (_, body) = send(&app, Method::GET, "/pricing", None).await;
    assert!(body.contains("Launch Your Career"));
}

#[tokio::test]
async fn admin_walkthrough_manages_candidates() {
    let (app, service) = app();

    let (status, _) = send(&app, Method::POST, "/actions/login", Some("role=ADMIN")).await;
    assert_eq!(status, StatusCode::SEE_OTHER);

    let (_, overview) = send(&app, Method::GET, "/dashboard", None).await;
    assert!(overview.contains("<h3>4</h3>"));
    assert!(overview.contains("<h3>$300</h3>"));

    send(
        &app,
        Method::POST,
        "/actions/payment-link",
        Some("candidate_id=cand-1"),
    )
    .await;
    let (_, candidates) = send(&app, Method::GET, "/dashboard?view=candidates", None).await;
    assert!(candidates.contains("Payment link sent to rahul.s@university.edu"));

    send(
        &app,
        Method::POST,
        "/actions/toggle-status",
        Some("id=cand-2&role=CANDIDATE"),
    )
    .await;
    send(
        &app,
        Method::POST,
        "/actions/assign-recruiter",
        Some("candidate_id=cand-4&recruiter_id="),
    )
    .await;

    service.read(|store| {
        let emily = store.candidate(&UserId::from("cand-2")).expect("seeded");
        assert!(!emily.profile.is_active);
        let priya = store.candidate(&UserId::from("cand-4")).expect("seeded");
        assert_eq!(priya.assigned_recruiter_id, None);
        assert_eq!(store.summary().active_marketing, 0);
    });
}

#[tokio::test]
async fn candidate_walkthrough_completes_onboarding() {
    let (app, service) = app();

    send(&app, Method::POST, "/actions/login", Some("role=CANDIDATE")).await;

    let (_, home) = send(&app, Method::GET, "/dashboard", None).await;
    assert!(home.contains("Welcome to HYRIND!"));
    assert!(home.contains("Select Marketing Plan"));

    let (_, _) = send(
        &app,
        Method::POST,
        "/actions/intake",
        Some("target_roles=Backend+Engineer&skills=Rust"),
    )
    .await;
    let (_, intake) = send(&app, Method::GET, "/dashboard?view=profile", None).await;
    assert!(intake.contains("Profile Intake Updated Successfully"));
    assert!(intake.contains("value=\"Backend Engineer\""));

    send(
        &app,
        Method::POST,
        "/actions/upload-document",
        Some("file_name=transcript.pdf"),
    )
    .await;
    let (_, documents) = send(&app, Method::GET, "/dashboard?view=documents", None).await;
    assert!(documents.contains("Uploaded transcript.pdf successfully! (Mock)"));

    send(
        &app,
        Method::POST,
        "/actions/subscribe",
        Some("plan_id=plan-premium"),
    )
    .await;

    service.read(|store| {
        let rahul = store.candidate(&UserId::from("cand-1")).expect("seeded");
        assert_eq!(rahul.status, CandidateStatus::Active);
        assert_eq!(rahul.subscription_status, SubscriptionStatus::Active);
        assert_eq!(
            rahul.next_billing_date,
            NaiveDate::from_ymd_opt(2024, 7, 15)
        );
        assert_eq!(store.summary().monthly_revenue, 800);
    });

    let (_, home) = send(&app, Method::GET, "/dashboard?view=dashboard", None).await;
    assert!(!home.contains("Welcome to HYRIND!"));
}

#[tokio::test]
async fn recruiter_sees_only_active_assigned_candidates() {
    let (app, service) = app();

    service.write(|store| {
        store.toggle_status(&UserId::from("cand-4"), UserRole::Candidate);
    });
    send(&app, Method::POST, "/actions/login", Some("role=RECRUITER")).await;

    let (_, caseload) = send(&app, Method::GET, "/dashboard?view=candidates", None).await;
    assert!(caseload.contains("Welcome, Sarah Jenkins"));
    assert!(caseload.contains("Emily Chen"));
    assert!(!caseload.contains("Priya Patel"));

    service.read(|store| assert_eq!(store.route(), Route::Dashboard));
}
