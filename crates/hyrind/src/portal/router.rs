use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;

use super::api;
use super::domain::{IntakeUpdate, Notice, UserId, UserRole};
use super::forms::{InterestSubmission, Registration, RegistrationRole};
use super::navigation::{DashboardView, Navigation, Route};
use super::service::PortalService;
use super::store::PortalStore;
use super::views::{self, public, BillingStep, PageContext};
use super::workspace::Session;

/// Pages, form actions and the JSON API over one shared [`PortalService`].
/// Paths that match nothing render the landing page.
pub fn portal_router(service: Arc<PortalService>) -> Router {
    Router::new()
        .route("/", get(root_page))
        .route("/:fragment", get(page))
        .route("/actions/login", post(login_action))
        .route("/actions/logout", post(logout_action))
        .route("/actions/interest", post(interest_action))
        .route("/actions/register", post(register_action))
        .route("/actions/toggle-status", post(toggle_status_action))
        .route("/actions/assign-recruiter", post(assign_recruiter_action))
        .route("/actions/subscribe", post(subscribe_action))
        .route("/actions/intake", post(intake_action))
        .route("/actions/upload-document", post(upload_document_action))
        .route("/actions/payment-link", post(payment_link_action))
        .route("/actions/password", post(password_action))
        .route("/actions/recruiter-profile", post(recruiter_profile_action))
        .merge(api::api_routes())
        .fallback(landing_fallback)
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PageQuery {
    view: Option<String>,
    step: Option<String>,
    plan: Option<String>,
    #[serde(rename = "as")]
    register_as: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginForm {
    role: UserRole,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ToggleStatusForm {
    id: UserId,
    role: UserRole,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AssignRecruiterForm {
    candidate_id: UserId,
    #[serde(default)]
    recruiter_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubscribeForm {
    plan_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadForm {
    #[serde(default)]
    file_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaymentLinkForm {
    candidate_id: UserId,
}

async fn root_page(
    State(service): State<Arc<PortalService>>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    render(&service, Route::Landing, page_query(query))
}

// Undecodable fragments and malformed queries still render a page.
async fn page(
    State(service): State<Arc<PortalService>>,
    fragment: Result<Path<String>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    let route = match fragment {
        Ok(Path(fragment)) => Route::from_fragment(&fragment),
        Err(_) => Route::Landing,
    };
    render(&service, route, page_query(query))
}

fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> PageQuery {
    query.map(|Query(query)| query).unwrap_or_default()
}

async fn landing_fallback(State(service): State<Arc<PortalService>>) -> Response {
    render(&service, Route::Landing, PageQuery::default())
}

/// Resolve the route against the session, then render with any pending
/// notices. A session-less dashboard visit redirects without rendering.
fn render(service: &PortalService, route: Route, query: PageQuery) -> Response {
    service.write(|store| match store.navigate(route) {
        Navigation::Deferred(target) => Redirect::to(target.path()).into_response(),
        Navigation::Render(route) => {
            if route == Route::Dashboard {
                if let Some(view) = query.view.as_deref() {
                    store.select_view(DashboardView::from_tag(view));
                }
            }
            let context = PageContext {
                notices: store.take_notices(),
                register_as: RegistrationRole::from_query(query.register_as.as_deref()),
                billing_step: BillingStep::from_query(query.step.as_deref(), query.plan.as_deref()),
            };
            Html(views::render_route(store, route, &context)).into_response()
        }
    })
}

fn to_view(view: DashboardView) -> Redirect {
    Redirect::to(&view.href())
}

fn signed_in_candidate(store: &PortalStore) -> Option<UserId> {
    match store.session()? {
        Session::Candidate { id } => Some(id.clone()),
        Session::Admin(_) | Session::Recruiter { .. } => None,
    }
}

async fn login_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<LoginForm>,
) -> Redirect {
    service.write(|store| {
        store.login(form.role);
        Redirect::to(store.route().path())
    })
}

async fn logout_action(State(service): State<Arc<PortalService>>) -> Redirect {
    service.write(|store| {
        store.logout();
        Redirect::to(store.route().path())
    })
}

async fn interest_action(
    State(service): State<Arc<PortalService>>,
    Form(submission): Form<InterestSubmission>,
) -> Html<String> {
    service.read(|store| store.submit_interest(&submission));
    Html(views::document(
        "Interest Received",
        &[],
        &public::interest_received(),
    ))
}

async fn register_action(
    State(service): State<Arc<PortalService>>,
    Form(registration): Form<Registration>,
) -> Redirect {
    service.write(|store| {
        let notice = store.register(&registration);
        store.push_notice(notice);
    });
    Redirect::to(Route::Login.path())
}

async fn toggle_status_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<ToggleStatusForm>,
) -> Redirect {
    service.write(|store| store.toggle_status(&form.id, form.role));
    match form.role {
        UserRole::Recruiter => to_view(DashboardView::Recruiters),
        _ => to_view(DashboardView::Candidates),
    }
}

async fn assign_recruiter_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<AssignRecruiterForm>,
) -> Redirect {
    service.write(|store| {
        store.assign_recruiter(&form.candidate_id, &form.recruiter_id);
    });
    to_view(DashboardView::Candidates)
}

async fn subscribe_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<SubscribeForm>,
) -> Redirect {
    let today = service.today();
    service.write(|store| {
        let Some(candidate_id) = signed_in_candidate(store) else {
            return Redirect::to(Route::Login.path());
        };
        if store
            .update_subscription(&candidate_id, &form.plan_id, today)
            .is_some()
        {
            store.push_notice(Notice::new("Payment Successful! Subscription Active."));
        }
        to_view(DashboardView::Billing)
    })
}

async fn intake_action(
    State(service): State<Arc<PortalService>>,
    Form(update): Form<IntakeUpdate>,
) -> Redirect {
    service.write(|store| {
        let Some(candidate_id) = signed_in_candidate(store) else {
            return Redirect::to(Route::Login.path());
        };
        if store.update_profile_intake(&candidate_id, update).is_some() {
            store.push_notice(Notice::new("Profile Intake Updated Successfully"));
        }
        to_view(DashboardView::Profile)
    })
}

async fn upload_document_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<UploadForm>,
) -> Redirect {
    service.write(|store| {
        let Some(candidate_id) = signed_in_candidate(store) else {
            return Redirect::to(Route::Login.path());
        };
        let file_name = form.file_name.trim();
        if !file_name.is_empty() {
            let notice = store.upload_document(&candidate_id, file_name);
            store.push_notice(notice);
        }
        to_view(DashboardView::Documents)
    })
}

async fn payment_link_action(
    State(service): State<Arc<PortalService>>,
    Form(form): Form<PaymentLinkForm>,
) -> Redirect {
    service.write(|store| {
        if let Some(notice) = store.send_payment_link(&form.candidate_id) {
            store.push_notice(notice);
        }
    });
    to_view(DashboardView::Candidates)
}

async fn password_action(State(service): State<Arc<PortalService>>) -> Redirect {
    service.write(|store| {
        let notice = store.update_password();
        store.push_notice(notice);
    });
    to_view(DashboardView::Settings)
}

async fn recruiter_profile_action(State(service): State<Arc<PortalService>>) -> Redirect {
    service.write(|store| {
        let notice = store.save_recruiter_profile();
        store.push_notice(notice);
    });
    to_view(DashboardView::Profile)
}
