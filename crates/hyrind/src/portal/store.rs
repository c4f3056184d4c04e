use chrono::{Duration, NaiveDate};
use tracing::{debug, info};

use super::domain::{
    Candidate, CandidateStatus, Document, IntakeUpdate, MetricPoint, Notice, PlanCatalog,
    Recruiter, SubscriptionStatus, UserId, UserProfile, UserRole,
};
use super::forms::{InterestSubmission, Registration};
use super::navigation::{self, DashboardView, Navigation, Route};
use super::seed;
use super::summary::AdminSummary;
use super::workspace::{AdminDesk, CandidateDesk, RecruiterDesk, Session, Workspace};

pub const DEFAULT_BILLING_CYCLE_DAYS: u32 = 30;

/// Single owner of all portal state. Views borrow it read-only; every change
/// goes through one of the command methods below.
#[derive(Debug, Clone)]
pub struct PortalStore {
    admin: UserProfile,
    plans: PlanCatalog,
    documents: Vec<Document>,
    revenue: Vec<MetricPoint>,
    candidates: Vec<Candidate>,
    recruiters: Vec<Recruiter>,
    session: Option<Session>,
    route: Route,
    view: DashboardView,
    notices: Vec<Notice>,
    billing_cycle_days: u32,
}

impl Default for PortalStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl PortalStore {
    pub fn seeded() -> Self {
        Self {
            admin: seed::admin_account(),
            plans: seed::marketing_plans(),
            documents: seed::documents(),
            revenue: seed::revenue_series(),
            candidates: seed::candidates(),
            recruiters: seed::recruiters(),
            session: None,
            route: Route::Landing,
            view: DashboardView::Dashboard,
            notices: Vec::new(),
            billing_cycle_days: DEFAULT_BILLING_CYCLE_DAYS,
        }
    }

    pub fn with_billing_cycle(mut self, days: u32) -> Self {
        self.billing_cycle_days = days;
        self
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn recruiters(&self) -> &[Recruiter] {
        &self.recruiters
    }

    pub fn plans(&self) -> &PlanCatalog {
        &self.plans
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn revenue(&self) -> &[MetricPoint] {
        &self.revenue
    }

    pub fn admin(&self) -> &UserProfile {
        &self.admin
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn view(&self) -> DashboardView {
        self.view
    }

    pub fn candidate(&self, id: &UserId) -> Option<&Candidate> {
        self.candidates.iter().find(|candidate| candidate.id() == id)
    }

    pub fn recruiter(&self, id: &UserId) -> Option<&Recruiter> {
        self.recruiters.iter().find(|recruiter| recruiter.id() == id)
    }

    pub fn summary(&self) -> AdminSummary {
        AdminSummary::compute(&self.candidates, &self.recruiters, &self.plans)
    }

    /// Resolve the session into the role-scoped workspace, if the session
    /// still points at a stored record.
    pub fn workspace(&self) -> Option<Workspace<'_>> {
        match self.session.as_ref()? {
            Session::Admin(admin) => Some(Workspace::Admin(AdminDesk {
                admin,
                candidates: &self.candidates,
                recruiters: &self.recruiters,
                plans: &self.plans,
                revenue: &self.revenue,
            })),
            Session::Recruiter { id } => self.recruiter(id).map(|recruiter| {
                Workspace::Recruiter(RecruiterDesk {
                    recruiter,
                    candidates: &self.candidates,
                })
            }),
            Session::Candidate { id } => self.candidate(id).map(|candidate| {
                Workspace::Candidate(CandidateDesk {
                    candidate,
                    recruiters: &self.recruiters,
                    plans: &self.plans,
                    documents: &self.documents,
                })
            }),
        }
    }

    pub fn navigate(&mut self, route: Route) -> Navigation {
        let navigation = navigation::resolve(route, self.workspace().is_some());
        match navigation {
            Navigation::Render(target) => self.route = target,
            Navigation::Deferred(target) => {
                debug!(
                    requested = route.fragment(),
                    target = target.fragment(),
                    "no session; deferring to login"
                );
                self.route = target;
            }
        }
        navigation
    }

    pub fn select_view(&mut self, view: DashboardView) {
        self.view = view;
    }

    /// Demo sign-in: picks the deterministic seed account for `role`.
    /// Visitors leave the session untouched.
    pub fn login(&mut self, role: UserRole) -> Option<&Session> {
        let session = match role {
            UserRole::Admin => Some(Session::Admin(self.admin.clone())),
            UserRole::Recruiter => self.recruiters.first().map(|recruiter| Session::Recruiter {
                id: recruiter.id().clone(),
            }),
            UserRole::Candidate => self.candidates.first().map(|candidate| Session::Candidate {
                id: candidate.id().clone(),
            }),
            UserRole::Visitor => None,
        };

        if let Some(session) = session {
            info!(role = role.code(), "signed in");
            self.session = Some(session);
        }

        self.view = DashboardView::Dashboard;
        self.navigate(Route::Dashboard);
        self.session.as_ref()
    }

    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(role = session.role().code(), "signed out");
        }
        self.navigate(Route::Landing);
    }

    /// Flip the active flag on the matching record. Returns the new value.
    pub fn toggle_status(&mut self, id: &UserId, role: UserRole) -> Option<bool> {
        let flag = match role {
            UserRole::Candidate => self
                .candidates
                .iter_mut()
                .find(|candidate| candidate.id() == id)
                .map(|candidate| &mut candidate.profile.is_active),
            UserRole::Recruiter => self
                .recruiters
                .iter_mut()
                .find(|recruiter| recruiter.id() == id)
                .map(|recruiter| &mut recruiter.profile.is_active),
            UserRole::Admin | UserRole::Visitor => None,
        };

        match flag {
            Some(flag) => {
                *flag = !*flag;
                info!(%id, role = role.code(), is_active = *flag, "toggled account status");
                Some(*flag)
            }
            None => {
                debug!(%id, role = role.code(), "toggle ignored; no matching account");
                None
            }
        }
    }

    /// Sets the assignment unconditionally; an empty id unassigns. The id is
    /// not checked against the recruiter list.
    pub fn assign_recruiter(
        &mut self,
        candidate_id: &UserId,
        recruiter_id: &str,
    ) -> Option<&Candidate> {
        let candidate = self.candidate_mut(candidate_id)?;
        candidate.assigned_recruiter_id = if recruiter_id.is_empty() {
            None
        } else {
            Some(UserId::from(recruiter_id))
        };
        info!(
            candidate = %candidate_id,
            recruiter = recruiter_id,
            "updated recruiter assignment"
        );
        Some(&*candidate)
    }

    /// Simulated successful payment. A known plan activates the subscription,
    /// moves an onboarding candidate to active and stamps the next billing
    /// date; an unknown plan only flips the subscription flag.
    pub fn update_subscription(
        &mut self,
        candidate_id: &UserId,
        plan_id: &str,
        today: NaiveDate,
    ) -> Option<&Candidate> {
        let plan = self.plans.find(plan_id).cloned();
        let cycle = Duration::days(i64::from(self.billing_cycle_days));
        let candidate = self.candidate_mut(candidate_id)?;

        candidate.subscription_status = SubscriptionStatus::Active;
        match plan {
            Some(plan) => {
                candidate.plan_id = Some(plan.id.clone());
                if candidate.status == CandidateStatus::Onboarding {
                    candidate.status = CandidateStatus::Active;
                }
                candidate.next_billing_date = Some(today + cycle);
                info!(
                    candidate = %candidate_id,
                    plan = %plan.id,
                    price = plan.price,
                    "subscription activated"
                );
            }
            None => {
                debug!(
                    candidate = %candidate_id,
                    plan = plan_id,
                    "unknown plan; only subscription flag updated"
                );
            }
        }
        Some(&*candidate)
    }

    pub fn update_profile_intake(
        &mut self,
        candidate_id: &UserId,
        update: IntakeUpdate,
    ) -> Option<&Candidate> {
        let candidate = self.candidate_mut(candidate_id)?;
        candidate.intake.merge(update);
        info!(candidate = %candidate_id, "intake updated");
        Some(&*candidate)
    }

    /// Nothing is stored; the upload is only acknowledged.
    pub fn upload_document(&self, candidate_id: &UserId, file_name: &str) -> Notice {
        info!(candidate = %candidate_id, file = file_name, "document upload acknowledged");
        Notice::new(format!("Uploaded {file_name} successfully! (Mock)"))
    }

    /// Nothing is sent; acknowledged only when the candidate exists.
    pub fn send_payment_link(&self, candidate_id: &UserId) -> Option<Notice> {
        let candidate = self.candidate(candidate_id)?;
        info!(candidate = %candidate_id, "payment link acknowledged");
        Some(Notice::new(format!(
            "Payment link sent to {}",
            candidate.profile.email
        )))
    }

    pub fn submit_interest(&self, submission: &InterestSubmission) {
        info!(
            email = %submission.email,
            university = %submission.university,
            visa = %submission.visa_status,
            "interest form received"
        );
    }

    pub fn register(&self, registration: &Registration) -> Notice {
        let role = registration.role.tag().to_ascii_uppercase();
        info!(email = %registration.email, role = %role, "registration acknowledged");
        Notice::new(format!(
            "Registration Successful for {} as {}. Please login.",
            registration.email, role
        ))
    }

    pub fn update_password(&self) -> Notice {
        Notice::new("Password updated!")
    }

    pub fn save_recruiter_profile(&self) -> Notice {
        Notice::new("Profile Saved!")
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    /// Drain pending notices so each is shown exactly once.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn candidate_mut(&mut self, id: &UserId) -> Option<&mut Candidate> {
        let found = self
            .candidates
            .iter_mut()
            .find(|candidate| candidate.id() == id);
        if found.is_none() {
            debug!(%id, "no candidate with this id");
        }
        found
    }
}
