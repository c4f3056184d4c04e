//! Role-scoped views over the store, resolved once per request at the shell boundary.

use super::domain::{
    Candidate, Document, MarketingPlan, MetricPoint, PlanCatalog, Recruiter, UserId, UserProfile,
    UserRole,
};
use super::navigation::DashboardView;

/// Who is signed in. Recruiters and candidates are referenced by id so the
/// dashboard always reads the current record rather than a login-time copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    Admin(UserProfile),
    Recruiter { id: UserId },
    Candidate { id: UserId },
}

impl Session {
    pub fn role(&self) -> UserRole {
        match self {
            Self::Admin(_) => UserRole::Admin,
            Self::Recruiter { .. } => UserRole::Recruiter,
            Self::Candidate { .. } => UserRole::Candidate,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdminDesk<'a> {
    pub admin: &'a UserProfile,
    pub candidates: &'a [Candidate],
    pub recruiters: &'a [Recruiter],
    pub plans: &'a PlanCatalog,
    pub revenue: &'a [MetricPoint],
}

#[derive(Debug, Clone, Copy)]
pub struct RecruiterDesk<'a> {
    pub recruiter: &'a Recruiter,
    pub candidates: &'a [Candidate],
}

impl<'a> RecruiterDesk<'a> {
    /// Active candidates assigned to this recruiter.
    pub fn caseload(&self) -> Vec<&'a Candidate> {
        self.candidates
            .iter()
            .filter(|candidate| {
                candidate.profile.is_active && candidate.is_assigned_to(self.recruiter.id())
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CandidateDesk<'a> {
    pub candidate: &'a Candidate,
    pub recruiters: &'a [Recruiter],
    pub plans: &'a PlanCatalog,
    pub documents: &'a [Document],
}

impl<'a> CandidateDesk<'a> {
    pub fn assigned_recruiter(&self) -> Option<&'a Recruiter> {
        let id = self.candidate.assigned_recruiter_id.as_ref()?;
        self.recruiters.iter().find(|recruiter| recruiter.id() == id)
    }

    pub fn current_plan(&self) -> Option<&'a MarketingPlan> {
        self.candidate
            .plan_id
            .as_deref()
            .and_then(|plan_id| self.plans.find(plan_id))
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Workspace<'a> {
    Admin(AdminDesk<'a>),
    Recruiter(RecruiterDesk<'a>),
    Candidate(CandidateDesk<'a>),
}

impl<'a> Workspace<'a> {
    pub fn profile(&self) -> &'a UserProfile {
        match self {
            Self::Admin(desk) => desk.admin,
            Self::Recruiter(desk) => &desk.recruiter.profile,
            Self::Candidate(desk) => &desk.candidate.profile,
        }
    }

    pub fn role(&self) -> UserRole {
        match self {
            Self::Admin(_) => UserRole::Admin,
            Self::Recruiter(_) => UserRole::Recruiter,
            Self::Candidate(_) => UserRole::Candidate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminPage {
    Overview,
    Candidates,
    Recruiters,
    Billing,
    Settings,
}

impl AdminPage {
    pub fn for_view(view: DashboardView) -> Self {
        match view {
            DashboardView::Settings => Self::Settings,
            DashboardView::Billing => Self::Billing,
            DashboardView::Recruiters => Self::Recruiters,
            DashboardView::Candidates => Self::Candidates,
            _ => Self::Overview,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecruiterPage {
    Caseload,
    Profile,
    Payroll,
    Settings,
}

impl RecruiterPage {
    pub fn for_view(view: DashboardView) -> Self {
        match view {
            DashboardView::Settings => Self::Settings,
            DashboardView::Profile => Self::Profile,
            DashboardView::Billing => Self::Payroll,
            _ => Self::Caseload,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidatePage {
    Overview,
    Intake,
    Billing,
    Documents,
    Settings,
}

impl CandidatePage {
    pub fn for_view(view: DashboardView) -> Self {
        match view {
            DashboardView::Settings => Self::Settings,
            DashboardView::Profile => Self::Intake,
            DashboardView::Billing => Self::Billing,
            DashboardView::Documents => Self::Documents,
            _ => Self::Overview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_views_fall_back_to_each_role_default() {
        assert_eq!(
            CandidatePage::for_view(DashboardView::Recruiters),
            CandidatePage::Overview
        );
        assert_eq!(
            RecruiterPage::for_view(DashboardView::Documents),
            RecruiterPage::Caseload
        );
        assert_eq!(AdminPage::for_view(DashboardView::Jobs), AdminPage::Overview);
        assert_eq!(AdminPage::for_view(DashboardView::Profile), AdminPage::Overview);
    }

    #[test]
    fn billing_means_payroll_for_recruiters() {
        assert_eq!(
            RecruiterPage::for_view(DashboardView::Billing),
            RecruiterPage::Payroll
        );
    }
}
