//! Candidate placement portal: seed data, the single-owner store, navigation
//! guard, HTML views and the HTTP routers that drive them.

mod api;
pub mod domain;
pub mod export;
pub mod forms;
pub mod navigation;
pub mod router;
pub mod seed;
pub mod service;
pub mod store;
pub mod summary;
pub mod views;
pub mod workspace;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateStatus, IntakeDetails, IntakeUpdate, MarketingPlan, Notice, PlanCatalog,
    Recruiter, SubscriptionStatus, UserId, UserProfile, UserRole,
};
pub use export::{roster_csv, ExportError};
pub use navigation::{DashboardView, Navigation, Route};
pub use router::portal_router;
pub use service::PortalService;
pub use store::{PortalStore, DEFAULT_BILLING_CYCLE_DAYS};
pub use summary::AdminSummary;
pub use workspace::{Session, Workspace};
