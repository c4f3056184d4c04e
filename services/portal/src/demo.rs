use chrono::{NaiveDate, Utc};
use clap::Args;
use hyrind::error::AppError;
use hyrind::portal::summary::plan_distribution;
use hyrind::portal::{
    roster_csv, DashboardView, PortalStore, Route, UserId, UserRole, Workspace,
    DEFAULT_BILLING_CYCLE_DAYS,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Date used for billing stamps (YYYY-MM-DD). Defaults to today in UTC.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Plan the demo candidate subscribes to
    #[arg(long, default_value = "plan-pro")]
    pub(crate) plan: String,
    /// Days between billing dates
    #[arg(
        long,
        default_value_t = DEFAULT_BILLING_CYCLE_DAYS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub(crate) billing_cycle_days: u32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Write the CSV to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let store = PortalStore::seeded();
    let csv = roster_csv(store.candidates(), store.recruiters(), store.plans())?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, csv)?;
            println!("Roster written to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        plan,
        billing_cycle_days,
    } = args;
    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let mut store = PortalStore::seeded().with_billing_cycle(billing_cycle_days);

    println!("HYRIND placement portal walkthrough ({today})");
    println!("==============================================");

    let navigation = store.navigate(Route::Dashboard);
    println!("\nVisitor opens the dashboard: {navigation:?}");

    println!("\n-- Admin --");
    store.login(UserRole::Admin);
    print_summary(&store);

    let rahul = UserId::from("cand-1");
    if let Some(notice) = store.send_payment_link(&rahul) {
        println!("{}", notice.message);
    }
    if let Some(candidate) = store.assign_recruiter(&rahul, "rec-2") {
        println!(
            "Assigned {} to {}",
            candidate.profile.name,
            candidate
                .assigned_recruiter_id
                .as_ref()
                .map(UserId::as_str)
                .unwrap_or("nobody")
        );
    }
    if let Some(is_active) = store.toggle_status(&UserId::from("rec-2"), UserRole::Recruiter) {
        println!("Recruiter rec-2 active: {is_active}");
    }
    store.logout();

    println!("\n-- Candidate --");
    store.login(UserRole::Candidate);
    store.select_view(DashboardView::Billing);
    if let Some(candidate) = store.update_subscription(&rahul, &plan, today) {
        println!(
            "{} subscribed to {plan}: status {}, subscription {}, next billing {}",
            candidate.profile.name,
            candidate.status.code(),
            candidate.subscription_status.code(),
            candidate
                .next_billing_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }
    println!("{}", store.upload_document(&rahul, "resume.pdf").message);
    store.logout();

    println!("\n-- Recruiter --");
    store.login(UserRole::Recruiter);
    if let Some(Workspace::Recruiter(desk)) = store.workspace() {
        let caseload: Vec<&str> = desk
            .caseload()
            .into_iter()
            .map(|candidate| candidate.profile.name.as_str())
            .collect();
        println!("{} caseload: {}", desk.recruiter.profile.name, caseload.join(", "));
    }
    store.logout();

    println!("\n-- After the walkthrough --");
    print_summary(&store);
    for share in plan_distribution(store.candidates(), store.plans()) {
        println!(
            "  {:<16} {:>2} users ({:.0}%)",
            share.plan_name, share.users, share.percent
        );
    }

    Ok(())
}

fn print_summary(store: &PortalStore) {
    let summary = store.summary();
    println!(
        "Candidates: {} (marketing {}), recruiters: {}, revenue: ${}/mo, pending approvals: {}",
        summary.total_candidates,
        summary.active_marketing,
        summary.total_recruiters,
        summary.monthly_revenue,
        summary.pending_approvals
    );
}
