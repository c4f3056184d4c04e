//! Server-rendered HTML for every page. Rendering functions are pure: they
//! borrow store data and return markup.

pub mod admin;
pub mod candidate;
mod chart;
pub mod layout;
pub mod public;
pub mod recruiter;
pub mod settings;

use super::domain::Notice;
use super::forms::RegistrationRole;
use super::navigation::Route;
use super::store::PortalStore;
use super::workspace::{AdminPage, CandidatePage, RecruiterPage, Workspace};

/// Steps of the candidate's plan purchase flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BillingStep {
    #[default]
    Overview,
    ChoosePlan,
    Confirm(String),
}

impl BillingStep {
    pub fn from_query(step: Option<&str>, plan: Option<&str>) -> Self {
        match (step, plan) {
            (_, Some(plan)) if !plan.is_empty() => Self::Confirm(plan.to_string()),
            (Some("plans"), _) => Self::ChoosePlan,
            _ => Self::Overview,
        }
    }
}

/// Per-request UI state that the browser version kept in component state.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub notices: Vec<Notice>,
    pub register_as: RegistrationRole,
    pub billing_step: BillingStep,
}

/// Render the page for `route` from the current store state.
pub fn render_route(store: &PortalStore, route: Route, context: &PageContext) -> String {
    let (title, body) = match route {
        Route::Landing => ("HYRIND", public::landing()),
        Route::Interest => ("Candidate Interest Form", public::interest_form()),
        Route::Register => ("Create your account", public::register(context.register_as)),
        Route::Login => ("Welcome Back", public::login()),
        Route::Dashboard => match store.workspace() {
            Some(workspace) => {
                let content = dashboard_content(workspace, store.view(), context);
                (
                    store.view().title(),
                    layout::shell(workspace, store.view(), &content),
                )
            }
            None => ("HYRIND", String::new()),
        },
    };
    document(title, &context.notices, &body)
}

/// Dispatch once on the role, then on the view tag.
fn dashboard_content(
    workspace: Workspace<'_>,
    view: super::navigation::DashboardView,
    context: &PageContext,
) -> String {
    match workspace {
        Workspace::Admin(desk) => match AdminPage::for_view(view) {
            AdminPage::Overview => admin::overview(&desk),
            AdminPage::Candidates => admin::candidates(&desk),
            AdminPage::Recruiters => admin::recruiters(&desk),
            AdminPage::Billing => admin::billing(&desk),
            AdminPage::Settings => settings::account_settings(),
        },
        Workspace::Recruiter(desk) => match RecruiterPage::for_view(view) {
            RecruiterPage::Caseload => recruiter::caseload(&desk),
            RecruiterPage::Profile => recruiter::profile(&desk),
            RecruiterPage::Payroll => recruiter::payroll(&desk),
            RecruiterPage::Settings => settings::account_settings(),
        },
        Workspace::Candidate(desk) => match CandidatePage::for_view(view) {
            CandidatePage::Overview => candidate::overview(&desk),
            CandidatePage::Intake => candidate::intake(&desk),
            CandidatePage::Billing => candidate::billing(&desk, &context.billing_step),
            CandidatePage::Documents => candidate::documents(&desk),
            CandidatePage::Settings => settings::account_settings(),
        },
    }
}

pub fn document(title: &str, notices: &[Notice], body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLES}</style>\n</head>\n<body>\n{notices}{body}\n</body>\n</html>\n",
        title = escape_html(title),
        notices = notice_banner(notices),
    )
}

fn notice_banner(notices: &[Notice]) -> String {
    if notices.is_empty() {
        return String::new();
    }
    let items: String = notices
        .iter()
        .map(|notice| format!("<p role=\"alert\">{}</p>", escape_html(&notice.message)))
        .collect();
    format!("<div class=\"notices\">{items}</div>\n")
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Whole dollars with thousands separators, e.g. `$4,500`.
pub(crate) fn dollars(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

pub(crate) fn status_badge(code: &str) -> String {
    let tone = match code {
        "APPROVED" | "VERIFIED" | "PAID" => "green",
        "ACTIVE" => "blue",
        "PENDING" | "SUBMITTED" => "yellow",
        "PAUSED" => "orange",
        "REJECTED" | "PAST_DUE" => "red",
        "ONBOARDING" => "purple",
        _ => "gray",
    };
    format!("<span class=\"badge badge-{tone}\">{}</span>", escape_html(code))
}

pub(crate) fn stat_card(title: &str, value: &str, trend: Option<&str>) -> String {
    let trend = trend
        .map(|trend| format!("<p class=\"trend\">&uarr; {trend} vs last month</p>"))
        .unwrap_or_default();
    format!(
        "<div class=\"card stat\"><p class=\"muted\">{}</p><h3>{}</h3>{trend}</div>",
        escape_html(title),
        escape_html(value)
    )
}

/// A form whose only control is a submit button.
pub(crate) fn action_button(action: &str, fields: &[(&str, &str)], label: &str, class: &str) -> String {
    let hidden: String = fields
        .iter()
        .map(|(name, value)| hidden_field(name, value))
        .collect();
    format!(
        "<form method=\"post\" action=\"{action}\" class=\"inline\">{hidden}<button type=\"submit\" class=\"{class}\">{}</button></form>",
        escape_html(label)
    )
}

pub(crate) fn hidden_field(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\">",
        escape_html(value)
    )
}

pub(crate) fn text_field(label: &str, name: &str, kind: &str, value: &str) -> String {
    format!(
        "<label>{}<input type=\"{kind}\" name=\"{name}\" value=\"{}\"></label>",
        escape_html(label),
        escape_html(value)
    )
}

const STYLES: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#f8fafc;color:#0f172a}\
a{color:#2563eb;text-decoration:none}\
.brand{display:flex;align-items:center;gap:.5rem;font-weight:700;font-size:1.25rem}\
.logo{width:2rem;height:2rem;border-radius:.375rem;background:#2563eb;color:#fff;display:flex;align-items:center;justify-content:center}\
.card{background:#fff;border:1px solid #e2e8f0;border-radius:.75rem;padding:1.5rem;margin-bottom:1.5rem}\
.grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem}\
.muted{color:#64748b}.trend{color:#16a34a;font-size:.75rem}\
.badge{padding:.25rem .6rem;border-radius:9999px;font-size:.75rem;font-weight:600}\
.badge-green{background:#dcfce7;color:#15803d}.badge-blue{background:#dbeafe;color:#1d4ed8}\
.badge-yellow{background:#fef9c3;color:#a16207}.badge-orange{background:#ffedd5;color:#c2410c}\
.badge-red{background:#fee2e2;color:#b91c1c}.badge-purple{background:#f3e8ff;color:#7e22ce}\
.badge-gray{background:#f3f4f6;color:#374151}\
.notices{position:sticky;top:0;z-index:50;background:#ecfdf5;border-bottom:1px solid #a7f3d0;padding:.5rem 2rem}\
.shell{display:flex;min-height:100vh}.sidebar{width:16rem;background:#fff;border-right:1px solid #e2e8f0;display:flex;flex-direction:column}\
.sidebar nav{flex:1;padding:1rem}.sidebar a,.sidebar button{display:block;width:100%;text-align:left;padding:.75rem 1rem;border-radius:.5rem;color:#475569;background:none;border:0;font:inherit;cursor:pointer}\
.sidebar .active{background:#eff6ff;color:#1d4ed8;font-weight:600}\
main{flex:1;display:flex;flex-direction:column}header{height:4rem;background:#fff;border-bottom:1px solid #e2e8f0;display:flex;align-items:center;justify-content:space-between;padding:0 2rem}\
.content{padding:2rem}.avatar{width:2.5rem;height:2.5rem;border-radius:9999px}\
table{width:100%;border-collapse:collapse;font-size:.875rem}th{text-align:left;font-size:.75rem;text-transform:uppercase;color:#64748b;background:#f8fafc;padding:.75rem 1.5rem}\
td{padding:1rem 1.5rem;border-top:1px solid #f1f5f9}\
form.inline{display:inline}label{display:block;font-size:.875rem;margin-bottom:1rem}\
input,select,textarea{display:block;width:100%;padding:.5rem 1rem;border:1px solid #cbd5e1;border-radius:.5rem;box-sizing:border-box}\
.primary{background:#2563eb;color:#fff;border:0;border-radius:.5rem;padding:.6rem 1.5rem;font-weight:600;cursor:pointer}\
.dark{background:#0f172a;color:#fff;border:0;border-radius:.5rem;padding:.6rem 1.5rem;cursor:pointer}\
.pill-on{background:#dcfce7;color:#15803d;border:0;border-radius:9999px;padding:.3rem .75rem;font-weight:700;cursor:pointer}\
.pill-off{background:#fee2e2;color:#b91c1c;border:0;border-radius:9999px;padding:.3rem .75rem;font-weight:700;cursor:pointer}\
.bar{background:#f1f5f9;height:.5rem;border-radius:9999px}.bar div{background:#2563eb;height:.5rem;border-radius:9999px}\
.modal{border:2px solid #2563eb}.recommended{border-color:#2563eb}\
.hero{text-align:center;padding:6rem 1rem 4rem;max-width:64rem;margin:0 auto}\
.centered{max-width:28rem;margin:3rem auto}";
