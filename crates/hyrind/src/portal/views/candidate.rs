use super::{action_button, dollars, escape_html, status_badge, text_field, BillingStep};
use crate::portal::domain::{CandidateStatus, MarketingPlan};
use crate::portal::navigation::DashboardView;
use crate::portal::workspace::CandidateDesk;

const PLAN_CHOOSER: &str = "/dashboard?view=billing&step=plans";
const LAST_PAYMENT_DATE: &str = "2023-11-01";

pub fn overview(desk: &CandidateDesk<'_>) -> String {
    let candidate = desk.candidate;
    let needs_plan = candidate.subscription_status.needs_plan();

    let banner = if candidate.status == CandidateStatus::Onboarding {
        let plan_step = if needs_plan { "<strong>3 Plan</strong>" } else { "3 Plan" };
        format!(
            "<div class=\"card modal\"><h2>Welcome to HYRIND!</h2>\
<p class=\"muted\">Complete your onboarding steps to start the marketing process.</p>\
<p>&#10003; Profile &rarr; <strong>2 Docs</strong> &rarr; {plan_step}</p></div>"
        )
    } else {
        String::new()
    };

    let recruiter_card = match desk.assigned_recruiter() {
        Some(recruiter) => format!(
            "<div style=\"text-align:center\"><img class=\"avatar\" src=\"{}\" alt=\"Recruiter\">\
<h4>{}</h4><button type=\"button\" class=\"dark\">Message</button></div>",
            escape_html(&recruiter.profile.avatar()),
            escape_html(&recruiter.profile.name)
        ),
        None => "<p class=\"muted\" style=\"text-align:center\">No recruiter assigned yet.</p>".to_string(),
    };

    let select_plan = if needs_plan {
        format!("<a class=\"primary\" href=\"{PLAN_CHOOSER}\">Select Marketing Plan</a>")
    } else {
        String::new()
    };

    format!(
        "{banner}<div class=\"grid\">\
<div class=\"card\"><h3>Quick Actions</h3><div class=\"grid\">\
<a class=\"card\" href=\"{jobs}\"><strong>View Jobs</strong><br><span class=\"muted\">See recommended roles</span></a>\
<a class=\"card\" href=\"{documents}\"><strong>Pending Tasks</strong><br><span class=\"muted\">2 items need attention</span></a>\
</div></div>\
<div><div class=\"card\"><h3>Your Recruiter</h3>{recruiter_card}</div>{select_plan}</div>\
</div>",
        jobs = DashboardView::Jobs.href(),
        documents = DashboardView::Documents.href(),
    )
}

pub fn intake(desk: &CandidateDesk<'_>) -> String {
    let intake = &desk.candidate.intake;
    format!(
        "<div class=\"card\"><h3>Candidate Intake Form</h3>\
<p class=\"muted\">Please complete your profile to help recruiters market you better.</p>\
<form method=\"post\" action=\"/actions/intake\"><div class=\"grid\">\
{phone}{linkedin}{graduation}{cgpa}{address}{roles}{experience}</div>\
<label>Key Skills<textarea name=\"skills\" rows=\"3\">{skills}</textarea></label>\
<button type=\"submit\" class=\"primary\">Save Profile</button></form></div>",
        phone = text_field("Phone Number", "phone", "tel", &intake.phone),
        linkedin = text_field("LinkedIn URL", "linkedin_url", "url", &intake.linkedin_url),
        graduation = text_field(
            "Graduation Date",
            "graduation_date",
            "date",
            &intake.graduation_date
        ),
        cgpa = text_field("CGPA", "cgpa", "text", &intake.cgpa),
        address = text_field("Current Address", "address", "text", &intake.address),
        roles = text_field("Target Roles", "target_roles", "text", &intake.target_roles),
        experience = text_field(
            "Experience (Years)",
            "experience_years",
            "text",
            &intake.experience_years
        ),
        skills = escape_html(&intake.skills),
    )
}

/// Billing overview with the plan chooser and payment confirmation steps.
/// Candidates without a live plan always see the chooser.
pub fn billing(desk: &CandidateDesk<'_>, step: &BillingStep) -> String {
    let candidate = desk.candidate;
    let current = desk.current_plan();

    let summary = match current {
        Some(plan) => format!(
            "<div class=\"card\" style=\"background:#0f172a;color:#fff\">\
<p class=\"muted\">Current Plan</p><h2>{name}</h2><p>{price} / {interval}</p>\
<p class=\"muted\">Status</p>{status}<p class=\"muted\">Next Billing: {next}</p></div>",
            name = escape_html(&plan.name),
            price = dollars(plan.price),
            interval = plan.interval.label(),
            status = status_badge(candidate.subscription_status.code()),
            next = candidate
                .next_billing_date
                .map(|date| date.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ),
        None => "<div class=\"card\" style=\"background:#fff7ed\">\
You do not have an active plan. Please select one to start marketing.</div>"
            .to_string(),
    };

    let history = match current {
        Some(plan) => format!(
            "<tr><td>{LAST_PAYMENT_DATE}</td><td>{}</td><td class=\"trend\">Paid</td></tr>",
            dollars(plan.price)
        ),
        None => String::new(),
    };

    let overlay = match step {
        BillingStep::Confirm(plan_id) => match desk.plans.find(plan_id) {
            Some(plan) => confirm_payment(plan),
            None => plan_chooser(desk, candidate.subscription_status.needs_plan()),
        },
        BillingStep::ChoosePlan => plan_chooser(desk, candidate.subscription_status.needs_plan()),
        BillingStep::Overview if candidate.subscription_status.needs_plan() => {
            plan_chooser(desk, true)
        }
        BillingStep::Overview => String::new(),
    };

    format!(
        "<h3>Billing Overview</h3>{summary}\
<div class=\"card\"><h4>Payment History</h4>\
<table><thead><tr><th>Date</th><th>Amount</th><th>Status</th></tr></thead>\
<tbody>{history}<tr><td colspan=\"3\">No other records found.</td></tr></tbody></table></div>\
<a class=\"card\" style=\"display:block;text-align:center\" href=\"{PLAN_CHOOSER}\">Change Plan</a>\
{overlay}"
    )
}

fn plan_chooser(desk: &CandidateDesk<'_>, required: bool) -> String {
    let close = if required {
        ""
    } else {
        "<a href=\"/dashboard?view=billing\">Close</a>"
    };

    let plans = desk
        .plans
        .plans()
        .iter()
        .map(|plan| {
            let class = if plan.recommended { "card recommended" } else { "card" };
            let features = plan
                .features
                .iter()
                .map(|feature| format!("<li>{}</li>", escape_html(feature)))
                .collect::<String>();
            format!(
                "<div class=\"{class}\"><h4>{name}</h4><p class=\"muted\">{description}</p>\
<h2>{price}<small>/mo</small></h2><ul>{features}</ul>\
<a class=\"dark\" href=\"/dashboard?view=billing&amp;plan={id}\">Select</a></div>",
                name = escape_html(&plan.name),
                description = escape_html(&plan.description),
                price = dollars(plan.price),
                id = escape_html(&plan.id),
            )
        })
        .collect::<String>();

    format!(
        "<div class=\"card modal\" id=\"plans\"><h3>Select a Marketing Plan</h3>{close}\
<div class=\"grid\">{plans}</div></div>"
    )
}

fn confirm_payment(plan: &MarketingPlan) -> String {
    format!(
        "<div class=\"card modal\" id=\"confirm\"><h3>Confirm Subscription</h3>\
<a href=\"/dashboard?view=billing\">&#10005;</a>\
<p>You are subscribing to <strong>{name}</strong> for <strong>{price}/mo</strong>.</p>\
<p class=\"muted\">Secure Payment Gateway Mockup</p>{pay}</div>",
        name = escape_html(&plan.name),
        price = dollars(plan.price),
        pay = action_button("/actions/subscribe", &[("plan_id", plan.id.as_str())], "Pay Now", "primary"),
    )
}

pub fn documents(desk: &CandidateDesk<'_>) -> String {
    let rows = desk
        .documents
        .iter()
        .map(|document| {
            format!(
                "<div class=\"card\"><strong>{name}</strong> {status}<br><span class=\"muted\">{kind} &middot; {uploaded}</span></div>",
                name = escape_html(&document.name),
                kind = escape_html(&document.kind),
                uploaded = document.uploaded_on,
                status = status_badge(document.status.code()),
            )
        })
        .collect::<String>();

    format!(
        "<div class=\"card\"><h3>My Documents</h3>\
<form method=\"post\" action=\"/actions/upload-document\" class=\"inline\">\
<label>Upload New<input type=\"text\" name=\"file_name\" placeholder=\"resume.pdf\" required></label>\
<button type=\"submit\" class=\"primary\">Upload</button></form>\
{rows}</div>"
    )
}
