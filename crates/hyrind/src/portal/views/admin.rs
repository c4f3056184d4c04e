use super::chart::area_chart;
use super::{action_button, dollars, escape_html, hidden_field, stat_card, status_badge};
use crate::portal::domain::{Candidate, SubscriptionStatus, UserRole};
use crate::portal::summary::{plan_distribution, AdminSummary};
use crate::portal::workspace::AdminDesk;

pub fn overview(desk: &AdminDesk<'_>) -> String {
    let summary = AdminSummary::compute(desk.candidates, desk.recruiters, desk.plans);

    let cards = [
        stat_card(
            "Total Candidates",
            &summary.total_candidates.to_string(),
            Some("12%"),
        ),
        stat_card(
            "Active Marketing",
            &summary.active_marketing.to_string(),
            Some("8%"),
        ),
        stat_card(
            "Total Recruiters",
            &summary.total_recruiters.to_string(),
            None,
        ),
        stat_card(
            "Monthly Revenue",
            &dollars(summary.monthly_revenue),
            Some("15%"),
        ),
    ]
    .concat();

    format!(
        "<div class=\"grid\">{cards}</div>\
<div class=\"grid\">\
<div class=\"card\"><h3>Revenue Overview</h3>{chart}</div>\
<div class=\"card\"><h3>Platform Health</h3>\
<p>Server Status <strong>Operational</strong></p>\
<p>Pending Approvals <span class=\"badge badge-yellow\">{pending}</span></p>\
<p>Active Subscriptions <strong>{subscriptions}</strong></p>\
</div></div>",
        chart = area_chart(desk.revenue),
        pending = summary.pending_approvals,
        subscriptions = summary.active_subscriptions,
    )
}

pub fn candidates(desk: &AdminDesk<'_>) -> String {
    let rows = desk
        .candidates
        .iter()
        .map(|candidate| candidate_row(desk, candidate))
        .collect::<String>();

    format!(
        "<div class=\"card\"><h3>Manage Candidates</h3>\
<table><thead><tr><th>Name</th><th>Status</th><th>Subscription</th><th>Assign Recruiter</th><th>Actions</th></tr></thead>\
<tbody>{rows}</tbody></table></div>"
    )
}

fn candidate_row(desk: &AdminDesk<'_>, candidate: &Candidate) -> String {
    let id = candidate.id().as_str();

    let subscription = if candidate.subscription_status == SubscriptionStatus::Active {
        "<span class=\"trend\">Active</span>".to_string()
    } else {
        format!(
            "<span class=\"badge badge-red\">{}</span> {}",
            candidate.subscription_status.code(),
            action_button(
                "/actions/payment-link",
                &[("candidate_id", id)],
                "Send Payment Link",
                "primary"
            )
        )
    };

    let assigned = candidate
        .assigned_recruiter_id
        .as_ref()
        .map(|id| id.as_str())
        .unwrap_or("");
    let mut options = format!(
        "<option value=\"\"{}>Unassigned</option>",
        selected(assigned.is_empty())
    );
    for recruiter in desk.recruiters {
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            escape_html(recruiter.id().as_str()),
            selected(recruiter.id().as_str() == assigned),
            escape_html(&recruiter.profile.name)
        ));
    }

    let (toggle_label, toggle_class) = activity_toggle(candidate.profile.is_active);

    format!(
        "<tr><td><img class=\"avatar\" src=\"{avatar}\" alt=\"\"> {name}</td>\
<td>{status}</td><td>{subscription}</td>\
<td><form method=\"post\" action=\"/actions/assign-recruiter\" class=\"inline\">{hidden}\
<select name=\"recruiter_id\">{options}</select><button type=\"submit\">Assign</button></form></td>\
<td>{toggle}</td></tr>",
        avatar = escape_html(&candidate.profile.avatar()),
        name = escape_html(&candidate.profile.name),
        status = status_badge(candidate.status.code()),
        hidden = hidden_field("candidate_id", id),
        toggle = action_button(
            "/actions/toggle-status",
            &[("id", id), ("role", UserRole::Candidate.code())],
            toggle_label,
            toggle_class
        ),
    )
}

pub fn recruiters(desk: &AdminDesk<'_>) -> String {
    let rows = desk
        .recruiters
        .iter()
        .map(|recruiter| {
            let (label, class) = activity_toggle(recruiter.profile.is_active);
            format!(
                "<tr><td><img class=\"avatar\" src=\"{avatar}\" alt=\"\"> <strong>{name}</strong><br>\
<span class=\"muted\">{email}</span></td><td>{specialization}</td><td>{joined}</td><td>{status}</td><td>{toggle}</td></tr>",
                avatar = escape_html(&recruiter.profile.avatar()),
                name = escape_html(&recruiter.profile.name),
                email = escape_html(&recruiter.profile.email),
                specialization = escape_html(&recruiter.specialization),
                joined = recruiter.profile.joined_on,
                status = if recruiter.profile.is_active {
                    status_badge("ACTIVE")
                } else {
                    status_badge("INACTIVE")
                },
                toggle = action_button(
                    "/actions/toggle-status",
                    &[
                        ("id", recruiter.id().as_str()),
                        ("role", UserRole::Recruiter.code())
                    ],
                    label,
                    class
                ),
            )
        })
        .collect::<String>();

    format!(
        "<div class=\"card\"><h3>Manage Recruiters</h3>\
<table><thead><tr><th>Recruiter</th><th>Specialization</th><th>Joined Date</th><th>Status</th><th>Action</th></tr></thead>\
<tbody>{rows}</tbody></table></div>"
    )
}

/// Financial reports: revenue trend plus plan distribution from live data.
pub fn billing(desk: &AdminDesk<'_>) -> String {
    let shares = plan_distribution(desk.candidates, desk.plans)
        .into_iter()
        .map(|share| {
            format!(
                "<p>{name} <strong>{users} Users</strong></p>\
<div class=\"bar\"><div style=\"width:{percent:.0}%\"></div></div>",
                name = escape_html(&share.plan_name),
                users = share.users,
                percent = share.percent,
            )
        })
        .collect::<String>();

    format!(
        "<h2>Financial Reports</h2>\
<div class=\"grid\">\
<div class=\"card\"><h3>Revenue Trend</h3>{chart}</div>\
<div class=\"card\"><h3>Subscription Distribution</h3>{shares}\
<p><a href=\"/api/admin/candidates/export\">Download roster (CSV)</a></p></div>\
</div>",
        chart = area_chart(desk.revenue),
    )
}

fn activity_toggle(is_active: bool) -> (&'static str, &'static str) {
    if is_active {
        ("Active", "pill-on")
    } else {
        ("Inactive", "pill-off")
    }
}

fn selected(is_selected: bool) -> &'static str {
    if is_selected {
        " selected"
    } else {
        ""
    }
}
