use super::{dollars, escape_html, status_badge, text_field};
use crate::portal::domain::{BankDetails, SubscriptionStatus};
use crate::portal::workspace::RecruiterDesk;

pub fn caseload(desk: &RecruiterDesk<'_>) -> String {
    let caseload = desk.caseload();

    let cards = if caseload.is_empty() {
        "<div class=\"card\" style=\"text-align:center\"><h3>No Candidates Assigned</h3></div>".to_string()
    } else {
        caseload
            .iter()
            .map(|candidate| {
                let edge = if candidate.subscription_status == SubscriptionStatus::Active {
                    "#22c55e"
                } else {
                    "#ef4444"
                };
                format!(
                    "<div class=\"card\" style=\"border-left:4px solid {edge}\">\
<img class=\"avatar\" src=\"{avatar}\" alt=\"\"> <strong>{name}</strong> {status}\
<p class=\"muted\">{major}</p><button type=\"button\">View Profile</button></div>",
                    avatar = escape_html(&candidate.profile.avatar()),
                    name = escape_html(&candidate.profile.name),
                    status = status_badge(candidate.status.code()),
                    major = escape_html(&candidate.major),
                )
            })
            .collect()
    };

    format!(
        "<h2>Welcome, {name}</h2><p class=\"muted\">You have {count} active candidates assigned.</p>\
<div class=\"grid\">{cards}</div>",
        name = escape_html(&desk.recruiter.profile.name),
        count = caseload.len(),
    )
}

/// Profile and salary bank account form, prefilled from the record.
pub fn profile(desk: &RecruiterDesk<'_>) -> String {
    let recruiter = desk.recruiter;
    let bank = recruiter.bank_details.as_ref();
    let bank_value = |pick: fn(&BankDetails) -> &str| {
        bank.map(pick).unwrap_or_default().to_string()
    };

    format!(
        "<div class=\"card\"><h3>Recruiter Profile &amp; Bank Details</h3>\
<form method=\"post\" action=\"/actions/recruiter-profile\">\
<div class=\"grid\">{name}{phone}{email}{specialization}</div>\
<h4>Bank Account for Salary</h4>\
<div class=\"grid\">{bank_name}{holder}{routing}{account}</div>\
<button type=\"submit\" class=\"primary\">Save Changes</button></form></div>",
        name = text_field("Full Name", "name", "text", &recruiter.profile.name),
        phone = text_field(
            "Phone",
            "phone",
            "tel",
            recruiter.phone.as_deref().unwrap_or_default()
        ),
        email = text_field("Email", "email", "email", &recruiter.profile.email),
        specialization = text_field(
            "Specialization",
            "specialization",
            "text",
            &recruiter.specialization
        ),
        bank_name = text_field(
            "Bank Name",
            "bank_name",
            "text",
            &bank_value(|details| details.bank_name.as_str())
        ),
        holder = text_field(
            "Account Holder",
            "account_name",
            "text",
            &bank_value(|details| details.account_name.as_str())
        ),
        routing = text_field(
            "Routing Number",
            "routing_number",
            "text",
            &bank_value(|details| details.routing_number.as_str())
        ),
        account = text_field(
            "Account Number",
            "account_number",
            "password",
            &bank_value(|details| details.account_number.as_str())
        ),
    )
}

pub fn payroll(desk: &RecruiterDesk<'_>) -> String {
    let payslips = &desk.recruiter.payslips;
    let rows = if payslips.is_empty() {
        "<tr><td colspan=\"5\" class=\"muted\" style=\"text-align:center\">No payslips generated yet.</td></tr>"
            .to_string()
    } else {
        payslips
            .iter()
            .map(|slip| {
                format!(
                    "<tr><td><strong>{period}</strong></td><td>{date}</td><td>{amount}</td><td>{status}</td>\
<td><a href=\"#\">Download PDF</a></td></tr>",
                    period = escape_html(&slip.period),
                    date = slip.paid_on,
                    amount = dollars(slip.amount),
                    status = status_badge(slip.status.code()),
                )
            })
            .collect()
    };

    format!(
        "<div class=\"card\"><h3>Salary &amp; Payslips</h3>\
<table><thead><tr><th>Period</th><th>Date Processed</th><th>Amount</th><th>Status</th><th>Action</th></tr></thead>\
<tbody>{rows}</tbody></table></div>"
    )
}
