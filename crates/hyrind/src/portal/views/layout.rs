use super::escape_html;
use crate::portal::domain::UserRole;
use crate::portal::navigation::DashboardView;
use crate::portal::workspace::Workspace;

/// Role-specific sidebar entries shown between "Dashboard" and "Settings".
pub fn sidebar_items(role: UserRole) -> &'static [(DashboardView, &'static str)] {
    match role {
        UserRole::Admin => &[
            (DashboardView::Candidates, "Candidates"),
            (DashboardView::Recruiters, "Recruiters"),
            (DashboardView::Billing, "Billing & Reports"),
        ],
        UserRole::Recruiter => &[
            (DashboardView::Candidates, "My Candidates"),
            (DashboardView::Profile, "My Profile"),
            (DashboardView::Billing, "Payroll & Slips"),
        ],
        UserRole::Candidate => &[
            (DashboardView::Profile, "Profile & Intake"),
            (DashboardView::Documents, "Documents"),
            (DashboardView::Billing, "Subscription"),
        ],
        UserRole::Visitor => &[],
    }
}

/// Dashboard frame: sidebar, header and the page content.
pub fn shell(workspace: Workspace<'_>, current: DashboardView, content: &str) -> String {
    let profile = workspace.profile();
    let role = workspace.role();

    let mut nav = nav_link(DashboardView::Dashboard, "Dashboard", current);
    for (view, label) in sidebar_items(role) {
        nav.push_str(&nav_link(*view, label, current));
    }

    format!(
        "<div class=\"shell\">\
<aside class=\"sidebar\">\
<div class=\"card\"><div class=\"brand\"><span class=\"logo\">H</span>HYRIND</div>\
<p class=\"muted\">{role} Portal</p></div>\
<nav>{nav}</nav>\
<div>{settings}<form method=\"post\" action=\"/actions/logout\"><button type=\"submit\">Sign Out</button></form></div>\
</aside>\
<main>\
<header><h1>{title}</h1>\
<div class=\"identity\"><div><p><strong>{name}</strong></p><p class=\"muted\">{email}</p></div>\
<img class=\"avatar\" src=\"{avatar}\" alt=\"Profile\"></div></header>\
<section class=\"content\">{content}</section>\
</main></div>",
        role = role.code(),
        settings = nav_link(DashboardView::Settings, "Settings", current),
        title = current.title(),
        name = escape_html(&profile.name),
        email = escape_html(&profile.email),
        avatar = escape_html(&profile.avatar()),
    )
}

fn nav_link(view: DashboardView, label: &str, current: DashboardView) -> String {
    let class = if view == current { " class=\"active\"" } else { "" };
    format!(
        "<a href=\"{}\"{class}>{}</a>",
        view.href(),
        escape_html(label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_signed_in_role_gets_three_extra_items() {
        for role in [UserRole::Admin, UserRole::Recruiter, UserRole::Candidate] {
            assert_eq!(sidebar_items(role).len(), 3);
        }
        assert!(sidebar_items(UserRole::Visitor).is_empty());
    }

    #[test]
    fn recruiter_billing_entry_is_payroll() {
        let items = sidebar_items(UserRole::Recruiter);
        assert!(items.contains(&(DashboardView::Billing, "Payroll & Slips")));
    }
}
