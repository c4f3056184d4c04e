use super::text_field;

/// Shared by every role.
pub fn account_settings() -> String {
    let preferences = [
        ("notify_jobs", "Email me when jobs are applied", true),
        ("notify_billing", "Email me about billing updates", true),
        ("newsletter", "Receive marketing newsletters", false),
    ]
    .iter()
    .map(|(name, label, checked)| {
        format!(
            "<label><input type=\"checkbox\" name=\"{name}\"{}> {label}</label>",
            if *checked { " checked" } else { "" }
        )
    })
    .collect::<String>();

    format!(
        "<div class=\"card\"><h3>Account Settings</h3><p class=\"muted\">Manage your password and preferences</p>\
<div class=\"grid\">\
<div><h4>Change Password</h4>\
<form method=\"post\" action=\"/actions/password\">\
{current}{new}{confirm}\
<button type=\"submit\" class=\"dark\">Update Password</button></form></div>\
<div><h4>Notifications</h4>{preferences}</div>\
</div></div>",
        current = text_field("Current Password", "current_password", "password", ""),
        new = text_field("New Password", "new_password", "password", ""),
        confirm = text_field("Confirm New Password", "confirm_password", "password", ""),
    )
}
