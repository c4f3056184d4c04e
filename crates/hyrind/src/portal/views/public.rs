//! Pages reachable without a session.

use super::{escape_html, text_field};
use crate::portal::domain::UserRole;
use crate::portal::forms::{RegistrationRole, VISA_OPTIONS};

fn top_bar() -> &'static str {
    "<nav class=\"card\" style=\"display:flex;justify-content:space-between;border-radius:0\">\
<a href=\"/landing\" class=\"brand\"><span class=\"logo\">H</span>HYRIND</a>\
<div><a href=\"/login\">Log In</a> <a href=\"/register\" class=\"primary\">Sign Up</a></div></nav>"
}

pub fn landing() -> String {
    let stats = [
        ("500+", "Candidates Placed"),
        ("98%", "Visa Success Rate"),
        ("45 Days", "Avg. Time to Offer"),
    ]
    .iter()
    .map(|(value, label)| format!("<div><h2>{value}</h2><p class=\"muted\">{label}</p></div>"))
    .collect::<String>();

    let features = [
        (
            "Aggressive Marketing",
            "Our recruiters market your profile to hundreds of vendors and direct clients every day.",
        ),
        (
            "Compliance First",
            "Every placement respects your visa terms, from OPT reporting to H1-B transfers.",
        ),
        (
            "Expert Guidance",
            "From resume crafting to mock interviews, our industry experts prepare you for every step.",
        ),
    ]
    .iter()
    .map(|(title, body)| format!("<div class=\"card\"><h3>{title}</h3><p class=\"muted\">{body}</p></div>"))
    .collect::<String>();

    format!(
        "{bar}<section class=\"hero\">\
<h1>Launch Your Career in the US Tech Market</h1>\
<p class=\"muted\">Specialized placement and marketing services for Master's students and F-1 OPT holders. \
We bridge the gap between your education and your dream job.</p>\
<a class=\"primary\" href=\"/register\">Get Started Now</a> <a href=\"/interest\">Submit Interest</a>\
</section>\
<section class=\"grid\" style=\"text-align:center;padding:2rem\">{stats}</section>\
<section class=\"grid\" style=\"padding:2rem\">{features}</section>",
        bar = top_bar()
    )
}

pub fn interest_form() -> String {
    let visa_options = VISA_OPTIONS
        .iter()
        .map(|option| format!("<option>{}</option>", escape_html(option)))
        .collect::<String>();

    format!(
        "<div class=\"centered card\">\
<div style=\"display:flex;justify-content:space-between\"><h2>Candidate Interest Form</h2><a href=\"/landing\">Cancel</a></div>\
<form method=\"post\" action=\"/actions/interest\">\
{first}{last}{email}\
<label>University<input type=\"text\" name=\"university\" placeholder=\"e.g. Northeastern University\"></label>\
{major}{graduation}\
<label>Visa Status<select name=\"visa_status\">{visa_options}</select></label>\
<label>Resume<input type=\"file\" name=\"resume\"></label>\
<button type=\"submit\" class=\"primary\">Submit Application</button>\
</form></div>",
        first = text_field("First Name", "first_name", "text", ""),
        last = text_field("Last Name", "last_name", "text", ""),
        email = text_field("Email Address", "email", "email", ""),
        major = text_field("Major", "major", "text", ""),
        graduation = text_field("Graduation Date", "graduation_date", "date", ""),
    )
}

pub fn interest_received() -> String {
    "<div class=\"centered card\" style=\"text-align:center\">\
<h2>Interest Received!</h2>\
<p class=\"muted\">Thank you for applying. Our admin team will review your details and send login credentials to your email within 24 hours.</p>\
<a class=\"dark\" href=\"/landing\">Back to Home</a></div>"
        .to_string()
}

pub fn register(role: RegistrationRole) -> String {
    let toggle = [RegistrationRole::Candidate, RegistrationRole::Recruiter]
        .iter()
        .map(|option| {
            let class = if *option == role { "primary" } else { "muted" };
            format!(
                "<a class=\"{class}\" href=\"/register?as={}\">{}</a>",
                option.tag(),
                option.label()
            )
        })
        .collect::<Vec<_>>()
        .join(" ");

    let university = match role {
        RegistrationRole::Candidate => "<label>University<input type=\"text\" name=\"university\" placeholder=\"Current or Past University\"></label>",
        RegistrationRole::Recruiter => "",
    };

    format!(
        "<div class=\"centered card\">\
<h2>Create your account</h2><p class=\"muted\">Join HYRIND today</p>\
<div>{toggle}</div>\
<form method=\"post\" action=\"/actions/register\">\
<input type=\"hidden\" name=\"role\" value=\"{tag}\">\
{first}{last}{email}{university}{password}\
<button type=\"submit\" class=\"primary\">Create Account</button>\
</form>\
<p><span class=\"muted\">Already have an account? </span><a href=\"/login\">Log in</a></p></div>",
        tag = role.tag(),
        first = text_field("First Name", "first_name", "text", ""),
        last = text_field("Last Name", "last_name", "text", ""),
        email = text_field("Email Address", "email", "email", ""),
        password = text_field("Password", "password", "password", ""),
    )
}

/// Demo sign-in: one button per role, no credentials.
pub fn login() -> String {
    let choices = [
        (UserRole::Admin, "Manage candidates, recruiters and billing"),
        (UserRole::Recruiter, "View assigned candidates and payroll"),
        (UserRole::Candidate, "Track onboarding and your subscription"),
    ]
    .iter()
    .map(|(role, blurb)| {
        format!(
            "<form method=\"post\" action=\"/actions/login\">\
<input type=\"hidden\" name=\"role\" value=\"{code}\">\
<button type=\"submit\" class=\"card\" style=\"width:100%;text-align:left\">\
<strong>Login as {label}</strong><br><span class=\"muted\">{blurb}</span></button></form>",
            code = role.code(),
            label = role.label(),
        )
    })
    .collect::<String>();

    format!(
        "<div class=\"centered card\">\
<h2>Welcome Back</h2><p class=\"muted\">Select a role to enter the demo portal</p>\
{choices}\
<a href=\"/landing\">Back to Home</a></div>"
    )
}
