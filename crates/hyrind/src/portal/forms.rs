//! Public-funnel submissions. They are acknowledged and logged, never stored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationRole {
    #[default]
    Candidate,
    Recruiter,
}

impl RegistrationRole {
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()) {
            Some(value) if value == "recruiter" => Self::Recruiter,
            _ => Self::Candidate,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Recruiter => "recruiter",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Recruiter => "Recruiter",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub role: RegistrationRole,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Only asked of candidates.
    #[serde(default)]
    pub university: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub university: String,
    pub major: String,
    pub graduation_date: String,
    pub visa_status: String,
    /// File name of the attached resume; the contents never leave the browser.
    #[serde(default)]
    pub resume: Option<String>,
}

/// Visa choices offered by the interest form.
pub const VISA_OPTIONS: [&str; 4] = ["F-1 OPT", "F-1 CPT", "H1-B", "Green Card / Citizen"];
