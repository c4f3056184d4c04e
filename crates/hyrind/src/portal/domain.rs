use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by every account record (admin, recruiter, candidate).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Recruiter,
    Candidate,
    Visitor,
}

impl UserRole {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Recruiter => "RECRUITER",
            Self::Candidate => "CANDIDATE",
            Self::Visitor => "VISITOR",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Recruiter => "Recruiter",
            Self::Candidate => "Candidate",
            Self::Visitor => "Visitor",
        }
    }
}

/// Candidate lifecycle. Any value may follow any other; nothing enforces an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CandidateStatus {
    Submitted,
    Approved,
    Onboarding,
    Active,
    Paused,
    Placed,
    Rejected,
}

impl CandidateStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Onboarding => "ONBOARDING",
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Placed => "PLACED",
            Self::Rejected => "REJECTED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionStatus {
    #[serde(rename = "NONE")]
    Unsubscribed,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "PAST_DUE")]
    PastDue,
    #[serde(rename = "CANCELED")]
    Canceled,
}

impl SubscriptionStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Unsubscribed => "NONE",
            Self::Active => "ACTIVE",
            Self::PastDue => "PAST_DUE",
            Self::Canceled => "CANCELED",
        }
    }

    /// Candidates without a live plan are prompted to pick one.
    pub const fn needs_plan(self) -> bool {
        matches!(self, Self::Unsubscribed | Self::Canceled)
    }
}

/// Fields every account carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub joined_on: NaiveDate,
}

impl UserProfile {
    /// Avatar to display, falling back to a generated initials image.
    pub fn avatar(&self) -> String {
        match &self.avatar_url {
            Some(url) => url.clone(),
            None => format!(
                "https://ui-avatars.com/api/?name={}",
                self.name.replace(' ', "+")
            ),
        }
    }
}

/// Profile details a candidate supplies after registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeDetails {
    pub phone: String,
    pub address: String,
    pub cgpa: String,
    pub graduation_date: String,
    pub target_roles: String,
    pub skills: String,
    pub experience_years: String,
    pub linkedin_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_authorization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relocation: Option<bool>,
}

impl IntakeDetails {
    /// Shallow merge: every field present in `update` replaces the stored value.
    pub fn merge(&mut self, update: IntakeUpdate) {
        let IntakeUpdate {
            phone,
            address,
            cgpa,
            graduation_date,
            target_roles,
            skills,
            experience_years,
            linkedin_url,
            work_authorization,
            relocation,
        } = update;

        replace(&mut self.phone, phone);
        replace(&mut self.address, address);
        replace(&mut self.cgpa, cgpa);
        replace(&mut self.graduation_date, graduation_date);
        replace(&mut self.target_roles, target_roles);
        replace(&mut self.skills, skills);
        replace(&mut self.experience_years, experience_years);
        replace(&mut self.linkedin_url, linkedin_url);
        if work_authorization.is_some() {
            self.work_authorization = work_authorization;
        }
        if relocation.is_some() {
            self.relocation = relocation;
        }
    }
}

fn replace(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

/// Partial intake payload; absent fields are left untouched by [`IntakeDetails::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeUpdate {
    pub phone: Option<String>,
    pub address: Option<String>,
    pub cgpa: Option<String>,
    pub graduation_date: Option<String>,
    pub target_roles: Option<String>,
    pub skills: Option<String>,
    pub experience_years: Option<String>,
    pub linkedin_url: Option<String>,
    pub work_authorization: Option<String>,
    pub relocation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub status: CandidateStatus,
    pub university: String,
    pub degree: String,
    pub major: String,
    /// Free text such as "F-1 OPT" or "H1-B Transfer".
    pub visa_status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marketing_start_date: Option<NaiveDate>,
    /// Weak reference; may name a recruiter that does not exist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_recruiter_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_billing_date: Option<NaiveDate>,
    pub subscription_status: SubscriptionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    pub intake: IntakeDetails,
}

impl Candidate {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }

    pub fn is_assigned_to(&self, recruiter_id: &UserId) -> bool {
        self.assigned_recruiter_id.as_ref() == Some(recruiter_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub routing_number: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayslipStatus {
    Paid,
    Processing,
}

impl PayslipStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Processing => "PROCESSING",
        }
    }
}

/// Recorded payroll disbursement for a recruiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payslip {
    pub id: String,
    pub paid_on: NaiveDate,
    pub amount: u32,
    pub period: String,
    pub status: PayslipStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recruiter {
    #[serde(flatten)]
    pub profile: UserProfile,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_details: Option<BankDetails>,
    pub payslips: Vec<Payslip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Recruiter {
    pub fn id(&self) -> &UserId {
        &self.profile.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    Month,
    Year,
}

impl BillingInterval {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Subscription tier a candidate buys to receive recruiter services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingPlan {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub interval: BillingInterval,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub recommended: bool,
}

/// Read-only plan catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<MarketingPlan>,
}

impl PlanCatalog {
    pub fn new(plans: Vec<MarketingPlan>) -> Self {
        Self { plans }
    }

    pub fn find(&self, plan_id: &str) -> Option<&MarketingPlan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    /// Price of the plan, or zero when the id is unknown or absent.
    pub fn price_of(&self, plan_id: Option<&str>) -> u32 {
        plan_id
            .and_then(|id| self.find(id))
            .map(|plan| plan.price)
            .unwrap_or(0)
    }

    pub fn plans(&self) -> &[MarketingPlan] {
        &self.plans
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Pending,
    Verified,
}

impl DocumentStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub uploaded_on: NaiveDate,
    pub status: DocumentStatus,
}

/// One labelled point of the revenue series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub label: String,
    pub value: u32,
}

/// Transient acknowledgement shown to the user once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
