//! Seed records the portal starts from. Nothing here is persisted.

use chrono::NaiveDate;

use super::domain::{
    BankDetails, BillingInterval, Candidate, CandidateStatus, Document, DocumentStatus,
    IntakeDetails, MarketingPlan, MetricPoint, Payslip, PayslipStatus, PlanCatalog, Recruiter,
    SubscriptionStatus, UserId, UserProfile, UserRole,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn profile(
    id: &str,
    name: &str,
    email: &str,
    role: UserRole,
    joined_on: NaiveDate,
    avatar: &str,
) -> UserProfile {
    UserProfile {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar_url: Some(avatar.to_string()),
        is_active: true,
        joined_on,
    }
}

pub fn marketing_plans() -> PlanCatalog {
    PlanCatalog::new(vec![
        MarketingPlan {
            id: "plan-basic".to_string(),
            name: "Basic Placement".to_string(),
            price: 150,
            interval: BillingInterval::Month,
            description: "Essential marketing for self-starters.".to_string(),
            features: strings(&[
                "Resume Review",
                "Weekly Job List",
                "Email Support",
                "1 Mock Interview/mo",
            ]),
            recommended: false,
        },
        MarketingPlan {
            id: "plan-pro".to_string(),
            name: "Pro Aggressive".to_string(),
            price: 300,
            interval: BillingInterval::Month,
            description: "Dedicated recruiter attention and aggressive marketing.".to_string(),
            features: strings(&[
                "Dedicated Recruiter",
                "Daily Submission Logs",
                "Unlimited Mock Interviews",
                "Priority Vendor List",
                "Visa Guidance",
            ]),
            recommended: true,
        },
        MarketingPlan {
            id: "plan-premium".to_string(),
            name: "Guaranteed Results".to_string(),
            price: 500,
            interval: BillingInterval::Month,
            description: "Full-service handling until placement.".to_string(),
            features: strings(&[
                "Senior Recruiter Lead",
                "Direct Client Access",
                "Proxy Interview Support",
                "24/7 Support",
                "Placement Guarantee*",
            ]),
            recommended: false,
        },
    ])
}

/// The single static administrator account.
pub fn admin_account() -> UserProfile {
    profile(
        "admin-1",
        "System Admin",
        "admin@hyrind.com",
        UserRole::Admin,
        date(2023, 1, 1),
        "https://picsum.photos/200/200",
    )
}

pub fn recruiters() -> Vec<Recruiter> {
    vec![
        Recruiter {
            profile: profile(
                "rec-1",
                "Sarah Jenkins",
                "sarah@hyrind.com",
                UserRole::Recruiter,
                date(2023, 3, 15),
                "https://picsum.photos/201/201",
            ),
            specialization: "Java / Full Stack".to_string(),
            bank_details: Some(BankDetails {
                account_name: "Sarah Jenkins".to_string(),
                account_number: "****8899".to_string(),
                bank_name: "Chase Bank".to_string(),
                routing_number: "****1234".to_string(),
            }),
            payslips: vec![
                Payslip {
                    id: "pay-1".to_string(),
                    paid_on: date(2023, 10, 31),
                    amount: 4500,
                    period: "Oct 2023".to_string(),
                    status: PayslipStatus::Paid,
                },
                Payslip {
                    id: "pay-2".to_string(),
                    paid_on: date(2023, 9, 30),
                    amount: 4500,
                    period: "Sep 2023".to_string(),
                    status: PayslipStatus::Paid,
                },
            ],
            phone: Some("+1 (555) 012-3456".to_string()),
        },
        Recruiter {
            profile: profile(
                "rec-2",
                "David Miller",
                "david.m@hyrind.com",
                UserRole::Recruiter,
                date(2023, 6, 10),
                "https://picsum.photos/206/206",
            ),
            specialization: "Data Science / AI".to_string(),
            bank_details: None,
            payslips: Vec::new(),
            phone: None,
        },
    ]
}

pub fn candidates() -> Vec<Candidate> {
    let michael = {
        let mut profile = profile(
            "cand-3",
            "Michael Ross",
            "m.ross@usc.edu",
            UserRole::Candidate,
            date(2023, 10, 22),
            "https://picsum.photos/204/204",
        );
        profile.is_active = false;
        profile
    };

    vec![
        Candidate {
            profile: profile(
                "cand-1",
                "Rahul Sharma",
                "rahul.s@university.edu",
                UserRole::Candidate,
                date(2023, 10, 20),
                "https://picsum.photos/202/202",
            ),
            status: CandidateStatus::Onboarding,
            university: "Northeastern University".to_string(),
            degree: "Masters".to_string(),
            major: "Computer Science".to_string(),
            visa_status: "F-1 OPT".to_string(),
            marketing_start_date: None,
            assigned_recruiter_id: None,
            next_billing_date: None,
            subscription_status: SubscriptionStatus::Unsubscribed,
            plan_id: None,
            intake: IntakeDetails {
                phone: "555-0199".to_string(),
                ..IntakeDetails::default()
            },
        },
        Candidate {
            profile: profile(
                "cand-2",
                "Emily Chen",
                "emily.c@nyu.edu",
                UserRole::Candidate,
                date(2023, 9, 1),
                "https://picsum.photos/203/203",
            ),
            status: CandidateStatus::Active,
            university: "NYU".to_string(),
            degree: "Masters".to_string(),
            major: "Data Science".to_string(),
            visa_status: "H1-B Transfer".to_string(),
            marketing_start_date: Some(date(2023, 11, 1)),
            assigned_recruiter_id: Some(UserId::from("rec-1")),
            next_billing_date: Some(date(2023, 12, 1)),
            subscription_status: SubscriptionStatus::Active,
            plan_id: Some("plan-pro".to_string()),
            intake: IntakeDetails {
                skills: "Python, SQL, Tableau".to_string(),
                target_roles: "Data Scientist".to_string(),
                ..IntakeDetails::default()
            },
        },
        Candidate {
            profile: michael,
            status: CandidateStatus::Submitted,
            university: "USC".to_string(),
            degree: "Masters".to_string(),
            major: "Business Analytics".to_string(),
            visa_status: "F-1 OPT".to_string(),
            marketing_start_date: None,
            assigned_recruiter_id: None,
            next_billing_date: None,
            subscription_status: SubscriptionStatus::Unsubscribed,
            plan_id: None,
            intake: IntakeDetails::default(),
        },
        Candidate {
            profile: profile(
                "cand-4",
                "Priya Patel",
                "p.patel@utdallas.edu",
                UserRole::Candidate,
                date(2023, 8, 15),
                "https://picsum.photos/205/205",
            ),
            status: CandidateStatus::Paused,
            university: "UT Dallas".to_string(),
            degree: "Masters".to_string(),
            major: "Information Systems".to_string(),
            visa_status: "F-1 OPT".to_string(),
            marketing_start_date: Some(date(2023, 9, 15)),
            assigned_recruiter_id: Some(UserId::from("rec-1")),
            next_billing_date: Some(date(2023, 10, 15)),
            subscription_status: SubscriptionStatus::PastDue,
            plan_id: Some("plan-basic".to_string()),
            intake: IntakeDetails::default(),
        },
    ]
}

pub fn documents() -> Vec<Document> {
    vec![
        Document {
            id: "doc-1".to_string(),
            name: "Resume_V1.pdf".to_string(),
            kind: "Resume".to_string(),
            uploaded_on: date(2023, 10, 25),
            status: DocumentStatus::Verified,
        },
        Document {
            id: "doc-2".to_string(),
            name: "Passport_Copy.jpg".to_string(),
            kind: "Identification".to_string(),
            uploaded_on: date(2023, 10, 26),
            status: DocumentStatus::Verified,
        },
        Document {
            id: "doc-3".to_string(),
            name: "OPT_Card.png".to_string(),
            kind: "Visa Document".to_string(),
            uploaded_on: date(2023, 10, 26),
            status: DocumentStatus::Pending,
        },
    ]
}

pub fn revenue_series() -> Vec<MetricPoint> {
    [
        ("Jan", 4000),
        ("Feb", 3000),
        ("Mar", 2000),
        ("Apr", 2780),
        ("May", 1890),
        ("Jun", 2390),
        ("Jul", 3490),
        ("Aug", 5400),
    ]
    .into_iter()
    .map(|(label, value)| MetricPoint {
        label: label.to_string(),
        value,
    })
    .collect()
}
