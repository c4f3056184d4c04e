use serde::Serialize;

use super::domain::{Candidate, CandidateStatus, PlanCatalog, Recruiter, SubscriptionStatus};

/// Headline figures for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminSummary {
    pub total_candidates: usize,
    pub active_marketing: usize,
    pub total_recruiters: usize,
    pub monthly_revenue: u32,
    pub active_subscriptions: usize,
    pub pending_approvals: usize,
}

impl AdminSummary {
    pub fn compute(candidates: &[Candidate], recruiters: &[Recruiter], plans: &PlanCatalog) -> Self {
        let active_marketing = candidates
            .iter()
            .filter(|candidate| {
                candidate.profile.is_active && candidate.status == CandidateStatus::Active
            })
            .count();

        let subscribers = candidates
            .iter()
            .filter(|candidate| candidate.subscription_status == SubscriptionStatus::Active);

        let (active_subscriptions, monthly_revenue) =
            subscribers.fold((0, 0), |(count, revenue), candidate| {
                (
                    count + 1,
                    revenue + plans.price_of(candidate.plan_id.as_deref()),
                )
            });

        let pending_approvals = candidates
            .iter()
            .filter(|candidate| candidate.status == CandidateStatus::Submitted)
            .count();

        Self {
            total_candidates: candidates.len(),
            active_marketing,
            total_recruiters: recruiters.len(),
            monthly_revenue,
            active_subscriptions,
            pending_approvals,
        }
    }
}

/// Share of candidates holding each catalog plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanShare {
    pub plan_id: String,
    pub plan_name: String,
    pub users: usize,
    pub percent: f32,
}

pub fn plan_distribution(candidates: &[Candidate], plans: &PlanCatalog) -> Vec<PlanShare> {
    let total = candidates.len().max(1) as f32;
    plans
        .plans()
        .iter()
        .map(|plan| {
            let users = candidates
                .iter()
                .filter(|candidate| candidate.plan_id.as_deref() == Some(plan.id.as_str()))
                .count();
            PlanShare {
                plan_id: plan.id.clone(),
                plan_name: plan.name.clone(),
                users,
                percent: users as f32 * 100.0 / total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::seed;

    #[test]
    fn seed_summary_counts_only_active_subscribers_toward_revenue() {
        let summary =
            AdminSummary::compute(&seed::candidates(), &seed::recruiters(), &seed::marketing_plans());

        assert_eq!(summary.total_candidates, 4);
        assert_eq!(summary.total_recruiters, 2);
        assert_eq!(summary.active_marketing, 1);
        assert_eq!(summary.active_subscriptions, 1);
        assert_eq!(summary.monthly_revenue, 300);
        assert_eq!(summary.pending_approvals, 1);
    }

    #[test]
    fn unknown_plan_contributes_nothing_to_revenue() {
        let mut candidates = seed::candidates();
        candidates[0].subscription_status = SubscriptionStatus::Active;
        candidates[0].plan_id = Some("plan-missing".to_string());

        let summary = AdminSummary::compute(&candidates, &[], &seed::marketing_plans());
        assert_eq!(summary.active_subscriptions, 2);
        assert_eq!(summary.monthly_revenue, 300);
    }

    #[test]
    fn distribution_counts_plan_holders() {
        let shares = plan_distribution(&seed::candidates(), &seed::marketing_plans());
        let users: Vec<usize> = shares.iter().map(|share| share.users).collect();
        assert_eq!(users, vec![1, 1, 0]);
        assert!((shares[0].percent - 25.0).abs() < f32::EPSILON);
    }
}
