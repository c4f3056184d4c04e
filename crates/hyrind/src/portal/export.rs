use serde::Serialize;

use super::domain::{Candidate, PlanCatalog, Recruiter};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("unable to flush roster export: {0}")]
    Flush(String),
    #[error("roster export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// One line of the candidate roster export.
#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    status: &'static str,
    active: bool,
    subscription: &'static str,
    plan: &'a str,
    monthly_price: u32,
    recruiter: &'a str,
    next_billing_date: String,
}

/// Render the candidate roster as CSV, resolving plan prices and recruiter
/// names. Dangling recruiter ids are exported as-is.
pub fn roster_csv(
    candidates: &[Candidate],
    recruiters: &[Recruiter],
    plans: &PlanCatalog,
) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for candidate in candidates {
        let recruiter = candidate.assigned_recruiter_id.as_ref().map(|id| {
            recruiters
                .iter()
                .find(|recruiter| recruiter.id() == id)
                .map(|recruiter| recruiter.profile.name.as_str())
                .unwrap_or(id.as_str())
        });

        writer.serialize(RosterRow {
            id: candidate.id().as_str(),
            name: &candidate.profile.name,
            email: &candidate.profile.email,
            status: candidate.status.code(),
            active: candidate.profile.is_active,
            subscription: candidate.subscription_status.code(),
            plan: candidate.plan_id.as_deref().unwrap_or_default(),
            monthly_price: plans.price_of(candidate.plan_id.as_deref()),
            recruiter: recruiter.unwrap_or_default(),
            next_billing_date: candidate
                .next_billing_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Flush(err.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::seed;

    #[test]
    fn roster_has_header_and_one_line_per_candidate() {
        let csv = roster_csv(
            &seed::candidates(),
            &seed::recruiters(),
            &seed::marketing_plans(),
        )
        .expect("roster renders");

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("id,name,email,status,active,subscription"));
        assert!(csv.contains("cand-2,Emily Chen"));
        assert!(csv.contains("plan-pro,300,Sarah Jenkins"));
    }

    #[test]
    fn dangling_recruiter_ids_are_kept() {
        let mut candidates = seed::candidates();
        candidates[0].assigned_recruiter_id = Some("rec-404".into());

        let csv = roster_csv(&candidates, &seed::recruiters(), &seed::marketing_plans())
            .expect("roster renders");
        assert!(csv.contains("rec-404"));
    }
}
