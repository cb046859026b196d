//! Dashboard filtering and status tiles

use serde::Serialize;

use crate::claim::{Claim, ClaimStatus};

/// Claim list filter. Every present criterion must match.
///
/// Text criteria are trimmed and matched as case-insensitive substrings;
/// blank text is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimFilter {
    pub status: Option<ClaimStatus>,
    /// Matched against the insurer name
    pub insurer: Option<String>,
    /// Matched against the vehicle registration
    pub vehicle: Option<String>,
    /// Matched against reference, claim and policy numbers
    pub text: Option<String>,
}

impl ClaimFilter {
    pub fn by_status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn matches(&self, claim: &Claim) -> bool {
        if let Some(status) = self.status {
            if claim.status != status {
                return false;
            }
        }
        if let Some(needle) = needle(&self.insurer) {
            if !claim.policy.insurer.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(needle) = needle(&self.vehicle) {
            if !claim.vehicle.veh_reg.to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(needle) = needle(&self.text) {
            let policy = &claim.policy;
            let blob = [policy.ref_no.as_str(), policy.claim_no.as_str(), policy.policy_no.as_str()]
                .join(" ")
                .to_lowercase();
            if !blob.contains(&needle) {
                return false;
            }
        }
        true
    }

    /// Keeps the matching claims in their stored order
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        claims.iter().filter(|c| self.matches(c)).collect()
    }
}

fn needle(criterion: &Option<String>) -> Option<String> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Number of claims per status; every status is present, zero when unused
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "Pending")]
    pub pending: usize,
    #[serde(rename = "Work In Progress")]
    pub work_in_progress: usize,
    #[serde(rename = "Report Pending")]
    pub report_pending: usize,
    #[serde(rename = "Generated")]
    pub generated: usize,
    #[serde(rename = "Overdue")]
    pub overdue: usize,
}

impl StatusCounts {
    pub fn tally<'a>(claims: impl IntoIterator<Item = &'a Claim>) -> Self {
        let mut counts = Self::default();
        for claim in claims {
            *counts.slot(claim.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Pending => self.pending,
            ClaimStatus::WorkInProgress => self.work_in_progress,
            ClaimStatus::ReportPending => self.report_pending,
            ClaimStatus::Generated => self.generated,
            ClaimStatus::Overdue => self.overdue,
        }
    }

    pub fn total(&self) -> usize {
        ClaimStatus::ALL.iter().map(|s| self.get(*s)).sum()
    }

    fn slot(&mut self, status: ClaimStatus) -> &mut usize {
        match status {
            ClaimStatus::Pending => &mut self.pending,
            ClaimStatus::WorkInProgress => &mut self.work_in_progress,
            ClaimStatus::ReportPending => &mut self.report_pending,
            ClaimStatus::Generated => &mut self.generated,
            ClaimStatus::Overdue => &mut self.overdue,
        }
    }
}
