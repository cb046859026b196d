//! Claims DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use core_kernel::numeric::{lenient_decimal, lenient_optional_decimal};
use core_kernel::ClaimId;
use domain_claims::{
    AssessmentTotals, Claim, ClaimError, ClaimFilter, ClaimStatus, DepreciationMode,
    DriverSection, EstimateLineItem, LossSection, PolicySection, ReportDocument, ReportField,
    StatusCounts, UploadRecord, VehicleSection,
};

/// Claim list query string; blank values mean "no filter"
#[derive(Debug, Default, Deserialize)]
pub struct ClaimListQuery {
    pub status: Option<String>,
    pub insurer: Option<String>,
    pub vehicle: Option<String>,
    pub text: Option<String>,
}

impl TryFrom<ClaimListQuery> for ClaimFilter {
    type Error = ClaimError;

    fn try_from(query: ClaimListQuery) -> Result<Self, Self::Error> {
        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<ClaimStatus>()?),
        };
        Ok(ClaimFilter {
            status,
            insurer: query.insurer,
            vehicle: query.vehicle,
            text: query.text,
        })
    }
}

/// One row of the claim list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub id: ClaimId,
    pub title: String,
    pub claim_no: String,
    pub veh_reg: String,
    pub insurer: String,
    pub status: ClaimStatus,
    pub created_at: Option<NaiveDate>,
    pub net_assessed: Decimal,
}

impl From<&Claim> for ClaimSummary {
    fn from(claim: &Claim) -> Self {
        Self {
            id: claim.id.clone(),
            title: claim.title(),
            claim_no: claim.policy.claim_no.clone(),
            veh_reg: claim.vehicle.veh_reg.clone(),
            insurer: claim.policy.insurer.clone(),
            status: claim.status,
            created_at: claim.created_at,
            net_assessed: claim.assessment.net_assessed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub counts: StatusCounts,
    pub total: usize,
}

/// Estimate header fields; the item list is edited through its own routes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateHeaderRequest {
    pub workshop: Option<String>,
    pub workshop_gstin: Option<String>,
    pub estimate_date: Option<String>,
    pub bill_date: Option<String>,
}

/// Claim sections to overwrite; absent sections are left alone
#[derive(Debug, Deserialize)]
pub struct UpdateClaimRequest {
    pub policy: Option<PolicySection>,
    pub vehicle: Option<VehicleSection>,
    pub driver: Option<DriverSection>,
    pub loss: Option<LossSection>,
    pub estimate: Option<EstimateHeaderRequest>,
    pub comments: Option<Map<String, Value>>,
}

impl UpdateClaimRequest {
    pub fn apply_to(self, claim: &mut Claim) {
        if let Some(policy) = self.policy {
            claim.policy = policy;
        }
        if let Some(vehicle) = self.vehicle {
            claim.vehicle = vehicle;
        }
        if let Some(driver) = self.driver {
            claim.driver = driver;
        }
        if let Some(loss) = self.loss {
            claim.loss = loss;
        }
        if let Some(header) = self.estimate {
            let estimate = &mut claim.estimate;
            if let Some(workshop) = header.workshop {
                estimate.workshop = workshop;
            }
            if let Some(gstin) = header.workshop_gstin {
                estimate.workshop_gstin = gstin;
            }
            if let Some(date) = header.estimate_date {
                estimate.estimate_date = date;
            }
            if let Some(date) = header.bill_date {
                estimate.bill_date = date;
            }
        }
        if let Some(comments) = self.comments {
            claim.comments = comments;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// Assessment form. Deductions are replaced wholesale; a missing or blank
/// excess falls back to the policy default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssessmentRequest {
    #[serde(default)]
    pub dep_mode: DepreciationMode,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub betterment: Decimal,
    #[serde(default, deserialize_with = "lenient_optional_decimal")]
    pub excess: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub salvage: Decimal,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub non_admissible: Decimal,
}

/// Estimate items with their sums and the claim aggregates
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub items: Vec<EstimateLineItem>,
    pub sum_amount: Decimal,
    pub sum_tax: Decimal,
    pub sum_admissible: Decimal,
    pub totals: AssessmentTotals,
}

impl From<&Claim> for ItemsResponse {
    fn from(claim: &Claim) -> Self {
        Self {
            items: claim.estimate.items.clone(),
            sum_amount: claim.estimate.sum_amount(),
            sum_tax: claim.estimate.sum_tax(),
            sum_admissible: claim.estimate.sum_admissible(),
            totals: claim.assessment.totals(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddReinspectionRequest {
    pub reason: String,
    pub findings: String,
}

/// One upload record or several
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddUploadsRequest {
    Many(Vec<UploadRecord>),
    One(UploadRecord),
}

impl AddUploadsRequest {
    pub fn into_records(self) -> Vec<UploadRecord> {
        match self {
            AddUploadsRequest::Many(records) => records,
            AddUploadsRequest::One(record) => vec![record],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: ReportDocument,
    pub fields: Vec<ReportField>,
}

impl From<ReportDocument> for ReportResponse {
    fn from(report: ReportDocument) -> Self {
        let fields = report.fields();
        Self { report, fields }
    }
}
