//! Claim document

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use core_kernel::ClaimId;
use core_kernel::numeric::{
    lenient_decimal, lenient_list, lenient_optional_date, lenient_or_default, lenient_string, lenient_u64,
};
use crate::assessment::{recompute_assessment, recompute_item, Assessment, AssessmentTotals};
use crate::depreciation::DepreciationPolicy;
use crate::error::ClaimError;
use crate::estimate::{Estimate, EstimateLineItem, LineItemPatch};
use crate::inspection::{Reinspection, UploadRecord};

/// Claim status as shown on the dashboard tiles.
///
/// Status is set from outside; any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ClaimStatus {
    #[default]
    Pending,
    WorkInProgress,
    ReportPending,
    /// Set when the survey report is generated
    Generated,
    Overdue,
}

impl ClaimStatus {
    /// All statuses in dashboard order
    pub const ALL: [ClaimStatus; 5] = [
        ClaimStatus::Pending,
        ClaimStatus::WorkInProgress,
        ClaimStatus::ReportPending,
        ClaimStatus::Generated,
        ClaimStatus::Overdue,
    ];

    /// Returns the stored label
    pub fn label(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::WorkInProgress => "Work In Progress",
            ClaimStatus::ReportPending => "Report Pending",
            ClaimStatus::Generated => "Generated",
            ClaimStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    /// Accepts the stored label in any case, or its snake_case spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "pending" => Ok(ClaimStatus::Pending),
            "workinprogress" => Ok(ClaimStatus::WorkInProgress),
            "reportpending" => Ok(ClaimStatus::ReportPending),
            "generated" => Ok(ClaimStatus::Generated),
            "overdue" => Ok(ClaimStatus::Overdue),
            _ => Err(ClaimError::UnknownStatus(s.to_string())),
        }
    }
}

impl Serialize for ClaimStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ClaimStatus {
    /// Unknown labels load as `Pending` so one bad row cannot hide the list
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let raw = value.as_str().unwrap_or_default();
        Ok(raw.parse().unwrap_or_else(|_| {
            warn!(status = %value, "Unknown claim status, treating as Pending");
            ClaimStatus::Pending
        }))
    }
}

/// Insurance policy and insured party details
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicySection {
    #[serde(deserialize_with = "lenient_string")]
    pub ref_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub claim_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub policy_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insurer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insured_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insured_email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insured_contact: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insured_address: String,
    #[serde(deserialize_with = "lenient_decimal")]
    pub est_amount: Decimal,
    #[serde(deserialize_with = "lenient_decimal")]
    pub bill_amount: Decimal,
}

/// Vehicle identification and condition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleSection {
    #[serde(deserialize_with = "lenient_string")]
    pub veh_reg: String,
    #[serde(deserialize_with = "lenient_string")]
    pub make: String,
    #[serde(deserialize_with = "lenient_string")]
    pub model: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub year: u64,
    #[serde(deserialize_with = "lenient_string")]
    pub chassis_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub engine_no: String,
    #[serde(deserialize_with = "lenient_u64")]
    pub odometer: u64,
    #[serde(deserialize_with = "lenient_string")]
    pub pre_accident_cond: String,
}

/// Driver at the time of loss
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DriverSection {
    #[serde(deserialize_with = "lenient_string")]
    pub drv_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub drv_dl_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub drv_issue: String,
    #[serde(deserialize_with = "lenient_string")]
    pub drv_valid: String,
    #[serde(deserialize_with = "lenient_string")]
    pub drv_remarks: String,
}

/// Circumstances of the loss and inspection remarks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LossSection {
    #[serde(deserialize_with = "lenient_string")]
    pub loss_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub loss_time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub loss_place: String,
    #[serde(deserialize_with = "lenient_string")]
    pub loss_cause: String,
    #[serde(deserialize_with = "lenient_string")]
    pub insp_remarks: String,
}

/// One surveyed damage claim.
///
/// Keys this type does not know are kept in `extra` and written back on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    #[serde(default)]
    pub status: ClaimStatus,
    /// `None` when the stored date is blank or unreadable
    #[serde(
        default,
        deserialize_with = "lenient_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub policy: PolicySection,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub vehicle: VehicleSection,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub driver: DriverSection,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub loss: LossSection,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub estimate: Estimate,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub assessment: Assessment,
    #[serde(default, deserialize_with = "lenient_list")]
    pub reinspections: Vec<Reinspection>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub uploads: Vec<UploadRecord>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub comments: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claim {
    /// Creates an empty Pending claim whose excess starts at the policy default
    pub fn new(created_at: NaiveDate, policy: &DepreciationPolicy) -> Self {
        Self::with_id(ClaimId::new(), created_at, policy)
    }

    /// Same as [`Claim::new`] with a caller-chosen id
    pub fn with_id(id: ClaimId, created_at: NaiveDate, policy: &DepreciationPolicy) -> Self {
        Self {
            id,
            status: ClaimStatus::Pending,
            created_at: Some(created_at),
            policy: PolicySection::default(),
            vehicle: VehicleSection::default(),
            driver: DriverSection::default(),
            loss: LossSection::default(),
            estimate: Estimate::default(),
            assessment: Assessment::with_default_excess(policy.default_excess),
            reinspections: Vec::new(),
            uploads: Vec::new(),
            comments: Map::new(),
            extra: Map::new(),
        }
    }

    /// Heading shown on the claim screen
    pub fn title(&self) -> String {
        let claim_no = non_empty_or(&self.policy.claim_no, "(no claim no)");
        let reg = non_empty_or(&self.vehicle.veh_reg, "(no reg)");
        format!("{} | {} | {}", claim_no, reg, self.status)
    }

    /// Items of the estimate in display order
    pub fn items(&self) -> &[EstimateLineItem] {
        &self.estimate.items
    }

    /// Recomputes every item and the assessment aggregates from scratch
    pub fn recompute(&mut self, policy: &DepreciationPolicy) -> AssessmentTotals {
        for item in self.estimate.items.iter_mut() {
            *item = recompute_item(item, policy);
        }
        self.assessment.excess.get_or_insert(policy.default_excess);
        let deductions = self.assessment.deductions(policy);
        let totals = recompute_assessment(&self.estimate.items, policy, &deductions);
        self.assessment.apply_totals(totals);
        debug!(claim_id = %self.id, net_assessed = %totals.net_assessed, "Claim recomputed");
        totals
    }

    /// Appends a default line item and recomputes; returns its index
    pub fn add_item(&mut self, policy: &DepreciationPolicy) -> usize {
        self.estimate.items.push(EstimateLineItem::default());
        self.recompute(policy);
        self.estimate.items.len() - 1
    }

    /// Removes the item at `index` and recomputes.
    ///
    /// An index past the end leaves the claim untouched and returns `None`.
    pub fn remove_item(&mut self, index: usize, policy: &DepreciationPolicy) -> Option<EstimateLineItem> {
        if index >= self.estimate.items.len() {
            return None;
        }
        let removed = self.estimate.items.remove(index);
        self.recompute(policy);
        Some(removed)
    }

    /// Edits the inputs of one item and recomputes
    pub fn update_item(
        &mut self,
        index: usize,
        patch: &LineItemPatch,
        policy: &DepreciationPolicy,
    ) -> Result<&EstimateLineItem, ClaimError> {
        let len = self.estimate.items.len();
        let item = self
            .estimate
            .items
            .get_mut(index)
            .ok_or(ClaimError::LineItemNotFound { index, len })?;
        patch.apply_to(item);
        self.recompute(policy);
        Ok(&self.estimate.items[index])
    }

    /// Drops every item and recomputes
    pub fn clear_items(&mut self, policy: &DepreciationPolicy) {
        self.estimate.items.clear();
        self.recompute(policy);
    }

    /// Sets the status; every status is reachable from every other
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
    }

    /// Records that the survey report has been produced
    pub fn mark_generated(&mut self) {
        self.set_status(ClaimStatus::Generated);
    }

    pub fn add_reinspection(&mut self, entry: Reinspection) {
        self.reinspections.push(entry);
    }

    /// Removes a reinspection; out of range is a no-op
    pub fn remove_reinspection(&mut self, index: usize) -> Option<Reinspection> {
        (index < self.reinspections.len()).then(|| self.reinspections.remove(index))
    }

    pub fn clear_reinspections(&mut self) {
        self.reinspections.clear();
    }

    pub fn add_upload(&mut self, upload: UploadRecord) {
        self.uploads.push(upload);
    }

    /// Removes an upload record; out of range is a no-op
    pub fn remove_upload(&mut self, index: usize) -> Option<UploadRecord> {
        (index < self.uploads.len()).then(|| self.uploads.remove(index))
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}
