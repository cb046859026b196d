//! Motor Survey Claims Domain
//!
//! This crate implements the survey claim document and the assessment engine
//! that turns estimate line items into admissible amounts and a net assessed
//! value.
//!
//! # Assessment
//!
//! ```text
//! amount      = qty × rate
//! tax         = amount × taxPct / 100
//! depreciation= amount × rate(category) / 100
//! admissible  = max(0, amount − depreciation) + tax
//!
//! netAssessed = Σ admissible − Σ depreciation
//!             − betterment − excess − salvage − nonAdmissible
//! ```
//!
//! The depreciation policy is always passed in by the caller; nothing in this
//! crate reads shared configuration.

pub mod depreciation;
pub mod estimate;
pub mod assessment;
pub mod claim;
pub mod inspection;
pub mod report;
pub mod dashboard;
pub mod ports;
pub mod error;

pub use depreciation::{DepreciationPolicy, depreciation_rate_for};
pub use estimate::{Estimate, EstimateLineItem, LineItemCategory, LineItemPatch};
pub use assessment::{
    Assessment, AssessmentTotals, Deductions, DepreciationMode,
    recompute_item, recompute_assessment,
};
pub use claim::{
    Claim, ClaimStatus, PolicySection, VehicleSection, DriverSection, LossSection,
};
pub use inspection::{Reinspection, UploadRecord};
pub use report::{ReportDocument, ReportField, generate_report};
pub use dashboard::{ClaimFilter, StatusCounts};
pub use ports::ClaimsPort;
pub use error::ClaimError;
