//! Test Data Builders
//!
//! Provides builder patterns for constructing claims with sensible defaults.
//! Builders let tests set only the fields they care about; free-text fields
//! are filled with fake data.

use chrono::NaiveDate;
use core_kernel::ClaimId;
use domain_claims::{
    Claim, ClaimStatus, DepreciationPolicy, EstimateLineItem, LineItemCategory, Reinspection,
    UploadRecord,
};
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::{PolicyFixtures, TemporalFixtures};

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    created_at: NaiveDate,
    policy: DepreciationPolicy,
    status: ClaimStatus,
    claim_no: String,
    veh_reg: String,
    insurer: String,
    insured_name: String,
    make: String,
    model: String,
    loss_place: String,
    excess: Option<Decimal>,
    betterment: Decimal,
    salvage: Decimal,
    non_admissible: Decimal,
    items: Vec<EstimateLineItem>,
    reinspections: Vec<Reinspection>,
    uploads: Vec<UploadRecord>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder under the standard policy
    pub fn new() -> Self {
        let policy = PolicyFixtures::standard();
        Self {
            id: ClaimId::new(),
            created_at: TemporalFixtures::created_at(),
            excess: Some(policy.default_excess),
            policy,
            status: ClaimStatus::Pending,
            claim_no: format!("CL-{}", (1000..9999).fake::<u32>()),
            veh_reg: format!("MH12AB{}", (1000..9999).fake::<u32>()),
            insurer: CompanyName().fake(),
            insured_name: Name().fake(),
            make: "Maruti".to_string(),
            model: "Swift".to_string(),
            loss_place: CityName().fake(),
            betterment: Decimal::ZERO,
            salvage: Decimal::ZERO,
            non_admissible: Decimal::ZERO,
            items: Vec::new(),
            reinspections: Vec::new(),
            uploads: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: ClaimId) -> Self {
        self.id = id;
        self
    }

    /// Sets the policy used for the default excess and the final recompute
    pub fn with_policy(mut self, policy: DepreciationPolicy) -> Self {
        self.excess = Some(policy.default_excess);
        self.policy = policy;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_claim_no(mut self, claim_no: impl Into<String>) -> Self {
        self.claim_no = claim_no.into();
        self
    }

    pub fn with_registration(mut self, reg: impl Into<String>) -> Self {
        self.veh_reg = reg.into();
        self
    }

    pub fn with_insurer(mut self, insurer: impl Into<String>) -> Self {
        self.insurer = insurer.into();
        self
    }

    pub fn with_insured(mut self, name: impl Into<String>) -> Self {
        self.insured_name = name.into();
        self
    }

    pub fn with_vehicle(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    /// Sets the excess; `None` means the policy default applies
    pub fn with_excess(mut self, excess: Option<Decimal>) -> Self {
        self.excess = excess;
        self
    }

    pub fn with_betterment(mut self, betterment: Decimal) -> Self {
        self.betterment = betterment;
        self
    }

    pub fn with_salvage(mut self, salvage: Decimal) -> Self {
        self.salvage = salvage;
        self
    }

    pub fn with_non_admissible(mut self, non_admissible: Decimal) -> Self {
        self.non_admissible = non_admissible;
        self
    }

    pub fn with_item(mut self, item: EstimateLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Adds an item built from its inputs with 18% tax
    pub fn with_simple_item(self, category: LineItemCategory, qty: Decimal, rate: Decimal) -> Self {
        self.with_item(EstimateLineItem::new(category, "", qty, rate, rust_decimal_macros::dec!(18)))
    }

    pub fn with_reinspection(mut self, reinspection: Reinspection) -> Self {
        self.reinspections.push(reinspection);
        self
    }

    pub fn with_upload(mut self, upload: UploadRecord) -> Self {
        self.uploads.push(upload);
        self
    }

    /// Builds the claim with all derived amounts recomputed
    pub fn build(self) -> Claim {
        let mut claim = Claim::with_id(self.id, self.created_at, &self.policy);
        claim.status = self.status;
        claim.policy.claim_no = self.claim_no;
        claim.policy.insurer = self.insurer;
        claim.policy.insured_name = self.insured_name;
        claim.vehicle.veh_reg = self.veh_reg;
        claim.vehicle.make = self.make;
        claim.vehicle.model = self.model;
        claim.loss.loss_place = self.loss_place;
        claim.assessment.excess = self.excess;
        claim.assessment.betterment = self.betterment;
        claim.assessment.salvage = self.salvage;
        claim.assessment.non_admissible = self.non_admissible;
        claim.estimate.items = self.items;
        claim.reinspections = self.reinspections;
        claim.uploads = self.uploads;
        claim.recompute(&self.policy);
        claim
    }
}
