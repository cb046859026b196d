//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the survey domains. These fixtures are
//! consistent and predictable so expected totals can be written by hand.

use chrono::NaiveDate;
use core_kernel::ClaimId;
use domain_admin::{AdminConfig, Session};
use domain_claims::{DepreciationPolicy, EstimateLineItem, LineItemCategory};
use rust_decimal_macros::dec;

/// Fixture for depreciation policies
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// 30% parts, 50% paint, 0% glass, 30% fibre, 1000 excess
    pub fn standard() -> DepreciationPolicy {
        DepreciationPolicy::default()
    }

    /// Every rate at zero and no excess
    pub fn no_depreciation() -> DepreciationPolicy {
        DepreciationPolicy::new(dec!(0), dec!(0), dec!(0), dec!(0), dec!(0))
    }

    /// Harsher parts rate for policy-change scenarios
    pub fn harsh_parts() -> DepreciationPolicy {
        DepreciationPolicy::new(dec!(50), dec!(50), dec!(0), dec!(30), dec!(1000))
    }
}

/// Fixture for estimate line items; derived amounts are not yet computed
pub struct ItemFixtures;

impl ItemFixtures {
    /// One part at 1000 with 18% tax: admissible 880 under the standard policy
    pub fn part_1000() -> EstimateLineItem {
        EstimateLineItem::new(LineItemCategory::Part, "Front bumper", dec!(1), dec!(1000), dec!(18))
    }

    /// One paint job at 1000 with 18% tax: admissible 680 under the standard policy
    pub fn paint_1000() -> EstimateLineItem {
        EstimateLineItem::new(LineItemCategory::Paint, "Bumper paint", dec!(1), dec!(1000), dec!(18))
    }

    /// Two hours of labour at 500 with 18% tax: admissible 1180
    pub fn labour_2x500() -> EstimateLineItem {
        EstimateLineItem::new(LineItemCategory::Labour, "Denting", dec!(2), dec!(500), dec!(18))
    }

    pub fn glass_8000() -> EstimateLineItem {
        EstimateLineItem::new(LineItemCategory::Glass, "Windshield", dec!(1), dec!(8000), dec!(18))
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard claim creation date (June 1, 2024)
    pub fn created_at() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Standard reinspection date
    pub fn reinspection_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }
}

/// Fixture for identifiers and fixed strings
pub struct IdFixtures;

impl IdFixtures {
    pub fn claim_id() -> ClaimId {
        ClaimId::from_raw("Ctest001")
    }

    pub fn unknown_claim_id() -> ClaimId {
        ClaimId::from_raw("Cmissing")
    }
}

/// Fixture for the admin document and session
pub struct AdminFixtures;

impl AdminFixtures {
    pub fn defaults() -> AdminConfig {
        AdminConfig::default()
    }

    pub fn surveyor_session() -> Session {
        Session::login("surveyor@example.com", "secret")
    }
}
