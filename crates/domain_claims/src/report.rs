//! Survey report projection
//!
//! A report is a read-only view over a claim: identification, vehicle, loss
//! and the stored assessment aggregates. Producing one never changes the
//! claim; callers mark the claim `Generated` themselves.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::Money;
use crate::claim::Claim;

/// One labelled line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportField {
    pub label: &'static str,
    pub value: String,
}

/// Flat record of the values printed on a survey report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub reference: String,
    pub claim_no: String,
    pub policy_no: String,
    pub insured: String,
    pub insurer: String,
    pub vehicle: String,
    pub registration: String,
    pub loss: String,
    pub loss_place: String,
    pub cause: String,
    pub total_admissible: Money,
    pub depreciation: Money,
    pub betterment: Money,
    pub excess: Money,
    pub salvage: Money,
    pub non_admissible: Money,
    pub net_assessed: Money,
}

/// Projects a claim into its report.
///
/// Money values come from the claim's stored aggregates, so the claim should
/// be recomputed first if anything changed since.
pub fn generate_report(claim: &Claim) -> ReportDocument {
    let policy = &claim.policy;
    let vehicle = &claim.vehicle;
    let loss = &claim.loss;
    let assessment = &claim.assessment;

    ReportDocument {
        reference: policy.ref_no.clone(),
        claim_no: policy.claim_no.clone(),
        policy_no: policy.policy_no.clone(),
        insured: policy.insured_name.clone(),
        insurer: policy.insurer.clone(),
        vehicle: join_non_empty(&[vehicle.make.as_str(), vehicle.model.as_str()]),
        registration: vehicle.veh_reg.clone(),
        loss: join_non_empty(&[loss.loss_date.as_str(), loss.loss_time.as_str()]),
        loss_place: loss.loss_place.clone(),
        cause: loss.loss_cause.clone(),
        total_admissible: Money::inr(assessment.total_admissible),
        depreciation: Money::inr(assessment.depreciation_total),
        betterment: Money::inr(assessment.betterment),
        excess: Money::inr(assessment.excess.unwrap_or(Decimal::ZERO)),
        salvage: Money::inr(assessment.salvage),
        non_admissible: Money::inr(assessment.non_admissible),
        net_assessed: Money::inr(assessment.net_assessed),
    }
}

fn join_non_empty(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl ReportDocument {
    /// Report lines in print order
    pub fn fields(&self) -> Vec<ReportField> {
        let text = |label: &'static str, value: &String| ReportField { label, value: value.clone() };
        let money = |label: &'static str, value: &Money| ReportField { label, value: value.to_string() };
        vec![
            text("Reference", &self.reference),
            text("Claim No", &self.claim_no),
            text("Policy No", &self.policy_no),
            text("Insured", &self.insured),
            text("Insurer", &self.insurer),
            text("Vehicle", &self.vehicle),
            text("Reg", &self.registration),
            text("Loss", &self.loss),
            text("Place", &self.loss_place),
            text("Cause", &self.cause),
            money("Total Admissible", &self.total_admissible),
            money("Depreciation", &self.depreciation),
            money("Betterment", &self.betterment),
            money("Excess", &self.excess),
            money("Salvage", &self.salvage),
            money("Non-admissibles", &self.non_admissible),
            money("Net Assessed", &self.net_assessed),
        ]
    }

    /// Printable HTML fragment; all claim text is escaped
    pub fn to_html(&self) -> String {
        let mut html = String::from("<h2>Survey Report</h2>\n<dl>\n");
        for field in self.fields() {
            if field.label == "Net Assessed" {
                continue;
            }
            html.push_str(&format!(
                "  <dt>{}</dt><dd>{}</dd>\n",
                field.label,
                escape_html(&field.value)
            ));
        }
        html.push_str("</dl>\n<hr>\n");
        html.push_str(&format!(
            "<h3>Net Assessed: {}</h3>\n",
            escape_html(&self.net_assessed.to_string())
        ));
        html
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
