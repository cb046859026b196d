//! Reinspection entries and upload metadata attached to a claim

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::numeric::{lenient_optional_date, lenient_string};

/// A follow-up visit after repairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reinspection {
    #[serde(default, deserialize_with = "lenient_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reason: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub findings: String,
}

impl Reinspection {
    /// A blank entry dated `date`
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            reason: String::new(),
            findings: String::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_findings(mut self, findings: impl Into<String>) -> Self {
        self.findings = findings.into();
        self
    }
}

/// Metadata of a document attached to the claim. File contents are not kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "core_kernel::numeric::lenient_u64")]
    pub size: u64,
    /// MIME type as reported by the client
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub content_type: String,
}

impl UploadRecord {
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: content_type.into(),
        }
    }
}
