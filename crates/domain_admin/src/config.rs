//! Admin configuration document

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use domain_claims::DepreciationPolicy;
use crate::error::AdminError;

const DEFAULT_INSURERS: [&str; 5] = [
    "ICICI Lombard",
    "HDFC ERGO",
    "Bajaj Allianz",
    "Tata AIG",
    "New India",
];

const DEFAULT_WORKSHOPS: [&str; 3] = ["ABC Motors", "Sharma Auto Works", "Delite Service Center"];

const DEFAULT_CHECKLIST: [&str; 6] = ["Claim form", "Policy copy", "RC", "DL", "Estimate", "Photos"];

/// The editable pick lists of the admin document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminList {
    Insurers,
    Workshops,
    Checklist,
}

impl FromStr for AdminList {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "insurers" => Ok(AdminList::Insurers),
            "workshops" => Ok(AdminList::Workshops),
            "checklist" => Ok(AdminList::Checklist),
            other => Err(AdminError::UnknownList(other.to_string())),
        }
    }
}

const INSURERS_KEY: &str = "insurers";
const WORKSHOPS_KEY: &str = "workshops";
const CHECKLIST_KEY: &str = "checklist";
const DEP_KEY: &str = "dep";

const SECTION_KEYS: [&str; 4] = [INSURERS_KEY, WORKSHOPS_KEY, CHECKLIST_KEY, DEP_KEY];

/// Pick lists and the depreciation policy shared by every claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminConfig {
    pub insurers: Vec<String>,
    pub workshops: Vec<String>,
    pub checklist: Vec<String>,
    pub dep: DepreciationPolicy,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            insurers: to_strings(&DEFAULT_INSURERS),
            workshops: to_strings(&DEFAULT_WORKSHOPS),
            checklist: to_strings(&DEFAULT_CHECKLIST),
            dep: DepreciationPolicy::default(),
            extra: Map::new(),
        }
    }
}

impl<'de> Deserialize<'de> for AdminConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_document(Some(value)))
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn is_missing(section: Option<&Value>) -> bool {
    matches!(section, None | Some(Value::Null))
}

/// Reads one pick list; entries that are not strings are skipped
fn read_list(key: &str, section: Option<&Value>, default: &[&str]) -> Vec<String> {
    match section {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None | Some(Value::Null) => to_strings(default),
        Some(other) => {
            warn!(section = key, found = %other, "Admin list is not an array, showing defaults");
            to_strings(default)
        }
    }
}

fn read_dep(section: Option<&Value>) -> DepreciationPolicy {
    match section {
        Some(value @ Value::Object(_)) => {
            DepreciationPolicy::deserialize(value).unwrap_or_else(|err| {
                warn!(error = %err, "Unreadable depreciation policy, showing defaults");
                DepreciationPolicy::default()
            })
        }
        None | Some(Value::Null) => DepreciationPolicy::default(),
        Some(other) => {
            warn!(found = %other, "Depreciation policy is not an object, showing defaults");
            DepreciationPolicy::default()
        }
    }
}

impl AdminConfig {
    /// Builds the admin config from a stored document.
    ///
    /// Each section is read on its own: absent or `null` sections get their
    /// defaults, list entries that are not strings are skipped and the
    /// depreciation rates are read leniently. A document that is not an
    /// object yields all defaults.
    pub fn from_document(document: Option<Value>) -> Self {
        let mut document = match document {
            Some(Value::Object(map)) => map,
            Some(other) => {
                warn!(found = %other, "Admin document is not an object, showing defaults");
                return Self::default();
            }
            None => return Self::default(),
        };

        let config = Self {
            insurers: read_list(INSURERS_KEY, document.get(INSURERS_KEY), &DEFAULT_INSURERS),
            workshops: read_list(WORKSHOPS_KEY, document.get(WORKSHOPS_KEY), &DEFAULT_WORKSHOPS),
            checklist: read_list(CHECKLIST_KEY, document.get(CHECKLIST_KEY), &DEFAULT_CHECKLIST),
            dep: read_dep(document.get(DEP_KEY)),
            extra: Map::new(),
        };
        for key in SECTION_KEYS {
            document.remove(key);
        }
        Self {
            extra: document,
            ..config
        }
    }

    /// Adds the default value of every absent or `null` section to a stored
    /// document, leaving present sections untouched. Returns whether anything
    /// was added.
    pub fn fill_missing_sections(document: &mut Map<String, Value>) -> Result<bool, serde_json::Error> {
        let defaults = AdminConfig::default();
        let mut filled = false;
        for key in SECTION_KEYS {
            if !is_missing(document.get(key)) {
                continue;
            }
            let value = match key {
                INSURERS_KEY => serde_json::to_value(&defaults.insurers)?,
                WORKSHOPS_KEY => serde_json::to_value(&defaults.workshops)?,
                CHECKLIST_KEY => serde_json::to_value(&defaults.checklist)?,
                _ => serde_json::to_value(&defaults.dep)?,
            };
            debug!(section = key, "Filling missing admin section with defaults");
            document.insert(key.to_string(), value);
            filled = true;
        }
        Ok(filled)
    }

    pub fn list(&self, list: AdminList) -> &[String] {
        match list {
            AdminList::Insurers => &self.insurers,
            AdminList::Workshops => &self.workshops,
            AdminList::Checklist => &self.checklist,
        }
    }

    fn list_mut(&mut self, list: AdminList) -> &mut Vec<String> {
        match list {
            AdminList::Insurers => &mut self.insurers,
            AdminList::Workshops => &mut self.workshops,
            AdminList::Checklist => &mut self.checklist,
        }
    }

    /// Appends a trimmed entry; blank input is ignored. Returns whether
    /// anything was added.
    pub fn add_entry(&mut self, list: AdminList, entry: &str) -> bool {
        let entry = entry.trim();
        if entry.is_empty() {
            return false;
        }
        self.list_mut(list).push(entry.to_string());
        true
    }

    /// Removes an entry by position; out of range is a no-op
    pub fn remove_entry(&mut self, list: AdminList, index: usize) -> Option<String> {
        let entries = self.list_mut(list);
        (index < entries.len()).then(|| entries.remove(index))
    }

    /// Replaces the depreciation policy
    pub fn set_depreciation(&mut self, dep: DepreciationPolicy) {
        self.dep = dep;
    }
}
