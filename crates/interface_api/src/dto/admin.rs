//! Admin DTOs

use serde::Deserialize;

/// New entry for one of the admin pick lists
#[derive(Debug, Deserialize)]
pub struct AddEntryRequest {
    #[serde(default)]
    pub value: String,
}
