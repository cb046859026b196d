//! Login session document

use serde::{Deserialize, Serialize};

/// The logged-in surveyor. Credentials are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub email: String,
}

impl Session {
    /// Starts a session for any email; the password is ignored
    pub fn login(email: impl Into<String>, _password: &str) -> Self {
        Self {
            email: email.into().trim().to_string(),
        }
    }
}
