//! Strongly-typed identifiers for domain entities
//!
//! Survey documents carry short opaque string ids (`C` followed by seven
//! base-36 characters) rather than UUIDs, so older documents with any other
//! id spelling still load. The newtype keeps ids from mixing with other text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

macro_rules! define_id {
    ($name:ident, $prefix:literal, $len:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(random_token($prefix, $len))
            }

            /// Wraps an existing identifier without checking its shape
            pub fn from_raw(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Returns the identifier text
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the identifier prefix
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CoreError::validation(concat!(
                        stringify!($name),
                        " cannot be empty"
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn random_token(prefix: &str, len: usize) -> String {
    let mut token = String::with_capacity(prefix.len() + len);
    token.push_str(prefix);
    token.extend(
        Uuid::new_v4()
            .as_bytes()
            .iter()
            .take(len)
            .map(|b| BASE36[(*b as usize) % BASE36.len()] as char),
    );
    token
}

// Claims domain identifiers
define_id!(ClaimId, "C", 7);
