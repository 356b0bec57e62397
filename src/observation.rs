//! The per-cycle observation value

use crate::errors::{CheckerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed external address: the trimmed echo body plus the time it
/// was seen. Produced once per cycle and consumed immediately by logging.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub address: String,
    pub observed_at: DateTime<Utc>,
}

impl Observation {
    /// Build an observation from a raw response body.
    ///
    /// Leading and trailing whitespace is stripped; a body that is empty
    /// after trimming counts as a fetch failure.
    pub fn from_body(body: &str) -> Result<Self> {
        let address = body.trim();

        if address.is_empty() {
            return Err(CheckerError::EmptyBody);
        }

        Ok(Self {
            address: address.to_string(),
            observed_at: Utc::now(),
        })
    }
}
