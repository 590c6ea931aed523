//! Date-derived auth token for the catalog API.

use chrono::{NaiveDate, Utc};
use std::fmt;

/// Bearer credential sent as the `X-Auth` header on every request.
///
/// The API expects the hex md5 digest of `<secret>_<YYYYMMDD>` for the
/// current UTC date, so a token stays valid for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Derives the token for an explicit date.
    pub fn derive(secret: &str, date: NaiveDate) -> Self {
        let stamp = date.format("%Y%m%d");
        let digest = md5::compute(format!("{}_{}", secret, stamp));
        Self(format!("{:x}", digest))
    }

    /// Derives the token for the current UTC date.
    pub fn for_today(secret: &str) -> Self {
        Self::derive(secret, Utc::now().date_naive())
    }

    /// Returns the token as a hex string for use in a header value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
