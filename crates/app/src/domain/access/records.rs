//! Access Grant Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

use crate::{domain::orders::records::OrderUuid, tokens};

/// Opaque token unlocking course access.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(String);

impl AccessToken {
    /// Mint a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        Self(tokens::opaque_token())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Access Grant Record
///
/// Bookkeeping for a settled course order. Nothing enforces the expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessGrantRecord {
    pub token: AccessToken,
    pub order: OrderUuid,
    pub email: Option<String>,
    pub granted_at: Timestamp,
    pub expires_at: Timestamp,
}
