//! Validated email address newtype.
//!
//! Parse-don't-validate: anything holding an [`EmailAddress`] has already
//! passed the shape check, so downstream code never re-validates.

use std::fmt;

use thiserror::Error;
use validator::ValidateEmail;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`{0}` is not a valid email address")]
pub struct EmailParseError(String);

/// An email address that passed a standard mailbox-shape check.
///
/// Comparison and uniqueness are exact-string, case-sensitive: the store
/// treats `A@b.com` and `a@b.com` as distinct subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(value: &str) -> Result<Self, EmailParseError> {
        if value.validate_email() {
            Ok(Self(value.to_string()))
        } else {
            Err(EmailParseError(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
