//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a usable email address.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid email address: {reason}")]
pub struct EmailError {
    reason: &'static str,
}

impl EmailError {
    const fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A normalized email address.
///
/// Parsing trims surrounding whitespace and lowercases the input, then
/// checks the minimal structure the commerce API itself relies on: a
/// non-empty local part and domain around a single `@`, within the RFC 5321
/// length limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Maximum length of an email address (RFC 5321).
    pub const MAX_LENGTH: usize = 254;

    /// Parse and normalize an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than
    /// [`Self::MAX_LENGTH`], or not of the form `local@domain`.
    pub fn parse(input: &str) -> Result<Self, EmailError> {
        let normalized = input.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(EmailError::new("empty"));
        }
        if normalized.len() > Self::MAX_LENGTH {
            return Err(EmailError::new("longer than 254 characters"));
        }
        match normalized.split_once('@') {
            None => Err(EmailError::new("missing @ symbol")),
            Some(("", _)) => Err(EmailError::new("empty local part")),
            Some((_, "")) => Err(EmailError::new("empty domain")),
            Some((_, domain)) if domain.contains('@') => {
                Err(EmailError::new("more than one @ symbol"))
            }
            Some(_) => Ok(Self(normalized)),
        }
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Email` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
