//! Validation error type and shared field checks
//!
//! Every create/update payload goes through these checks before any store
//! write. Field names in errors use the wire (camelCase) spelling so the
//! frontend sees the name it sent.

use std::fmt;

use chrono::{DateTime, NaiveDate};
use url::Url;

/// Validation error for entity payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Field does not parse as an absolute URL
    InvalidUrl { field: &'static str },

    /// Field is not an RFC 3339 timestamp or a YYYY-MM-DD date
    InvalidDate { field: &'static str },

    /// Identifier is not a 24-character hex ObjectId
    InvalidId,

    /// Update payload contains no updatable fields
    NoFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidUrl { field } => write!(f, "{} is not a valid URL", field),
            Self::InvalidDate { field } => write!(f, "{} is not an ISO-8601 date", field),
            Self::InvalidId => write!(f, "id is not a valid document identifier"),
            Self::NoFields => write!(f, "no updatable fields supplied"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-empty string (whitespace-only counts as empty).
pub(crate) fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Require a non-empty list of non-empty entries.
pub(crate) fn non_empty_list(field: &'static str, values: &[String]) -> Result<(), ValidationError> {
    if values.is_empty() || values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

/// Require an absolute URL.
pub(crate) fn valid_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    non_empty(field, value)?;
    Url::parse(value).map_err(|_| ValidationError::InvalidUrl { field })?;
    Ok(())
}

/// Validate an optional URL field. Absent and empty-string values pass;
/// anything else must parse as an absolute URL.
pub(crate) fn optional_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Ok(()),
        Some(v) if v.is_empty() => Ok(()),
        Some(v) => {
            Url::parse(v).map_err(|_| ValidationError::InvalidUrl { field })?;
            Ok(())
        }
    }
}

/// Require an ISO-8601 date: either a full RFC 3339 timestamp or a plain
/// calendar date (what `<input type="date">` submits).
pub(crate) fn iso_date(field: &'static str, value: &str) -> Result<(), ValidationError> {
    non_empty(field, value)?;
    if DateTime::parse_from_rfc3339(value).is_ok() {
        return Ok(());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate { field })?;
    Ok(())
}
