//! Error types for the calendar core

use thiserror::Error;

/// Validation failure for a single date field.
///
/// This is the only error kind the core reports. It is raised at
/// construction time and by tag parsing, and a returned error always
/// means no value was produced: nothing is ever left partially
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {value} for {field}: {reason}")]
pub struct InvalidField {
    /// Name of the offending field ("month", "day", "hour", ...)
    pub field: &'static str,
    /// The rejected value, rendered as text
    pub value: String,
    /// Why the value was rejected
    pub reason: String,
}

impl InvalidField {
    pub fn new(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
