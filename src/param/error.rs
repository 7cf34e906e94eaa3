//! Parameter errors.

use thiserror::Error;

use super::value::ParamValue;

/// Error returned when the render configuration rejects a parameter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// A known parameter was given a value it cannot hold.
    #[error("invalid value {value} for '{key}': expected {expected}")]
    InvalidValue {
        key: String,
        value: ParamValue,
        expected: &'static str,
    },
    /// A named style was requested that is not registered.
    #[error("unknown style '{name}' (available: {})", .available.join(", "))]
    UnknownStyle {
        name: String,
        available: Vec<String>,
    },
}
