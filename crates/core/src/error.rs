//! Error classification shared by the lot and attendant errors.

use serde::Serialize;

/// Broad class of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Malformed input, e.g. a blank plate or ticket number.
    InputValidation,
    /// No space where the request needed one.
    Capacity,
    /// The request conflicts with current state (duplicate vehicle, stale ticket).
    State,
}
