//! Error types for the absence engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Errors fall into two classes: base-fetch failures, which abort an
//! aggregation and surface to the caller, and per-item conflict-lookup
//! failures, which the aggregator downgrades to "no known conflicts" for
//! that one record (see [`crate::aggregate`]).

use thiserror::Error;

/// The main error type for the absence engine.
///
/// # Example
///
/// ```
/// use absence_engine::error::AbsenceError;
///
/// let error = AbsenceError::UnexpectedStatus {
///     url: "https://example.test/api/absences".to_string(),
///     status: 500,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Unexpected status 500 from 'https://example.test/api/absences'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum AbsenceError {
    /// The request could not be sent or the response never arrived.
    /// Fatal when it occurs on the base absence fetch.
    #[error("Request to '{url}' failed: {message}")]
    FetchFailed {
        /// The URL that was requested.
        url: String,
        /// A description of the transport failure.
        message: String,
    },

    /// The endpoint answered with a non-success status code.
    #[error("Unexpected status {status} from '{url}'")]
    UnexpectedStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// The response body could not be parsed into the expected shape.
    #[error("Malformed payload from '{url}': {message}")]
    MalformedPayload {
        /// The URL whose response failed to parse.
        url: String,
        /// A description of the parse error.
        message: String,
    },

    /// A base-list record violated a data invariant (e.g. zero duration).
    /// Treated as part of the malformed-payload class: fatal to the call.
    #[error("Invalid absence record '{absence_id}': {message}")]
    InvalidRecord {
        /// The ID of the offending absence.
        absence_id: String,
        /// A description of the violated invariant.
        message: String,
    },

    /// The conflict lookup for a single absence failed. Never fatal: the
    /// aggregator logs it and records the absence with no known conflicts.
    #[error("Conflict lookup for absence '{absence_id}' failed: {message}")]
    ConflictLookup {
        /// The absence whose lookup failed.
        absence_id: String,
        /// A description of the failure.
        message: String,
    },

    /// User-supplied filter input failed validation at the boundary.
    #[error("Invalid filter criteria field '{field}': {message}")]
    InvalidCriteria {
        /// The criteria field that was invalid.
        field: String,
        /// A description of what made it invalid.
        message: String,
    },
}

/// A type alias for Results that return AbsenceError.
pub type AbsenceResult<T> = Result<T, AbsenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_displays_url_and_message() {
        let error = AbsenceError::FetchFailed {
            url: "https://example.test/api/absences".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request to 'https://example.test/api/absences' failed: connection refused"
        );
    }

    #[test]
    fn test_unexpected_status_displays_status_and_url() {
        let error = AbsenceError::UnexpectedStatus {
            url: "https://example.test/api/absences".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 503 from 'https://example.test/api/absences'"
        );
    }

    #[test]
    fn test_malformed_payload_displays_url_and_message() {
        let error = AbsenceError::MalformedPayload {
            url: "https://example.test/api/absences".to_string(),
            message: "expected an array".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed payload from 'https://example.test/api/absences': expected an array"
        );
    }

    #[test]
    fn test_invalid_record_displays_id_and_message() {
        let error = AbsenceError::InvalidRecord {
            absence_id: "abs_007".to_string(),
            message: "days must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid absence record 'abs_007': days must be greater than zero"
        );
    }

    #[test]
    fn test_conflict_lookup_displays_id_and_message() {
        let error = AbsenceError::ConflictLookup {
            absence_id: "abs_002".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Conflict lookup for absence 'abs_002' failed: timed out"
        );
    }

    #[test]
    fn test_invalid_criteria_displays_field_and_message() {
        let error = AbsenceError::InvalidCriteria {
            field: "start_date".to_string(),
            message: "not a valid date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid filter criteria field 'start_date': not a valid date"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AbsenceError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_fetch_failed() -> AbsenceResult<()> {
            Err(AbsenceError::FetchFailed {
                url: "https://example.test".to_string(),
                message: "boom".to_string(),
            })
        }

        fn propagates_error() -> AbsenceResult<()> {
            returns_fetch_failed()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
