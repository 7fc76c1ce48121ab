//! Absence data sources.
//!
//! [`AbsenceSource`] is the seam between the aggregator and the remote API:
//! production code uses [`HttpAbsenceSource`], tests substitute in-memory
//! doubles.

mod http;

use async_trait::async_trait;

use crate::error::AbsenceResult;
use crate::models::{Absence, ConflictReport};

pub use http::HttpAbsenceSource;

/// Read-only access to the absence API.
#[async_trait]
pub trait AbsenceSource: Send + Sync {
    /// Fetches the full absence collection.
    async fn fetch_absences(&self) -> AbsenceResult<Vec<Absence>>;

    /// Fetches the conflict report for a single absence.
    async fn fetch_conflict(&self, absence_id: &str) -> AbsenceResult<ConflictReport>;
}
