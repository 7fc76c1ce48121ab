//! Aggregation of absences with per-item conflict enrichment.
//!
//! Both views of the dashboard are built here: the list view over the whole
//! collection ([`aggregate_overview`]) and the per-employee detail view
//! ([`aggregate_employee`]). The base fetch is fatal when it fails; the
//! per-absence conflict lookups run concurrently and an individual failure
//! only downgrades that one record to "no known conflicts".

mod sequencer;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::error::AbsenceResult;
use crate::models::{Absence, ConflictReport, ConflictStatus, DetailedAbsence, FlaggedAbsence};
use crate::source::AbsenceSource;

pub use sequencer::{RequestSequencer, RequestTicket};

/// Fetches the base list and checks each record's invariants. A violated
/// invariant is a malformed payload: the whole call fails, no partial result.
async fn fetch_validated<S>(source: &S) -> AbsenceResult<Vec<Absence>>
where
    S: AbsenceSource + ?Sized,
{
    let absences = source.fetch_absences().await?;
    for absence in &absences {
        absence.validate()?;
    }
    debug!("fetched {} absences", absences.len());
    Ok(absences)
}

/// Looks up conflicts for every absence concurrently, waiting for all of
/// them. Results come back in input order.
async fn lookup_all<S>(
    source: &S,
    absences: &[Absence],
) -> Vec<AbsenceResult<ConflictReport>>
where
    S: AbsenceSource + ?Sized,
{
    join_all(absences.iter().map(|a| source.fetch_conflict(&a.id))).await
}

/// Builds the list view: every absence, flagged with its conflict status.
///
/// Source order is preserved. A failed conflict lookup marks that absence
/// [`ConflictStatus::Unknown`] (displayed as no known conflict) and is
/// logged, never propagated.
///
/// # Errors
///
/// Fails only when the base list cannot be retrieved or parsed.
pub async fn aggregate_overview<S>(source: &S) -> AbsenceResult<Vec<FlaggedAbsence>>
where
    S: AbsenceSource + ?Sized,
{
    let absences = fetch_validated(source).await?;
    let reports = lookup_all(source, &absences).await;

    Ok(absences
        .into_iter()
        .zip(reports)
        .map(|(absence, report)| {
            let conflict_status = match report {
                Ok(report) => ConflictStatus::from_report(&report),
                Err(e) => {
                    warn!(absence_id = %absence.id, "conflict lookup failed: {e}");
                    ConflictStatus::Unknown
                }
            };
            FlaggedAbsence {
                absence,
                conflict_status,
            }
        })
        .collect())
}

/// Builds the detail view: the given employee's absences, each carrying the
/// overlapping absences from its conflict lookup.
///
/// Source order is preserved. A failed lookup leaves that record with an
/// empty `conflicts` vector.
///
/// # Errors
///
/// Fails only when the base list cannot be retrieved or parsed.
pub async fn aggregate_employee<S>(
    source: &S,
    employee_id: &str,
) -> AbsenceResult<Vec<DetailedAbsence>>
where
    S: AbsenceSource + ?Sized,
{
    let mut absences = fetch_validated(source).await?;
    absences.retain(|a| a.employee.id == employee_id);

    let reports = lookup_all(source, &absences).await;

    Ok(absences
        .into_iter()
        .zip(reports)
        .map(|(absence, report)| {
            let conflicts = match report {
                Ok(report) => report.into_conflicts(),
                Err(e) => {
                    warn!(absence_id = %absence.id, "conflict lookup failed: {e}");
                    Vec::new()
                }
            };
            DetailedAbsence { absence, conflicts }
        })
        .collect())
}

/// Display name for the detail view's heading, taken from the first record.
/// `None` when the employee has no absences.
pub fn employee_name(absences: &[DetailedAbsence]) -> Option<String> {
    absences
        .first()
        .map(|record| record.absence.employee.full_name())
}
