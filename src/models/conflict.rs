//! Conflict lookup types.
//!
//! The conflict endpoint answers one absence at a time and is not consistent
//! about its shape: some responses carry a `conflicts` array of overlapping
//! absences, some only a `hasConflict` flag, some both. [`ConflictReport`]
//! models the union and derives whichever view the consumer needs.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::Employee;

/// Another worker's absence overlapping a given absence's date range.
///
/// Shaped like [`super::Absence`], but the conflict endpoint omits fields the
/// base list always carries, so `approved` is defaulted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    /// Unique identifier of the conflicting absence.
    pub id: String,
    /// The employee the conflicting absence belongs to.
    pub employee: Employee,
    /// The first day of the conflicting absence.
    #[serde(deserialize_with = "super::absence::wire_date::deserialize")]
    pub start_date: NaiveDate,
    /// Duration of the conflicting absence in calendar days.
    pub days: u32,
    /// The kind of the conflicting absence.
    pub absence_type: String,
    /// Whether the conflicting absence has been approved.
    #[serde(default)]
    pub approved: bool,
}

impl Conflict {
    /// Returns the day the conflicting absence ends.
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.days))
    }
}

/// Wire shape of `GET /api/conflict/{absenceId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictReport {
    /// The overlapping absences, when the endpoint includes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<Conflict>>,
    /// A bare flag, when the endpoint includes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_conflict: Option<bool>,
}

impl ConflictReport {
    /// Whether the report signals a conflict.
    ///
    /// Prefers the explicit flag; with only a `conflicts` array present the
    /// flag is derived from its length. A report carrying neither field
    /// means no known conflicts.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::models::ConflictReport;
    ///
    /// let report: ConflictReport = serde_json::from_str(r#"{"hasConflict": true}"#).unwrap();
    /// assert!(report.flag());
    ///
    /// let report: ConflictReport = serde_json::from_str(r#"{"conflicts": []}"#).unwrap();
    /// assert!(!report.flag());
    /// ```
    pub fn flag(&self) -> bool {
        match self.has_conflict {
            Some(flag) => flag,
            None => self.conflicts.as_ref().is_some_and(|c| !c.is_empty()),
        }
    }

    /// Consumes the report, returning the overlapping absences (empty when
    /// the endpoint only sent a flag).
    pub fn into_conflicts(self) -> Vec<Conflict> {
        self.conflicts.unwrap_or_default()
    }
}

/// Conflict information attached to a list-view absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictStatus {
    /// The lookup succeeded and reported an overlap.
    Conflict,
    /// The lookup succeeded and reported no overlap.
    Clear,
    /// The lookup failed; the absence is treated as having no known
    /// conflicts, but the status stays distinguishable from [`Self::Clear`].
    Unknown,
}

impl ConflictStatus {
    /// Builds a status from a successful lookup.
    pub fn from_report(report: &ConflictReport) -> Self {
        if report.flag() {
            ConflictStatus::Conflict
        } else {
            ConflictStatus::Clear
        }
    }

    /// Whether the absence should be displayed as conflicting.
    /// [`Self::Unknown`] reads as "no known conflict".
    pub fn is_conflict(&self) -> bool {
        matches!(self, ConflictStatus::Conflict)
    }

    /// Whether the lookup actually resolved.
    pub fn is_known(&self) -> bool {
        !matches!(self, ConflictStatus::Unknown)
    }
}
