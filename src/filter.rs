//! Client-side filtering of enriched absence lists.
//!
//! Filtering is a pure function: the caller owns the criteria and the
//! dataset, and re-invokes [`apply_filters`] whenever either changes. There
//! is no hidden dependency tracking and no mutation of the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AbsenceError, AbsenceResult};
use crate::models::{Absence, AbsenceRecord};

/// User-specified filter predicates.
///
/// Every field is optional: an empty string or `None` disables that
/// predicate. Active predicates are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the employee's full name.
    pub name: String,
    /// Inclusive lower bound on the absence start date.
    ///
    /// Deliberately compared against `start_date` only, never the derived
    /// end date, matching the observed dashboard behavior.
    pub start_date: Option<NaiveDate>,
    /// Case-insensitive substring matched against the absence type.
    pub absence_type: String,
}

impl FilterCriteria {
    /// Parses user-entered text into a start-date bound.
    ///
    /// This is the input boundary: empty text disables the predicate, a
    /// well-formed `YYYY-MM-DD` date activates it, anything else is rejected
    /// here so [`apply_filters`] never sees an invalid date.
    ///
    /// # Errors
    ///
    /// Returns [`AbsenceError::InvalidCriteria`] for unparsable text.
    pub fn parse_start_date(raw: &str) -> AbsenceResult<Option<NaiveDate>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| AbsenceError::InvalidCriteria {
                field: "start_date".to_string(),
                message: format!("'{trimmed}' is not a valid date: {e}"),
            })
    }

    /// Whether a single absence satisfies every active predicate.
    pub fn matches(&self, absence: &Absence) -> bool {
        if !self.name.is_empty() {
            let full_name = absence.employee.full_name().to_lowercase();
            if !full_name.contains(&self.name.to_lowercase()) {
                return false;
            }
        }

        if let Some(bound) = self.start_date {
            if absence.start_date < bound {
                return false;
            }
        }

        if !self.absence_type.is_empty() {
            let absence_type = absence.absence_type.to_lowercase();
            if !absence_type.contains(&self.absence_type.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Returns the items satisfying all active criteria, in their original
/// relative order. The input is never mutated; empty criteria return a copy
/// of the whole list.
///
/// Works on bare [`Absence`] lists and on both enriched shapes via
/// [`AbsenceRecord`].
///
/// # Examples
///
/// ```
/// use absence_engine::filter::{FilterCriteria, apply_filters};
/// use absence_engine::models::{Absence, Employee};
/// use chrono::NaiveDate;
///
/// let items = vec![Absence {
///     id: "abs_001".to_string(),
///     employee: Employee {
///         id: "42".to_string(),
///         first_name: "Rahaf".to_string(),
///         last_name: "Deckard".to_string(),
///     },
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     days: 5,
///     absence_type: "SICKNESS".to_string(),
///     approved: true,
/// }];
///
/// let criteria = FilterCriteria {
///     name: "deck".to_string(),
///     ..FilterCriteria::default()
/// };
/// assert_eq!(apply_filters(&items, &criteria).len(), 1);
/// ```
pub fn apply_filters<T>(items: &[T], criteria: &FilterCriteria) -> Vec<T>
where
    T: AbsenceRecord + Clone,
{
    items
        .iter()
        .filter(|item| criteria.matches(item.absence()))
        .cloned()
        .collect()
}
