//! Absence model.

use chrono::{DateTime, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AbsenceError, AbsenceResult};

use super::Employee;

/// A recorded period where a worker is away from work.
///
/// The end date is derived, never stored: `end_date = start_date + days`
/// calendar days. The live API serves `startDate` either as a plain date or
/// as a full RFC 3339 timestamp; deserialization accepts both and keeps only
/// the calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Absence {
    /// Unique identifier for the absence.
    pub id: String,
    /// The employee this absence belongs to.
    pub employee: Employee,
    /// The first day of the absence.
    #[serde(deserialize_with = "wire_date::deserialize")]
    pub start_date: NaiveDate,
    /// Duration of the absence in calendar days. Must be greater than zero.
    pub days: u32,
    /// The kind of absence (e.g. "SICKNESS", "ANNUAL_LEAVE").
    pub absence_type: String,
    /// Whether the absence has been approved.
    pub approved: bool,
}

impl Absence {
    /// Returns the day the absence ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::models::{Absence, Employee};
    /// use chrono::NaiveDate;
    ///
    /// let absence = Absence {
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
    /// };
    /// assert_eq!(absence.end_date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    /// ```
    pub fn end_date(&self) -> NaiveDate {
        self.start_date + Days::new(u64::from(self.days))
    }

    /// Checks the record against the data invariants the rest of the engine
    /// relies on. A violation is classified with the malformed-payload
    /// errors: the record came off the wire broken.
    pub fn validate(&self) -> AbsenceResult<()> {
        if self.days == 0 {
            return Err(AbsenceError::InvalidRecord {
                absence_id: self.id.clone(),
                message: "days must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Deserialization of the API's two `startDate` spellings: a plain
/// `YYYY-MM-DD` date or an RFC 3339 timestamp.
pub(super) mod wire_date {
    use super::*;
    use serde::Deserializer;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            return Ok(date);
        }
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.date_naive())
            .map_err(|e| serde::de::Error::custom(format!("invalid date '{raw}': {e}")))
    }
}
