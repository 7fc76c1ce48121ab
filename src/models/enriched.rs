//! Enriched absence shapes produced by the aggregator.
//!
//! The list view and the detail view consume the same base records but need
//! different conflict information, so enrichment comes in two shapes:
//! [`FlaggedAbsence`] carries a per-row flag, [`DetailedAbsence`] carries the
//! overlapping absences themselves.

use serde::{Deserialize, Serialize};

use super::{Absence, Conflict, ConflictStatus};

/// An absence enriched with a conflict flag, for the list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedAbsence {
    /// The underlying absence record.
    pub absence: Absence,
    /// Outcome of the conflict lookup for this absence.
    pub conflict_status: ConflictStatus,
}

/// An absence enriched with its overlapping absences, for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedAbsence {
    /// The underlying absence record.
    pub absence: Absence,
    /// The overlapping absences. Empty when the lookup reported none or
    /// failed (no known conflicts).
    pub conflicts: Vec<Conflict>,
}

impl DetailedAbsence {
    /// Whether any overlapping absence is known.
    pub fn has_conflict(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Access to the base absence inside any record the filter engine handles.
///
/// Implemented by both enriched shapes and by bare [`Absence`], so
/// [`crate::filter::apply_filters`] works on any of them.
pub trait AbsenceRecord {
    /// Returns the underlying absence.
    fn absence(&self) -> &Absence;
}

impl AbsenceRecord for Absence {
    fn absence(&self) -> &Absence {
        self
    }
}

impl AbsenceRecord for FlaggedAbsence {
    fn absence(&self) -> &Absence {
        &self.absence
    }
}

impl AbsenceRecord for DetailedAbsence {
    fn absence(&self) -> &Absence {
        &self.absence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use chrono::NaiveDate;

    fn test_absence() -> Absence {
        Absence {
            id: "abs_001".to_string(),
            employee: Employee {
                id: "42".to_string(),
                first_name: "Rahaf".to_string(),
                last_name: "Deckard".to_string(),
            },
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            days: 5,
            absence_type: "SICKNESS".to_string(),
            approved: true,
        }
    }

    #[test]
    fn test_absence_record_is_identity_for_bare_absence() {
        let absence = test_absence();
        assert_eq!(absence.absence(), &absence);
    }

    #[test]
    fn test_flagged_absence_exposes_base_record() {
        let flagged = FlaggedAbsence {
            absence: test_absence(),
            conflict_status: ConflictStatus::Clear,
        };
        assert_eq!(flagged.absence().id, "abs_001");
        assert!(!flagged.conflict_status.is_conflict());
    }

    #[test]
    fn test_detailed_absence_has_conflict_tracks_vector() {
        let mut detailed = DetailedAbsence {
            absence: test_absence(),
            conflicts: vec![],
        };
        assert!(!detailed.has_conflict());

        detailed.conflicts.push(Conflict {
            id: "abs_009".to_string(),
            employee: Employee {
                id: "7".to_string(),
                first_name: "Enya".to_string(),
                last_name: "Behm".to_string(),
            },
            start_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            days: 2,
            absence_type: "SICKNESS".to_string(),
            approved: false,
        });
        assert!(detailed.has_conflict());
    }
}
