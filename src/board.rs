//! List-view state holder.
//!
//! The rendering layer owns one [`AbsenceBoard`] per list view. The board
//! holds the only mutable state in the system: the current dataset, the
//! current filter criteria, and the load status. Recomputation is explicit:
//! the UI calls [`AbsenceBoard::visible`] after any change instead of relying
//! on hidden dependency tracking.

use crate::aggregate::{self, RequestSequencer, RequestTicket};
use crate::error::{AbsenceError, AbsenceResult};
use crate::filter::{FilterCriteria, apply_filters};
use crate::models::FlaggedAbsence;
use crate::source::AbsenceSource;

/// Load state of the board, mirrored by the UI.
#[derive(Debug)]
pub enum BoardStatus {
    /// A refresh is in flight; nothing to show yet.
    Loading,
    /// The dataset is loaded and filterable.
    Ready,
    /// The base fetch failed; the view shows an error state, never a
    /// partial table.
    Failed(AbsenceError),
}

/// Mutable state behind the absence list view.
///
/// Refreshing is split into `begin`/`complete` so a driver can interleave
/// several in-flight refreshes; the internal [`RequestSequencer`] guarantees
/// last-writer-wins, discarding results of superseded requests.
#[derive(Debug)]
pub struct AbsenceBoard {
    dataset: Vec<FlaggedAbsence>,
    criteria: FilterCriteria,
    status: BoardStatus,
    sequencer: RequestSequencer,
}

impl Default for AbsenceBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl AbsenceBoard {
    /// Creates an empty board in the loading state.
    pub fn new() -> Self {
        Self {
            dataset: Vec::new(),
            criteria: FilterCriteria::default(),
            status: BoardStatus::Loading,
            sequencer: RequestSequencer::new(),
        }
    }

    /// Starts a refresh, superseding any refresh still in flight.
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.status = BoardStatus::Loading;
        self.sequencer.begin()
    }

    /// Lands the result of a refresh started with [`Self::begin_refresh`].
    ///
    /// Returns `false` when the ticket was superseded and the result
    /// discarded. On a fetch failure the dataset is cleared so the view
    /// cannot render a stale or partial table.
    pub fn complete_refresh(
        &mut self,
        ticket: RequestTicket,
        result: AbsenceResult<Vec<FlaggedAbsence>>,
    ) -> bool {
        let Some(result) = self.sequencer.accept(ticket, result) else {
            return false;
        };

        match result {
            Ok(dataset) => {
                self.dataset = dataset;
                self.status = BoardStatus::Ready;
            }
            Err(e) => {
                self.dataset.clear();
                self.status = BoardStatus::Failed(e);
            }
        }
        true
    }

    /// Runs a full refresh against `source` in one call.
    pub async fn refresh<S>(&mut self, source: &S)
    where
        S: AbsenceSource + ?Sized,
    {
        let ticket = self.begin_refresh();
        let result = aggregate::aggregate_overview(source).await;
        self.complete_refresh(ticket, result);
    }

    /// Replaces the filter criteria. Takes effect on the next
    /// [`Self::visible`] call.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    /// The criteria currently applied.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The current load status.
    pub fn status(&self) -> &BoardStatus {
        &self.status
    }

    /// The rows the view should render: the dataset with the current
    /// criteria applied. Empty while loading or after a failure.
    pub fn visible(&self) -> Vec<FlaggedAbsence> {
        apply_filters(&self.dataset, &self.criteria)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Absence, ConflictReport, ConflictStatus, Employee};
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn flagged(id: &str, name: (&str, &str), start: &str) -> FlaggedAbsence {
        FlaggedAbsence {
            absence: Absence {
                id: id.to_string(),
                employee: Employee {
                    id: format!("emp_{id}"),
                    first_name: name.0.to_string(),
                    last_name: name.1.to_string(),
                },
                start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
                days: 2,
                absence_type: "SICKNESS".to_string(),
                approved: true,
            },
            conflict_status: ConflictStatus::Clear,
        }
    }

    #[test]
    fn test_new_board_is_loading_and_empty() {
        let board = AbsenceBoard::new();
        assert!(matches!(board.status(), BoardStatus::Loading));
        assert!(board.visible().is_empty());
    }

    #[test]
    fn test_successful_refresh_exposes_dataset() {
        let mut board = AbsenceBoard::new();
        let ticket = board.begin_refresh();

        let accepted = board.complete_refresh(
            ticket,
            Ok(vec![flagged("a1", ("Rahaf", "Deckard"), "2024-01-10")]),
        );

        assert!(accepted);
        assert!(matches!(board.status(), BoardStatus::Ready));
        assert_eq!(board.visible().len(), 1);
    }

    #[test]
    fn test_failed_refresh_clears_dataset() {
        let mut board = AbsenceBoard::new();
        let ticket = board.begin_refresh();
        board.complete_refresh(
            ticket,
            Ok(vec![flagged("a1", ("Rahaf", "Deckard"), "2024-01-10")]),
        );

        let ticket = board.begin_refresh();
        board.complete_refresh(
            ticket,
            Err(AbsenceError::UnexpectedStatus {
                url: "https://example.test/api/absences".to_string(),
                status: 500,
            }),
        );

        assert!(matches!(board.status(), BoardStatus::Failed(_)));
        assert!(board.visible().is_empty());
    }

    #[test]
    fn test_superseded_refresh_is_discarded() {
        let mut board = AbsenceBoard::new();
        let first = board.begin_refresh();
        let second = board.begin_refresh();

        // The newer request lands first.
        assert!(board.complete_refresh(
            second,
            Ok(vec![flagged("a2", ("Enya", "Behm"), "2024-02-01")]),
        ));

        // The stale result must not overwrite it.
        assert!(!board.complete_refresh(
            first,
            Ok(vec![flagged("a1", ("Rahaf", "Deckard"), "2024-01-10")]),
        ));

        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].absence.id, "a2");
    }

    #[test]
    fn test_criteria_changes_recompute_visible_rows() {
        let mut board = AbsenceBoard::new();
        let ticket = board.begin_refresh();
        board.complete_refresh(
            ticket,
            Ok(vec![
                flagged("a1", ("Rahaf", "Deckard"), "2024-01-10"),
                flagged("a2", ("Enya", "Behm"), "2024-02-01"),
            ]),
        );

        board.set_criteria(FilterCriteria {
            name: "behm".to_string(),
            ..FilterCriteria::default()
        });
        assert_eq!(board.visible().len(), 1);

        board.set_criteria(FilterCriteria::default());
        assert_eq!(board.visible().len(), 2);
    }

    struct StaticSource {
        absences: Vec<Absence>,
    }

    #[async_trait]
    impl AbsenceSource for StaticSource {
        async fn fetch_absences(&self) -> AbsenceResult<Vec<Absence>> {
            Ok(self.absences.clone())
        }

        async fn fetch_conflict(&self, _absence_id: &str) -> AbsenceResult<ConflictReport> {
            Ok(ConflictReport {
                conflicts: None,
                has_conflict: Some(false),
            })
        }
    }

    #[tokio::test]
    async fn test_refresh_runs_the_whole_pipeline() {
        let source = StaticSource {
            absences: vec![flagged("a1", ("Rahaf", "Deckard"), "2024-01-10").absence],
        };

        let mut board = AbsenceBoard::new();
        board.refresh(&source).await;

        assert!(matches!(board.status(), BoardStatus::Ready));
        let visible = board.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].conflict_status, ConflictStatus::Clear);
    }
}
