//! Core data models for the absence engine.
//!
//! This module contains the wire-level types fetched from the absence API
//! and the enriched shapes produced by the aggregator.

mod absence;
mod conflict;
mod employee;
mod enriched;

pub use absence::Absence;
pub use conflict::{Conflict, ConflictReport, ConflictStatus};
pub use employee::Employee;
pub use enriched::{AbsenceRecord, DetailedAbsence, FlaggedAbsence};
