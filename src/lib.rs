//! Aggregation and filtering core for a worker absence dashboard.
//!
//! This crate fetches worker absence records from a remote HTTP API, enriches
//! each record with scheduling-conflict information, and applies client-side
//! filter criteria to the enriched list. Rendering, routing, and layout are
//! the job of an external presentation layer; everything here is a data
//! transformation over the wire types in [`models`].

#![warn(missing_docs)]

pub mod aggregate;
pub mod board;
pub mod error;
pub mod filter;
pub mod models;
pub mod source;
