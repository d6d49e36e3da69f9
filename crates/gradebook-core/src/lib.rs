//! gradebook-core: Roster model, input collection, and pass/fail scoring.
//!
//! This crate defines the student data model, the interactive collector that
//! builds a roster from line-oriented input, and the tally logic the report
//! is built on.

pub mod collector;
pub mod error;
pub mod model;
pub mod statistics;
