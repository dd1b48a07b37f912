//! syllabus_core - functional core for the syllabus course calendar.
//!
//! Everything in this crate is free of I/O: catalog types and validation,
//! the calendar aggregation over a catalog snapshot, and the repository
//! traits the imperative shell implements.

pub mod calendar;
pub mod catalog;
pub mod serde;
pub mod storage;
