//! fintrack-reports
//!
//! The report generation pipeline: per-type aggregation over ledger records,
//! the asynchronous job lifecycle, and the repository operations the HTTP
//! surface exposes.

pub mod aggregate;
pub mod error;
pub mod service;
