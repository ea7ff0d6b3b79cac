//! fintrack-core
//!
//! Pure domain types, reporting-period resolution, and document key
//! conventions. No IO — this is the shared vocabulary of the fintrack system.

pub mod error;
pub mod keys;
pub mod models;
pub mod period;
