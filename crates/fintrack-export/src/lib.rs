//! fintrack-export
//!
//! Turns a computed report summary into a downloadable document: Tera
//! template → plain text → PDF bytes, plus artifact naming and placement.

pub mod artifact;
pub mod error;
pub mod pdf;
pub mod render;
