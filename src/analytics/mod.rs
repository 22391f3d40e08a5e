//! Frequency and length analytics over extracted text.
//!
//! [`frequency`] ranks words by occurrence count; [`stats`] computes
//! length distributions and extremal items. Both operate on the typed
//! artifacts produced by the extraction stages.

pub mod frequency;
pub mod stats;
