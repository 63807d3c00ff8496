//! Filter implementations for the questionnaire pipeline.
//!
//! This module contains the concrete exclusion stages that run before
//! scoring.

pub mod age_appropriate;
pub mod timeline;

// Re-export for convenience
pub use age_appropriate::AgeAppropriateFilter;
pub use timeline::TimelineFilter;
