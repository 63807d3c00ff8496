//! Core traits for the questionnaire filtering pipeline.
//!
//! This module defines the Filter trait that lets the hard exclusion
//! stages of the questionnaire be composed and logged uniformly.

use anyhow::Result;
use data_loader::MovieRecord;

use crate::questionnaire::Questionnaire;

/// A single exclusion stage applied before scoring.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets a pipeline live in shared server state
/// - Filters take ownership of the Vec and return the survivors, so
///   stages chain without cloning records; only references move
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies still in the running (takes ownership)
    /// * `questionnaire` - The visitor's answers
    ///
    /// # Returns
    /// * `Ok(Vec<&MovieRecord>)` - The surviving movies, order preserved
    /// * `Err` - If filtering fails
    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        questionnaire: &Questionnaire,
    ) -> Result<Vec<&'a MovieRecord>>;
}
