//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::questionnaire::Questionnaire;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(AgeAppropriateFilter)
///     .add_filter(TimelineFilter::new(2025));
///
/// let survivors = pipeline.apply(store.movies().iter().collect(), &questionnaire)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// Stops at the first filter that fails.
    pub fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        questionnaire: &Questionnaire,
    ) -> Result<Vec<&'a MovieRecord>> {
        let mut current = movies;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, questionnaire)?;
            tracing::debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
