//! Filter for the visitor's preferred release era.
//!
//! Movies without a readable release year never survive this stage, even
//! when the visitor has no timeline preference.

use crate::questionnaire::Questionnaire;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieRecord;

/// Keeps movies whose release year fits `questionnaire.timeline`.
///
/// ## Algorithm
/// 1. Read the year from the first four characters of `release_date`
/// 2. Drop the movie if there is no year
/// 3. Keep it if `Timeline::admits(year, current_year)`
pub struct TimelineFilter {
    current_year: i32,
}

impl TimelineFilter {
    /// Create a new TimelineFilter.
    ///
    /// # Arguments
    /// * `current_year` - Reference year the "last N years" windows count back from
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }
}

impl Filter for TimelineFilter {
    fn name(&self) -> &str {
        "TimelineFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        questionnaire: &Questionnaire,
    ) -> Result<Vec<&'a MovieRecord>> {
        let timeline = questionnaire.timeline;
        let filtered: Vec<&MovieRecord> = movies
            .into_iter()
            .filter(|movie| match movie.release_year() {
                Some(year) => timeline.admits(year, self.current_year),
                None => false,
            })
            .collect();

        Ok(filtered)
    }
}
