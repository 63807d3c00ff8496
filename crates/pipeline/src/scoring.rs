//! Questionnaire scoring and ranking.
//!
//! Ranking runs in stages:
//! 1. The filter pipeline drops movies that fail a hard constraint
//!    (adult content, release era)
//! 2. Each survivor is scored against the genres, mood and occasion
//! 3. Zero-score movies are dropped, the rest ranked and cut to the top picks

use anyhow::Result;
use data_loader::MovieRecord;
use rayon::prelude::*;

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{AgeAppropriateFilter, TimelineFilter};
use crate::questionnaire::Questionnaire;

/// Most movies a questionnaire returns
pub const RECOMMENDATION_LIMIT: usize = 2;

/// Turns questionnaire answers into ranked picks.
pub struct Recommender {
    filter_pipeline: FilterPipeline,
}

impl Recommender {
    /// Create a recommender whose timeline windows count back from
    /// `current_year`.
    pub fn new(current_year: i32) -> Self {
        let filter_pipeline = FilterPipeline::new()
            .add_filter(AgeAppropriateFilter)
            .add_filter(TimelineFilter::new(current_year));
        Self { filter_pipeline }
    }

    /// Best matches for the questionnaire, at most `RECOMMENDATION_LIMIT`.
    ///
    /// Sorted by score, then vote count, then vote average, all descending;
    /// full ties keep catalog order.
    pub fn recommend<'a>(
        &self,
        movies: &'a [MovieRecord],
        questionnaire: &Questionnaire,
    ) -> Result<Vec<&'a MovieRecord>> {
        let survivors = self
            .filter_pipeline
            .apply(movies.iter().collect(), questionnaire)?;

        let mut scored: Vec<(&MovieRecord, u32)> = survivors
            .into_par_iter()
            .filter_map(|movie| {
                let score = score_movie(movie, questionnaire);
                (score > 0).then_some((movie, score))
            })
            .collect();

        tracing::debug!("{} movies scored above zero", scored.len());

        scored.sort_by(|(a, a_score), (b, b_score)| {
            b_score
                .cmp(a_score)
                .then_with(|| b.vote_count.cmp(&a.vote_count))
                .then_with(|| b.vote_average.total_cmp(&a.vote_average))
        });

        Ok(scored
            .into_iter()
            .take(RECOMMENDATION_LIMIT)
            .map(|(movie, _)| movie)
            .collect())
    }
}

/// Convenience wrapper: build a `Recommender` for `current_year` and run it.
pub fn recommend<'a>(
    movies: &'a [MovieRecord],
    questionnaire: &Questionnaire,
    current_year: i32,
) -> Result<Vec<&'a MovieRecord>> {
    Recommender::new(current_year).recommend(movies, questionnaire)
}

/// Score one movie against the questionnaire.
///
/// One point per requested genre found in the genre text, plus one point
/// if any mood keyword matches and one if any occasion keyword matches.
pub fn score_movie(movie: &MovieRecord, questionnaire: &Questionnaire) -> u32 {
    let genre = movie.genre.to_lowercase();

    let genre_matches = questionnaire
        .genres
        .iter()
        .filter(|requested| genre.contains(requested.as_str()))
        .count() as u32;

    let mood_match = questionnaire
        .mood
        .is_some_and(|mood| keyword_match(&genre, mood.keywords()));
    let occasion_match = questionnaire
        .occasion
        .is_some_and(|occasion| keyword_match(&genre, occasion.keywords()));

    genre_matches + u32::from(mood_match) + u32::from(occasion_match)
}

fn keyword_match(genre: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| genre.contains(keyword))
}
