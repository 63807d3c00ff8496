//! Filter to drop movies that look like adult content.
//!
//! The dataset has no rating column, so this is a word-level heuristic
//! over the genre, title and overview text.

use crate::questionnaire::Questionnaire;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieRecord;

/// Words that mark a movie as adult content when they appear as a token
const ADULT_TERMS: [&str; 4] = ["r", "r-rated", "nc-17", "adult"];

/// Phrases that mark adult content anywhere in the overview
const ADULT_OVERVIEW_PHRASES: [&str; 2] = ["r-rated", "nc-17"];

/// Punctuation stripped from both ends of title/overview words
const WORD_PUNCTUATION: &[char] = &[
    '.', ',', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'',
];

/// Removes movies with adult-content signals when the visitor asked for
/// age-appropriate picks; passes everything through otherwise.
///
/// ## Algorithm
/// A movie is dropped when any of:
/// 1. an adult term is one of the genre tokens (split on commas and whitespace)
/// 2. an adult term is one of the title or overview words, punctuation stripped
/// 3. "r-rated" or "nc-17" occurs anywhere in the overview
pub struct AgeAppropriateFilter;

impl Filter for AgeAppropriateFilter {
    fn name(&self) -> &str {
        "AgeAppropriateFilter"
    }

    fn apply<'a>(
        &self,
        movies: Vec<&'a MovieRecord>,
        questionnaire: &Questionnaire,
    ) -> Result<Vec<&'a MovieRecord>> {
        if !questionnaire.family_friendly {
            return Ok(movies);
        }
        let filtered: Vec<&MovieRecord> = movies
            .into_iter()
            .filter(|movie| !has_adult_signal(movie))
            .collect();
        Ok(filtered)
    }
}

/// Whether any adult-content heuristic fires for `movie`
pub fn has_adult_signal(movie: &MovieRecord) -> bool {
    let genre = movie.genre.to_lowercase();
    let overview = movie.overview.to_lowercase();
    let title = movie.title.to_lowercase();

    let genre_hit = genre.replace(',', " ").split_whitespace().any(is_adult_term);
    let overview_hit = words(&overview).any(is_adult_term);
    let title_hit = words(&title).any(is_adult_term);
    let phrase_hit = ADULT_OVERVIEW_PHRASES
        .iter()
        .any(|phrase| overview.contains(phrase));

    genre_hit || overview_hit || title_hit || phrase_hit
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .map(|word| word.trim_matches(WORD_PUNCTUATION))
}

fn is_adult_term(token: &str) -> bool {
    ADULT_TERMS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: i64, title: &str, genre: &str, overview: &str) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            genre: genre.to_string(),
            original_language: "en".to_string(),
            overview: overview.to_string(),
            popularity: 0.0,
            release_date: "2000-01-01".to_string(),
            vote_average: 0.0,
            vote_count: 0,
            poster_url: String::new(),
            poster_backdrop_url: String::new(),
        }
    }

    fn family_friendly() -> Questionnaire {
        Questionnaire {
            family_friendly: true,
            ..Questionnaire::default()
        }
    }

    #[test]
    fn test_genre_token_r() {
        assert!(has_adult_signal(&movie(1, "Heat", "Crime,R", "")));
        assert!(has_adult_signal(&movie(1, "Heat", "Crime r", "")));
        // Substrings of longer words are not tokens
        assert!(!has_adult_signal(&movie(1, "Heat", "Horror, Romance", "")));
    }

    #[test]
    fn test_overview_and_title_words() {
        assert!(has_adult_signal(&movie(1, "Heat", "Crime", "An (adult) tale.")));
        assert!(has_adult_signal(&movie(1, "Adult World", "Comedy", "")));
        assert!(has_adult_signal(&movie(1, "Heat", "Crime", "Rated \"R\" for violence")));
        assert!(!has_adult_signal(&movie(1, "Adulthood", "Drama", "Adults only later")));
    }

    #[test]
    fn test_overview_phrases_anywhere() {
        assert!(has_adult_signal(&movie(1, "Heat", "Crime", "an unrated/NC-17 cut")));
        assert!(has_adult_signal(&movie(1, "Heat", "Crime", "the non-r-rated version")));
    }

    #[test]
    fn test_age_appropriate_filter() {
        let movies = vec![
            movie(1, "Toy Story", "Animation, Family", "Toys come alive."),
            movie(2, "Heat", "Crime, R", "A heist."),
            movie(3, "Up", "Animation", "An adult and a kid fly a house."),
        ];

        let filtered = AgeAppropriateFilter
            .apply(movies.iter().collect(), &family_friendly())
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn test_passes_through_without_preference() {
        let movies = vec![movie(1, "Heat", "Crime, R", "")];

        let filtered = AgeAppropriateFilter
            .apply(movies.iter().collect(), &Questionnaire::default())
            .unwrap();

        assert_eq!(filtered.len(), 1);
    }
}
