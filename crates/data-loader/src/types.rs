//! Core domain types for the movie catalog.
//!
//! A `MovieRecord` is one row of the dataset, denormalized and immutable
//! after load. `MovieStore` is the ordered, read-only collection every
//! query runs against.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie (the source row id)
pub type MovieId = i64;

// =============================================================================
// Movie Record
// =============================================================================

/// One movie as served by the catalog.
///
/// Field names match the JSON objects returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,
    pub title: String,
    /// Free-text genre list as it appears in the dataset ("Action, Drama").
    /// Not a structured set: every query matches it by substring.
    pub genre: String,
    pub original_language: String,
    pub overview: String,
    pub popularity: f64,
    /// Expected to start with `YYYY-MM-DD`, may be empty
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: i64,
    pub poster_url: String,
    pub poster_backdrop_url: String,
}

impl MovieRecord {
    /// Year taken from the first four characters of `release_date`.
    ///
    /// Example: "1999-03-31" -> Some(1999)
    ///          ""           -> None
    ///          "unknown"    -> None
    pub fn release_year(&self) -> Option<i32> {
        let prefix: String = self.release_date.chars().take(4).collect();
        prefix.trim().parse().ok()
    }

    /// First character of every whitespace-separated word of the title,
    /// lower-cased.
    ///
    /// Example: "The Dark Knight" -> "tdk"
    pub fn title_abbreviation(&self) -> String {
        self.title
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
            .to_lowercase()
    }
}

// =============================================================================
// MovieStore - the in-memory catalog
// =============================================================================

/// Ordered, read-only collection of every movie in the dataset.
///
/// Built once at startup and shared behind an `Arc`; there are no
/// mutators after construction.
#[derive(Debug, Default)]
pub struct MovieStore {
    pub(crate) movies: Vec<MovieRecord>,
}

impl MovieStore {
    /// Wrap an already-parsed list of records, keeping their order
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self { movies }
    }

    /// All movies in dataset order
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Get a movie by ID.
    ///
    /// Ids are not checked for uniqueness, so the first record carrying
    /// `id` wins.
    pub fn get_movie(&self, id: MovieId) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
