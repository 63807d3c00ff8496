//! Genre filtering and free-text search over the catalog.
//!
//! Both queries are plain scans: the catalog is small and read-only, so
//! there is no index to maintain.

use data_loader::MovieRecord;
use rayon::prelude::*;

/// Most results a free-text search returns
pub const SEARCH_LIMIT: usize = 20;

/// Movies whose genre text contains `genre`, case-insensitively.
///
/// `None` or an empty string returns the whole catalog. Catalog order is
/// preserved either way.
pub fn filter_by_genre<'a>(movies: &'a [MovieRecord], genre: Option<&str>) -> Vec<&'a MovieRecord> {
    match genre {
        Some(genre) if !genre.is_empty() => {
            let needle = genre.to_lowercase();
            movies
                .iter()
                .filter(|movie| movie.genre.to_lowercase().contains(&needle))
                .collect()
        }
        _ => movies.iter().collect(),
    }
}

/// Free-text search, most-voted first, at most `SEARCH_LIMIT` results.
///
/// A blank query returns the most-voted movies in the catalog. Otherwise a
/// movie matches when the trimmed, lower-cased query is a substring of its
/// genre, title or overview, or is exactly its title abbreviation
/// ("tdk" for "The Dark Knight").
pub fn search<'a>(movies: &'a [MovieRecord], query: &str) -> Vec<&'a MovieRecord> {
    let query = query.trim().to_lowercase();

    // Order-preserving collect, so the stable sort below keeps catalog
    // order among equal vote counts.
    let mut results: Vec<&MovieRecord> = if query.is_empty() {
        movies.iter().collect()
    } else {
        movies
            .par_iter()
            .filter(|movie| matches_query(movie, &query))
            .collect()
    };

    tracing::debug!("Search {:?} matched {} movies", query, results.len());

    results.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));
    results.truncate(SEARCH_LIMIT);
    results
}

/// Whether `movie` matches an already-normalized query
pub fn matches_query(movie: &MovieRecord, query: &str) -> bool {
    movie.genre.to_lowercase().contains(query)
        || movie.title.to_lowercase().contains(query)
        || movie.overview.to_lowercase().contains(query)
        || movie.title_abbreviation() == query
}
