//! Parser for the movie dataset CSV.
//!
//! Expected header (column order does not matter, extra columns are ignored):
//! `id,title,genres,original_language,overview,popularity,release_date,vote_average,vote_count,poster_path`
//!
//! `genres` and `poster_path` may be missing entirely; every other column is
//! required. Overviews routinely contain commas, quotes and newlines, so the
//! file is read with a real CSV reader rather than split by line.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image CDN prefix for list-sized posters
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
/// Image CDN prefix for full-size backdrops
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/original";
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";
pub const BACKDROP_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/1280x720?text=No+Backdrop";

/// One CSV row before type coercion.
///
/// Everything stays a string here so that empty numeric cells can default
/// to zero instead of failing deserialization.
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    id: String,
    title: String,
    #[serde(default)]
    genres: String,
    original_language: String,
    overview: String,
    popularity: String,
    release_date: String,
    vote_average: String,
    vote_count: String,
    #[serde(default)]
    poster_path: String,
}

/// Parse the dataset file at `path`.
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })?;
    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    parse_movies_from_reader(file, &source)
}

/// Parse CSV text from any reader.
///
/// `source` only names the input in error messages.
pub fn parse_movies_from_reader<R: Read>(reader: R, source: &str) -> Result<Vec<MovieRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(source, e))?
        .clone();

    let mut movies = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| csv_error(source, e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let row: RawMovieRow = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(source, e))?;

        movies.push(build_record(row, line)?);
    }

    Ok(movies)
}

/// Coerce a raw row into a `MovieRecord`.
fn build_record(row: RawMovieRow, line: u64) -> Result<MovieRecord> {
    let id = row
        .id
        .trim()
        .parse()
        .map_err(|_| invalid("id", &row.id, line))?;

    let poster_url = derive_image_url(POSTER_BASE_URL, &row.poster_path, POSTER_PLACEHOLDER_URL);
    let poster_backdrop_url =
        derive_image_url(BACKDROP_BASE_URL, &row.poster_path, BACKDROP_PLACEHOLDER_URL);

    Ok(MovieRecord {
        id,
        popularity: parse_or_zero("popularity", &row.popularity, line)?,
        vote_average: parse_or_zero("vote_average", &row.vote_average, line)?,
        vote_count: parse_or_zero("vote_count", &row.vote_count, line)?,
        title: row.title,
        genre: row.genres,
        original_language: row.original_language,
        overview: row.overview,
        release_date: row.release_date,
        poster_url,
        poster_backdrop_url,
    })
}

/// Parse a numeric cell, treating an empty or blank cell as zero.
///
/// Example: ""      -> Ok(0.0)
///          "  "    -> Ok(0.0)
///          "7.25"  -> Ok(7.25)
///          "seven" -> Err(InvalidValue)
fn parse_or_zero<T>(field: &str, value: &str, line: u64) -> Result<T>
where
    T: std::str::FromStr + Default,
{
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(|_| invalid(field, value, line))
}

/// `{base}{path}` when the row has a poster path, otherwise the placeholder.
fn derive_image_url(base: &str, poster_path: &str, placeholder: &str) -> String {
    if poster_path.is_empty() {
        placeholder.to_string()
    } else {
        format!("{base}{poster_path}")
    }
}

fn invalid(field: &str, value: &str, line: u64) -> DataLoadError {
    DataLoadError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        line,
    }
}

fn csv_error(source: &str, err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DataLoadError::ParseError {
        file: source.to_string(),
        line,
        reason: err.to_string(),
    }
}
