//! Building the MovieStore from the dataset file.
//!
//! The store is loaded exactly once, at process start. Any malformed row
//! aborts the load; there is no row-level recovery.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use std::time::Instant;
use tracing::info;

impl MovieStore {
    /// Load the whole catalog from a CSV file.
    ///
    /// This is the main entry point for loading data. Records keep the
    /// order they have in the file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading movie dataset from {:?}", path);
        let start = Instant::now();

        let movies = parser::parse_movies(path)?;

        info!(
            "Loaded {} movies in {:.2?}",
            movies.len(),
            start.elapsed()
        );
        Ok(Self::new(movies))
    }
}
