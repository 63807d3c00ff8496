//! # Data Loader Crate
//!
//! This crate loads the movie dataset CSV into an in-memory, read-only
//! catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieStore)
//! - **parser**: Parse the CSV file into records, deriving poster URLs
//! - **store**: Build the MovieStore from a file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieStore;
//! use std::path::Path;
//!
//! let store = MovieStore::load_from_file(Path::new("final_dataset.csv"))?;
//!
//! let movie = store.get_movie(155).unwrap();
//! println!("{} ({})", movie.title, movie.release_date);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod store;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{MovieId, MovieRecord, MovieStore};
