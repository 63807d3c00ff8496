//! Query engine for the movie catalog.
//!
//! This crate provides:
//! - Genre filtering and free-text search (`search`)
//! - Questionnaire parsing (`questionnaire`)
//! - Filter trait and implementations for the questionnaire's hard constraints
//! - FilterPipeline for composing filters
//! - Scoring and ranking of questionnaire matches (`scoring`)
//!
//! Every query borrows the catalog and returns references into it; nothing
//! here mutates a `MovieRecord`.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{Questionnaire, Recommender, search};
//!
//! let hits = search(store.movies(), "tdk");
//!
//! let questionnaire = Questionnaire::from_answers("happy", "free", &genres, "yes", "10");
//! let picks = Recommender::new(2025).recommend(store.movies(), &questionnaire)?;
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod questionnaire;
pub mod scoring;
pub mod search;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use questionnaire::{Mood, Occasion, Questionnaire, Timeline};
pub use scoring::{RECOMMENDATION_LIMIT, Recommender, recommend, score_movie};
pub use search::{SEARCH_LIMIT, filter_by_genre, search};
pub use traits::Filter;
