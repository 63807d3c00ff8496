//! Benchmarks for the catalog queries
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses the real dataset when `MOVIES_CSV` points at it, otherwise a
//! synthetic catalog of 10k movies.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{MovieRecord, MovieStore};
use pipeline::{Questionnaire, Recommender, search};
use std::path::Path;

const GENRES: [&str; 6] = [
    "Action, Adventure",
    "Comedy, Family",
    "Drama, Romance",
    "Horror, Thriller",
    "Animation, Fantasy",
    "Crime, Mystery",
];

fn load_test_data() -> MovieStore {
    if let Ok(path) = std::env::var("MOVIES_CSV") {
        return MovieStore::load_from_file(Path::new(&path)).expect("Failed to load test data");
    }

    let movies = (0..10_000)
        .map(|i| MovieRecord {
            id: i,
            title: format!("Synthetic Movie Number {i}"),
            genre: GENRES[i as usize % GENRES.len()].to_string(),
            original_language: "en".to_string(),
            overview: "A generated overview long enough to make substring scans do some work."
                .to_string(),
            popularity: (i % 100) as f64,
            release_date: format!("{}-01-01", 1950 + i % 75),
            vote_average: (i % 10) as f64,
            vote_count: i * 7 % 5000,
            poster_url: String::new(),
            poster_backdrop_url: String::new(),
        })
        .collect();
    MovieStore::new(movies)
}

fn bench_search(c: &mut Criterion) {
    let store = load_test_data();

    c.bench_function("search_substring", |b| {
        b.iter(|| {
            let results = search(store.movies(), black_box("romance"));
            black_box(results.len())
        })
    });

    c.bench_function("search_blank", |b| {
        b.iter(|| {
            let results = search(store.movies(), black_box(""));
            black_box(results.len())
        })
    });
}

fn bench_recommend(c: &mut Criterion) {
    let store = load_test_data();
    let recommender = Recommender::new(2025);
    let genres = vec!["comedy".to_string(), "drama".to_string()];
    let questionnaire = Questionnaire::from_answers("happy", "special", &genres, "yes", "25");

    c.bench_function("recommend_questionnaire", |b| {
        b.iter(|| {
            let picks = recommender
                .recommend(store.movies(), black_box(&questionnaire))
                .unwrap();
            black_box(picks.len())
        })
    });
}

criterion_group!(benches, bench_search, bench_recommend);
criterion_main!(benches);
