//! Integration tests for the query engine.
//!
//! These tests run the genre filter, free-text search and questionnaire
//! scorer against one small, realistic catalog.

use data_loader::{MovieRecord, MovieStore};
use pipeline::filters::AgeAppropriateFilter;
use pipeline::{
    FilterPipeline, Questionnaire, RECOMMENDATION_LIMIT, SEARCH_LIMIT, filter_by_genre, recommend,
    score_movie, search,
};

const CURRENT_YEAR: i32 = 2025;

fn movie(
    id: i64,
    title: &str,
    genre: &str,
    overview: &str,
    release_date: &str,
    vote_count: i64,
    vote_average: f64,
) -> MovieRecord {
    MovieRecord {
        id,
        title: title.to_string(),
        genre: genre.to_string(),
        original_language: "en".to_string(),
        overview: overview.to_string(),
        popularity: 10.0,
        release_date: release_date.to_string(),
        vote_average,
        vote_count,
        poster_url: format!("https://image.tmdb.org/t/p/w500/{id}.jpg"),
        poster_backdrop_url: format!("https://image.tmdb.org/t/p/original/{id}.jpg"),
    }
}

fn create_test_store() -> MovieStore {
    MovieStore::new(vec![
        movie(
            155,
            "The Dark Knight",
            "Drama, Action, Crime, Thriller",
            "Batman faces the Joker.",
            "2008-07-16",
            30000,
            8.5,
        ),
        movie(
            862,
            "Toy Story",
            "Animation, Adventure, Family, Comedy",
            "Toys come to life.",
            "1995-10-30",
            17000,
            8.0,
        ),
        movie(
            949,
            "Heat",
            "Action, Crime, Drama, R",
            "A crew of thieves.",
            "1995-12-15",
            6000,
            7.9,
        ),
        movie(
            13,
            "Forrest Gump",
            "Comedy, Drama, Romance",
            "Life is like a box of chocolates.",
            "1994-06-23",
            25000,
            8.5,
        ),
        movie(
            569094,
            "Spider-Man: Across the Spider-Verse",
            "Animation, Action, Adventure",
            "Miles returns.",
            "2023-05-31",
            7000,
            8.4,
        ),
        movie(11, "Untitled Project", "Comedy", "Release pending.", "", 50000, 9.9),
        movie(
            346698,
            "Barbie",
            "Comedy, Adventure",
            "An adult world awaits.",
            "2023-07-19",
            9000,
            7.0,
        ),
        movie(
            120,
            "Amelie",
            "Comedy, Romance",
            "A shy waitress in Paris.",
            "2001-04-25",
            11000,
            7.9,
        ),
    ])
}

fn ids(movies: &[&MovieRecord]) -> Vec<i64> {
    movies.iter().map(|m| m.id).collect()
}

#[test]
fn test_genre_filter_is_sound_and_complete() {
    let store = create_test_store();

    for query in ["comedy", "ACTION", "rom", "western", "a"] {
        let hits = filter_by_genre(store.movies(), Some(query));
        let needle = query.to_lowercase();

        for movie in &hits {
            assert!(movie.genre.to_lowercase().contains(&needle));
        }
        let omitted = store
            .movies()
            .iter()
            .filter(|m| !hits.iter().any(|h| h.id == m.id));
        for movie in omitted {
            assert!(!movie.genre.to_lowercase().contains(&needle));
        }
    }
}

#[test]
fn test_unfiltered_listing_is_the_whole_catalog_in_order() {
    let store = create_test_store();

    let listing = filter_by_genre(store.movies(), None);
    let expected: Vec<i64> = store.movies().iter().map(|m| m.id).collect();
    assert_eq!(ids(&listing), expected);
}

#[test]
fn test_empty_search_returns_most_voted() {
    let store = create_test_store();

    let results = search(store.movies(), "");

    assert_eq!(results.len(), store.len().min(SEARCH_LIMIT));
    assert_eq!(ids(&results), vec![11, 155, 13, 862, 120, 346698, 569094, 949]);
}

#[test]
fn test_search_matches_and_orders_by_votes() {
    let store = create_test_store();

    let results = search(store.movies(), "Crime");
    assert_eq!(ids(&results), vec![155, 949]);

    let results = search(store.movies(), "tdk");
    assert_eq!(ids(&results), vec![155]);

    for window in results.windows(2) {
        assert!(window[0].vote_count >= window[1].vote_count);
    }
}

#[test]
fn test_questionnaire_end_to_end() {
    let store = create_test_store();
    let genres = vec!["Comedy".to_string(), "Romance".to_string()];
    let questionnaire = Questionnaire::from_answers("happy", "special", &genres, "yes", "any");

    let picks = recommend(store.movies(), &questionnaire, CURRENT_YEAR).unwrap();

    // Forrest Gump and Amelie both score 4 (comedy, romance, happy, special);
    // Gump has more votes. Barbie is dropped for "adult", the untitled
    // project for its missing release date.
    assert_eq!(ids(&picks), vec![13, 120]);
}

#[test]
fn test_age_appropriate_never_returns_r_genre_token() {
    let store = create_test_store();
    let genres = vec!["crime".to_string(), "action".to_string()];
    let questionnaire = Questionnaire::from_answers("", "alone", &genres, "yes", "any");

    let picks = recommend(store.movies(), &questionnaire, CURRENT_YEAR).unwrap();

    assert!(!picks.is_empty());
    for movie in &picks {
        let tokens: Vec<String> = movie
            .genre
            .to_lowercase()
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();
        assert!(!tokens.iter().any(|t| t == "r"));
    }
}

#[test]
fn test_recent_timeline_excludes_older_movies() {
    let store = create_test_store();
    let genres = vec!["adventure".to_string()];
    let questionnaire = Questionnaire::from_answers("", "", &genres, "no", "5");

    let picks = recommend(store.movies(), &questionnaire, CURRENT_YEAR).unwrap();

    assert_eq!(ids(&picks), vec![346698, 569094]);
    for movie in &picks {
        assert!(movie.release_year().unwrap() >= CURRENT_YEAR - 5);
    }
}

#[test]
fn test_results_are_ranked_and_capped() {
    let store = create_test_store();
    let genres = vec!["comedy".to_string(), "drama".to_string(), "action".to_string()];
    let questionnaire = Questionnaire::from_answers("sad", "free", &genres, "", "");

    let picks = recommend(store.movies(), &questionnaire, CURRENT_YEAR).unwrap();

    assert!(picks.len() <= RECOMMENDATION_LIMIT);
    for window in picks.windows(2) {
        let (a, b) = (window[0], window[1]);
        let key = |m: &MovieRecord| (score_movie(m, &questionnaire), m.vote_count);
        assert!(key(a) >= key(b));
    }
}

#[test]
fn test_pipeline_can_be_reused_across_questionnaires() {
    let store = create_test_store();
    let pipeline = FilterPipeline::new().add_filter(AgeAppropriateFilter);

    let strict = Questionnaire::from_answers("", "", &[], "yes", "");
    let relaxed = Questionnaire::from_answers("", "", &[], "no", "");

    let strict_count = pipeline.apply(store.movies().iter().collect(), &strict).unwrap().len();
    let relaxed_count = pipeline.apply(store.movies().iter().collect(), &relaxed).unwrap().len();

    assert_eq!(relaxed_count, store.len());
    assert_eq!(strict_count, store.len() - 2);
}
