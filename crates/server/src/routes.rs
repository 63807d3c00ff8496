use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use data_loader::MovieId;
use pipeline::{Questionnaire, Recommender};
use serde::Deserialize;

use crate::{AppState, error, error::AppResult, lenient, templates};

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn recommendation() -> Html<String> {
    Html(templates::recommendation_page())
}

/// `/movies?genre=...`: a repeated `genre` uses the first value.
pub async fn movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let genre = params
        .iter()
        .find(|(key, _)| key == "genre")
        .map(|(_, value)| value.as_str());
    let movies = pipeline::filter_by_genre(state.store.movies(), genre);
    tracing::debug!(?genre, count = movies.len(), "listing movies");
    Json(movies).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    query: String,
}

pub async fn recommend(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let req: SearchRequest = lenient::parse_body(&body);
    let movies = pipeline::search(state.store.movies(), &req.query);
    Json(movies).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionnaireRequest {
    #[serde(default, deserialize_with = "lenient::string")]
    mood: String,
    #[serde(default, deserialize_with = "lenient::string")]
    occasion: String,
    #[serde(default, deserialize_with = "lenient::string_list")]
    genres: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    age_appropriateness: String,
    #[serde(default, deserialize_with = "lenient::string")]
    timeline: String,
}

pub async fn recommend_movies(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> AppResult<Response> {
    let req: QuestionnaireRequest = lenient::parse_body(&body);
    let questionnaire = Questionnaire::from_answers(
        &req.mood,
        &req.occasion,
        &req.genres,
        &req.age_appropriateness,
        &req.timeline,
    );

    let today: jiff::civil::Date = jiff::Zoned::now().into();
    let current_year = i32::from(today.year());

    let picks = Recommender::new(current_year).recommend(state.store.movies(), &questionnaire)?;
    tracing::debug!(?questionnaire, count = picks.len(), "questionnaire answered");
    Ok(Json(picks).into_response())
}

/// `/movie/{id}`: ids that are not plain non-negative integers fall through
/// to the regular 404; well-formed ids with no movie render the detail page
/// in its "not found" state.
pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return error::not_found(&headers);
    }

    let movie = id
        .parse::<MovieId>()
        .ok()
        .and_then(|id| state.store.get_movie(id));

    match movie {
        Some(movie) => Html(templates::movie_detail_page(Some(movie))).into_response(),
        None => (StatusCode::NOT_FOUND, Html(templates::movie_detail_page(None))).into_response(),
    }
}

pub async fn not_found(headers: HeaderMap) -> Response {
    error::not_found(&headers)
}
