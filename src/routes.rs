use std::{num::IntErrorKind, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};

use crate::{
    AppState, catalog,
    error::{AppError, AppResult, MOVIE_NOT_FOUND, ValidationError},
    models::{ListQuery, MovieListResponse, MovieRecord},
    pagination::PageParams,
};

/// Movie routes, mounted under `{api_prefix}/theater`.
pub fn router(state: Arc<AppState>) -> Router {
    let prefix = state.config.api_prefix.clone();
    let movies = Router::new()
        .route("/movies", get(list_movies))
        .route("/movies/", get(list_movies))
        .route("/movies/{movie_id}", get(get_movie))
        .route("/movies/{movie_id}/", get(get_movie));

    Router::new().nest(&format!("{prefix}/theater"), movies).with_state(state)
}

pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<Json<MovieListResponse>> {
    let Query(query) = query.map_err(|rejection| {
        ValidationError::new("query", "query", "query_parsing", rejection.body_text())
    })?;
    let params = PageParams::from_query(&query)?;

    let page = catalog::list_page(state.store.as_ref(), params).await?;
    Ok(Json(page))
}

pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    Path(movie_id): Path<String>,
) -> AppResult<Json<MovieRecord>> {
    let id = match movie_id.trim().parse::<i64>() {
        Ok(id) => id,
        // still an integer, just one no row can have
        Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(AppError::NotFound(MOVIE_NOT_FOUND));
        }
        Err(_) => {
            return Err(ValidationError::new(
                "path",
                "movie_id",
                "int_parsing",
                "Input should be a valid integer, unable to parse string as an integer",
            )
            .into());
        }
    };

    let movie = catalog::get_by_id(state.store.as_ref(), id).await?;
    Ok(Json(movie))
}
