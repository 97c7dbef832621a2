//! Handlers for the `/movies` resource.
//!
//! Reads are public. Writes require the `administrator` role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use reelhouse_core::error::CoreError;
use reelhouse_core::movie::parse_movie_ids;
use reelhouse_core::types::DbId;
use reelhouse_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use reelhouse_db::repositories::MovieRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Movie",
        id,
    })
}

/// GET /movies
///
/// Without parameters, lists the whole catalog. With
/// `?movie_ids=1&movie_ids=2`, returns exactly those movies in the requested
/// order, or 404 if any of them does not exist.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<Movie>>> {
    let ids = parse_movie_ids(&params)?;
    if ids.is_empty() {
        return Ok(Json(MovieRepo::list(&state.pool).await?));
    }

    let found = MovieRepo::find_by_ids(&state.pool, &ids).await?;
    let mut ordered = Vec::with_capacity(ids.len());
    for id in ids {
        let movie = found
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))?;
        ordered.push(movie);
    }
    Ok(Json(ordered))
}

/// POST /movies
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    input.validate()?;
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, user_id = admin.user_id, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Applies only the supplied fields. Returns 204 No Content.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<StatusCode> {
    input.validate()?;
    MovieRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(movie_id = id, user_id = admin.user_id, "Movie updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if MovieRepo::delete(&state.pool, id).await? {
        tracing::info!(movie_id = id, user_id = admin.user_id, "Movie deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
