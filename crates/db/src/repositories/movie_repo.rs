//! Repository for the `movies` table.

use reelhouse_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, director, category, rating, year_released, image_url, \
                       rental_price, available_amount, created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (title, director, category, rating, year_released, image_url,
                 rental_price, available_amount)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.category)
            .bind(input.rating)
            .bind(input.year_released)
            .bind(&input.image_url)
            .bind(input.rental_price)
            .bind(input.available_amount)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every movie whose id is in `ids`, in id order.
    ///
    /// Ids with no matching row are silently skipped; callers compare lengths
    /// when they need all-or-nothing semantics.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Movie>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all movies in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                director = COALESCE($3, director),
                category = COALESCE($4, category),
                rating = COALESCE($5, rating),
                year_released = COALESCE($6, year_released),
                image_url = COALESCE($7, image_url),
                rental_price = COALESCE($8, rental_price),
                available_amount = COALESCE($9, available_amount)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.director)
            .bind(&input.category)
            .bind(input.rating)
            .bind(input.year_released)
            .bind(&input.image_url)
            .bind(input.rental_price)
            .bind(input.available_amount)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
