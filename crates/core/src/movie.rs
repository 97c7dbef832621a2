//! Query parsing for the `/movies` resource.

use crate::error::CoreError;
use crate::types::DbId;

/// Repeatable query parameter selecting a subset of movies:
/// `?movie_ids=1&movie_ids=2`.
pub const MOVIE_IDS_PARAM: &str = "movie_ids";

/// Collect every `movie_ids` value from decoded query pairs.
///
/// Other keys are ignored. Duplicate ids are dropped, keeping the position of
/// the first occurrence. Returns an empty vec when the parameter is absent.
pub fn parse_movie_ids(pairs: &[(String, String)]) -> Result<Vec<DbId>, CoreError> {
    let mut ids: Vec<DbId> = Vec::new();
    for (key, value) in pairs {
        if key != MOVIE_IDS_PARAM {
            continue;
        }
        let id: DbId = value.trim().parse().map_err(|_| {
            CoreError::Validation(format!("{MOVIE_IDS_PARAM} must be integers, got '{value}'"))
        })?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
