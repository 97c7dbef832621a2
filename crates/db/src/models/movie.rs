//! Movie entity model and DTOs.
//!
//! Field rules are enforced with `validator` on the request DTOs before any
//! query runs:
//!
//! | Field              | Rule                    |
//! |--------------------|-------------------------|
//! | `title`            | 1-100 chars             |
//! | `director`         | 1-100 chars             |
//! | `category`         | 1-100 chars             |
//! | `rating`           | 1-5                     |
//! | `year_released`    | 1900 <= year < 2005     |
//! | `image_url`        | 1-200 chars             |
//! | `rental_price`     | >= 0 when present       |
//! | `available_amount` | >= 0 when present       |

use reelhouse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub category: String,
    pub rating: i32,
    pub year_released: i32,
    pub image_url: String,
    pub rental_price: Option<f64>,
    pub available_amount: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub director: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[validate(range(min = 1900, max = 2004))]
    pub year_released: i32,
    #[validate(length(min = 1, max = 200))]
    pub image_url: String,
    #[validate(range(min = 0.0))]
    pub rental_price: Option<f64>,
    #[validate(range(min = 0))]
    pub available_amount: Option<i32>,
}

/// DTO for updating an existing movie. All fields are optional; supplied
/// fields obey the same rules as [`CreateMovie`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub director: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i32>,
    #[validate(range(min = 1900, max = 2004))]
    pub year_released: Option<i32>,
    #[validate(length(min = 1, max = 200))]
    pub image_url: Option<String>,
    #[validate(range(min = 0.0))]
    pub rental_price: Option<f64>,
    #[validate(range(min = 0))]
    pub available_amount: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_movie() -> CreateMovie {
        CreateMovie {
            title: "Heat".to_string(),
            director: "Michael Mann".to_string(),
            category: "Crime".to_string(),
            rating: 5,
            year_released: 1995,
            image_url: "https://img.example/heat.jpg".to_string(),
            rental_price: Some(3.5),
            available_amount: Some(4),
        }
    }

    #[test]
    fn accepts_valid_movie() {
        assert!(valid_movie().validate().is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let movie = CreateMovie {
            title: String::new(),
            ..valid_movie()
        };
        let errors = movie.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn rejects_overlong_image_url() {
        let movie = CreateMovie {
            image_url: "x".repeat(201),
            ..valid_movie()
        };
        assert!(movie.validate().is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for rating in [1, 5] {
            assert!(CreateMovie { rating, ..valid_movie() }.validate().is_ok());
        }
        for rating in [0, 6] {
            assert!(CreateMovie { rating, ..valid_movie() }.validate().is_err());
        }
    }

    #[test]
    fn year_released_upper_bound_is_exclusive() {
        let ok = CreateMovie {
            year_released: 2004,
            ..valid_movie()
        };
        assert!(ok.validate().is_ok());

        let too_new = CreateMovie {
            year_released: 2005,
            ..valid_movie()
        };
        assert!(too_new.validate().is_err());

        let too_old = CreateMovie {
            year_released: 1899,
            ..valid_movie()
        };
        assert!(too_old.validate().is_err());
    }

    #[test]
    fn rejects_negative_stock_and_price() {
        let movie = CreateMovie {
            rental_price: Some(-0.5),
            available_amount: Some(-1),
            ..valid_movie()
        };
        let errors = movie.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("rental_price"));
        assert!(fields.contains_key("available_amount"));
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateMovie::default().validate().is_ok());
    }

    #[test]
    fn update_checks_supplied_fields_only() {
        let update = UpdateMovie {
            rating: Some(9),
            ..UpdateMovie::default()
        };
        let errors = update.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
        assert!(errors.field_errors().contains_key("rating"));
    }
}
