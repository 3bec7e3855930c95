//! Cache-side representation of a recipe and its mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Recipe;
use crate::domain::mapper::DomainMapper;

/// Flattened recipe as stored in the cache.
///
/// Ingredients are joined with newlines and dates are stored as Unix seconds,
/// so every backend can hold a record as plain scalar columns or one JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RecipeRecord {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub featured_image: String,
    pub rating: i32,
    pub source_url: String,
    pub ingredients: String,
    pub date_added: i64,
    pub date_updated: i64,
}

const INGREDIENT_SEPARATOR: char = '\n';

/// Maps [`RecipeRecord`] to and from [`Recipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeRecordMapper;

impl RecipeRecordMapper {
    fn join_ingredients(ingredients: &[String]) -> String {
        ingredients.join(&INGREDIENT_SEPARATOR.to_string())
    }

    fn split_ingredients(ingredients: &str) -> Vec<String> {
        ingredients
            .split(INGREDIENT_SEPARATOR)
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    fn from_timestamp(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl DomainMapper<RecipeRecord, Recipe> for RecipeRecordMapper {
    fn map_to_domain(&self, model: RecipeRecord) -> Recipe {
        Recipe {
            id: model.id,
            title: model.title,
            publisher: model.publisher,
            featured_image: model.featured_image,
            rating: model.rating,
            source_url: model.source_url,
            ingredients: Self::split_ingredients(&model.ingredients),
            date_added: Self::from_timestamp(model.date_added),
            date_updated: Self::from_timestamp(model.date_updated),
        }
    }

    fn map_from_domain(&self, domain: Recipe) -> RecipeRecord {
        RecipeRecord {
            id: domain.id,
            title: domain.title,
            publisher: domain.publisher,
            featured_image: domain.featured_image,
            rating: domain.rating,
            source_url: domain.source_url,
            ingredients: Self::join_ingredients(&domain.ingredients),
            date_added: domain.date_added.timestamp(),
            date_updated: domain.date_updated.timestamp(),
        }
    }
}
