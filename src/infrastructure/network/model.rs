//! Wire representation of a recipe and its mapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Recipe;
use crate::domain::mapper::DomainMapper;

/// Recipe JSON as returned by the remote recipe API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDto {
    pub pk: i32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub featured_image: String,
    #[serde(default)]
    pub rating: i32,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub long_date_added: i64,
    #[serde(default)]
    pub long_date_updated: i64,
}

/// Maps [`RecipeDto`] to and from [`Recipe`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeDtoMapper;

fn from_timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

impl DomainMapper<RecipeDto, Recipe> for RecipeDtoMapper {
    fn map_to_domain(&self, model: RecipeDto) -> Recipe {
        Recipe {
            id: model.pk,
            title: model.title,
            publisher: model.publisher,
            featured_image: model.featured_image,
            rating: model.rating,
            source_url: model.source_url,
            ingredients: model.ingredients,
            date_added: from_timestamp(model.long_date_added),
            date_updated: from_timestamp(model.long_date_updated),
        }
    }

    fn map_from_domain(&self, domain: Recipe) -> RecipeDto {
        RecipeDto {
            pk: domain.id,
            title: domain.title,
            publisher: domain.publisher,
            featured_image: domain.featured_image,
            rating: domain.rating,
            source_url: domain.source_url,
            ingredients: domain.ingredients,
            long_date_added: domain.date_added.timestamp(),
            long_date_updated: domain.date_updated.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_payload() {
        let dto: RecipeDto = serde_json::from_value(json!({ "pk": 42, "title": "Soup" })).unwrap();

        let recipe = RecipeDtoMapper.map_to_domain(dto);
        assert_eq!(recipe, Recipe::new(42, "Soup"));
    }

    #[test]
    fn test_decode_full_payload() {
        let dto: RecipeDto = serde_json::from_value(json!({
            "pk": 583,
            "title": "Pizza Potato Skins",
            "publisher": "jessica",
            "featured_image": "https://img.example.com/583.jpg",
            "rating": 16,
            "source_url": "http://example.com/pizza",
            "ingredients": ["4 potatoes", "1 cup mozzarella"],
            "long_date_added": 1_606_348_709,
            "long_date_updated": 1_606_348_709,
            "description": "ignored"
        }))
        .unwrap();

        let recipe = RecipeDtoMapper.map_to_domain(dto);
        assert_eq!(recipe.id, 583);
        assert_eq!(recipe.publisher, "jessica");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.date_added.timestamp(), 1_606_348_709);
    }

    #[test]
    fn test_missing_pk_is_rejected() {
        let result = serde_json::from_value::<RecipeDto>(json!({ "title": "No id" }));
        assert!(result.is_err());
    }
}
