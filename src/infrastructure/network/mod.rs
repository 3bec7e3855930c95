//! Remote recipe source used on a cache miss.
//!
//! - [`RecipeSource`] - authenticated fetch-by-id trait
//! - [`HttpRecipeSource`] - reqwest implementation against the recipe API
//! - [`RecipeDtoMapper`] - wire to domain conversion

mod http_recipe_source;
mod model;
mod source;

pub use http_recipe_source::HttpRecipeSource;
pub use model::{RecipeDto, RecipeDtoMapper};
pub use source::{RecipeSource, SourceError, SourceResult};

#[cfg(test)]
pub use source::MockRecipeSource;
