//! HTTP request handlers for API endpoints.

pub mod health;
pub mod recipe;

pub use health::health_handler;
pub use recipe::recipe_handler;
