//! Domain entities.

pub mod recipe;

pub use recipe::Recipe;
