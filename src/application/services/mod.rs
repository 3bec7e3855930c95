//! Business logic services for the application layer.

pub mod retrieval_service;

pub use retrieval_service::{RecipeState, RetrievalService};
