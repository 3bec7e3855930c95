//! Domain layer containing the recipe entity and the retrieval result model.
//!
//! This module is independent of storage and network concerns. Infrastructure
//! provides the cache and remote implementations, and the pipeline that ties
//! them together lives in [`crate::application::services`].
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`mapper`] - Pure conversion trait between models and entities
//! - [`retrieval_state`] - Loading / success / error stream items

pub mod entities;
pub mod mapper;
pub mod retrieval_state;
