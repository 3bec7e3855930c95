//! Application layer services implementing business logic.
//!
//! Services consume the cache and source traits from the infrastructure layer
//! and provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::retrieval_service::RetrievalService`] - Cache-first recipe retrieval

pub mod services;
