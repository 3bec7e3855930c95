//! Infrastructure layer for external integrations.
//!
//! Concrete collaborators consumed by the retrieval pipeline.
//!
//! # Modules
//!
//! - [`cache`] - Local recipe store (PostgreSQL, Redis, in-memory)
//! - [`network`] - Remote recipe API client

pub mod cache;
pub mod network;
