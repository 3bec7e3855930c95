//! Conversion between storage/wire models and domain entities.

/// Pure, infallible two-way conversion between a model `T` and a domain type `D`.
///
/// Implementations must not perform I/O or depend on the clock, so that the
/// same input always maps to the same output.
pub trait DomainMapper<T, D>: Send + Sync {
    fn map_to_domain(&self, model: T) -> D;

    fn map_from_domain(&self, domain: D) -> T;
}
