//! Recipe entity returned by the retrieval pipeline.

use chrono::{DateTime, Utc};

/// A recipe as seen by callers of the retrieval pipeline.
///
/// The pipeline only moves recipes between the cache and the caller; it never
/// looks at anything other than [`Recipe::id`].
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub featured_image: String,
    pub rating: i32,
    pub source_url: String,
    pub ingredients: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl Recipe {
    /// Creates a recipe with only an id and title set.
    ///
    /// Remaining fields are empty, dates are the Unix epoch.
    pub fn new(id: i32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            publisher: String::new(),
            featured_image: String::new(),
            rating: 0,
            source_url: String::new(),
            ingredients: Vec::new(),
            date_added: DateTime::<Utc>::UNIX_EPOCH,
            date_updated: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}
