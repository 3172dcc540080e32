use thiserror::Error;

/// A common error representing that a requested entity was not found.
///
/// Used at repository boundaries for lookups by id (photos, settings),
/// without depending on any storage or HTTP details.
///
/// # Example
/// ```
/// use festa_web::error::entity::NotFoundError;
///
/// let err = NotFoundError::new("Photo");
/// assert_eq!(err.to_string(), "Photo not found");
/// ```
#[derive(Debug, Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Name of the entity that was not found (e.g. `"Photo"`).
    pub entity: &'static str,
}

impl NotFoundError {
    /// Create a new `NotFoundError` for the specified entity.
    pub fn new(entity: &'static str) -> Self {
        Self { entity }
    }
}
