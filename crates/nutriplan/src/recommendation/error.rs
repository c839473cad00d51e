/// Failures surfaced by the recommendation operations.
///
/// Every variant is detected at the boundary (input parsing, catalog lookup)
/// and returned to the caller unchanged; nothing here is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecommendationError {
    #[error("invalid profile field '{field}': {reason}")]
    InvalidProfile { field: &'static str, reason: String },
    #[error("no food in the catalog matches '{query}'")]
    FoodNotFound { query: String },
    #[error("food catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl RecommendationError {
    pub(crate) fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }
}
