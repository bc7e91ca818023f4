use crate::chill::domain::Distribution;

/// ChillResponse - Internal response DTO from the chill use case
///
/// Both sequences are sorted by display name.
#[derive(Debug, Clone, Default)]
pub struct ChillResponse {
    /// Distributions nothing else installed depends on
    pub distributions: Vec<Distribution>,
    /// Distributions pulled in by at least one other package
    pub dependencies: Vec<Distribution>,
}

impl ChillResponse {
    pub fn new(distributions: Vec<Distribution>, dependencies: Vec<Distribution>) -> Self {
        Self {
            distributions,
            dependencies,
        }
    }
}
