use crate::application::dto::ChillResponse;
use crate::shared::Result;

/// Rendering switches shared by every formatter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Omit version numbers
    pub no_version: bool,
    /// Also list the dependency distributions
    pub verbose: bool,
}

/// ChillFormatter port for formatting the classification result
pub trait ChillFormatter {
    /// Formats top-level (and, when verbose, dependency) distributions
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &ChillResponse, options: RenderOptions) -> Result<String>;
}
