use crate::chill::domain::DistributionRecord;
use crate::shared::Result;

/// Outcome of reading a single installed distribution
///
/// A failure here only concerns that one distribution; the rest of the
/// environment is still classified.
pub type RecordResult = Result<DistributionRecord>;

/// PackageRegistry port for enumerating installed distributions
///
/// This port abstracts the package metadata provider (a site-packages
/// directory, an interpreter, or a test double).
pub trait PackageRegistry {
    /// Enumerates every distribution the registry can see
    ///
    /// # Returns
    /// One entry per installed distribution; entries whose metadata could not
    /// be read are returned as errors so the caller can skip them
    ///
    /// # Errors
    /// Returns an error if the registry as a whole cannot be enumerated
    fn distributions(&self) -> Result<Vec<RecordResult>>;

    /// Resolves one distribution by name
    ///
    /// # Arguments
    /// * `name` - Distribution name, compared after normalization
    ///
    /// # Returns
    /// `None` when no such distribution is installed
    fn distribution(&self, name: &str) -> Result<Option<DistributionRecord>>;
}
