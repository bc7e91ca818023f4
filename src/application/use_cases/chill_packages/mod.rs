use crate::application::dto::{ChillRequest, ChillResponse};
use crate::chill::services::{Classifier, Discovery};
use crate::ports::outbound::{LegacyInstallReader, PackageRegistry, ProgressReporter};
use crate::shared::Result;
use tracing::debug;

/// ChillUseCase - lists the distributions that were installed on purpose
///
/// Wires discovery and classification together using generic dependency
/// injection for every infrastructure dependency.
///
/// # Type Parameters
/// * `R` - PackageRegistry implementation
/// * `L` - LegacyInstallReader implementation
/// * `P` - ProgressReporter implementation
pub struct ChillUseCase<R, L, P> {
    discovery: Discovery<R, L>,
    progress_reporter: P,
}

impl<R, L, P> ChillUseCase<R, L, P>
where
    R: PackageRegistry,
    L: LegacyInstallReader,
    P: ProgressReporter,
{
    /// Creates a new ChillUseCase with injected dependencies
    pub fn new(registry: R, legacy_reader: L, progress_reporter: P) -> Self {
        Self {
            discovery: Discovery::new(registry, legacy_reader),
            progress_reporter,
        }
    }

    /// Classifies every installed distribution
    ///
    /// Problems with individual distributions or requirements are reported
    /// as warnings and never abort the run.
    ///
    /// # Returns
    /// ChillResponse with the top-level and dependency distributions, sorted
    pub fn execute(&self, request: ChillRequest) -> Result<ChillResponse> {
        let options = request.options();
        debug!(
            show_all = options.show_all,
            omit_self = options.omit_self,
            extra_ignored = options.extra_ignored.len(),
            "Classifying installed distributions"
        );

        let classification = Classifier::chill(self.discovery.enumerate_all(), &options);

        let warnings = self
            .discovery
            .take_warnings()
            .into_iter()
            .chain(classification.warnings);
        for warning in warnings {
            self.progress_reporter.report_warning(&warning);
        }

        self.progress_reporter.report(&format!(
            "📦 {} top-level and {} dependency distribution(s)",
            classification.distributions.len(),
            classification.dependencies.len()
        ));

        Ok(ChillResponse::new(
            classification.distributions,
            classification.dependencies,
        ))
    }
}
