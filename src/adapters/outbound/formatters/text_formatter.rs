use crate::application::dto::ChillResponse;
use crate::chill::domain::Distribution;
use crate::ports::outbound::{ChillFormatter, RenderOptions};
use crate::shared::Result;

/// TextFormatter adapter producing a requirements.txt style listing
///
/// Top-level distributions come first; with `verbose` the dependency
/// distributions follow as commented-out lines.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render(distribution: &Distribution, options: RenderOptions) -> String {
        if options.no_version {
            distribution.render_without_version()
        } else {
            distribution.render()
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChillFormatter for TextFormatter {
    fn format(&self, response: &ChillResponse, options: RenderOptions) -> Result<String> {
        let mut output = String::new();

        let dependencies: &[Distribution] = if options.verbose {
            &response.dependencies
        } else {
            &[]
        };

        for distribution in response.distributions.iter().chain(dependencies) {
            output.push_str(&Self::render(distribution, options));
            output.push('\n');
        }

        Ok(output)
    }
}
