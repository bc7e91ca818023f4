use crate::application::dto::ChillResponse;
use crate::chill::domain::Distribution;
use crate::ports::outbound::{ChillFormatter, RenderOptions};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Listing<'a> {
    distributions: Vec<Entry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<Vec<Entry<'a>>>,
}

#[derive(Debug, Serialize)]
struct Entry<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    required_by: Vec<&'a str>,
}

/// JsonFormatter adapter producing a machine-readable listing
///
/// `version` is omitted with `no_version`; `dependencies` is only present
/// with `verbose`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_entries(distributions: &[Distribution], options: RenderOptions) -> Vec<Entry<'_>> {
        distributions
            .iter()
            .map(|distribution| Entry {
                name: distribution.name(),
                version: (!options.no_version).then(|| distribution.version()),
                required_by: distribution
                    .required_by()
                    .iter()
                    .map(String::as_str)
                    .collect(),
            })
            .collect()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChillFormatter for JsonFormatter {
    fn format(&self, response: &ChillResponse, options: RenderOptions) -> Result<String> {
        let listing = Listing {
            distributions: Self::build_entries(&response.distributions, options),
            dependencies: options
                .verbose
                .then(|| Self::build_entries(&response.dependencies, options)),
        };

        let mut output = serde_json::to_string_pretty(&listing)?;
        output.push('\n');
        Ok(output)
    }
}
