use super::package_name::canonicalize_name;
use super::requirement::RequirementExpression;

/// DistributionRecord value object - one installed package as reported by metadata
///
/// Immutable input to the classifier; produced by the package registry, the
/// legacy link reader, or test doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRecord {
    name: String,
    version: Option<String>,
    requirements: Vec<RequirementExpression>,
}

impl DistributionRecord {
    pub fn new(
        name: impl Into<String>,
        version: Option<String>,
        requirements: Vec<RequirementExpression>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            requirements,
        }
    }

    /// Builds a record from raw `Requires-Dist` style strings
    pub fn from_raw(name: &str, version: Option<&str>, requirements: &[&str]) -> Self {
        Self::new(
            name,
            version.map(str::to_string),
            requirements
                .iter()
                .map(|r| RequirementExpression::raw(*r))
                .collect(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> String {
        canonicalize_name(&self.name)
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn requirements(&self) -> &[RequirementExpression] {
        &self.requirements
    }
}
