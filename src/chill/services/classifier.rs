use crate::chill::domain::{Distribution, DistributionRecord, IgnoreSet, RequirementName};
use crate::shared::Result;
use std::collections::HashMap;
use tracing::debug;

/// Options for one classification pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChillOptions {
    /// Classify bootstrap tooling too instead of ignoring it
    pub show_all: bool,
    /// Ignore this tool's own distribution
    pub omit_self: bool,
    /// Additional distribution names to ignore (not applied with `show_all`)
    pub extra_ignored: Vec<String>,
}

/// Result of a classification pass
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Top-level distributions, sorted by name
    pub distributions: Vec<Distribution>,
    /// Dependency distributions, sorted by name
    pub dependencies: Vec<Distribution>,
    /// Non-fatal problems met along the way
    pub warnings: Vec<String>,
}

/// Classifier service partitioning installed distributions
///
/// Pure business logic: consumes the record stream once and never touches
/// the file system.
pub struct Classifier;

impl Classifier {
    /// Splits installed distributions into top-level and dependency sets
    ///
    /// # Arguments
    /// * `records` - Every discovered distribution; unreadable ones as errors
    /// * `options` - Ignore-set switches
    ///
    /// # Returns
    /// Both sets sorted by name, plus the warnings raised for skipped records
    /// and requirements
    pub fn chill<I>(records: I, options: &ChillOptions) -> Classification
    where
        I: IntoIterator<Item = Result<DistributionRecord>>,
    {
        let ignored = IgnoreSet::new(options.show_all, options.omit_self, &options.extra_ignored);
        debug!("Ignoring {} distribution key(s)", ignored.len());
        let mut state = ClassificationState::new(ignored);

        for record in records {
            match record {
                Ok(record) => state.observe(&record),
                Err(e) => state.warn(format!("Skipping unreadable distribution: {:#}", e)),
            }
        }

        state.finish()
    }
}

/// The two accumulator maps, keyed by normalized name
///
/// A key lives in at most one of them at a time.
struct ClassificationState {
    ignored: IgnoreSet,
    top_level: HashMap<String, Distribution>,
    dependencies: HashMap<String, Distribution>,
    warnings: Vec<String>,
}

impl ClassificationState {
    fn new(ignored: IgnoreSet) -> Self {
        Self {
            ignored,
            top_level: HashMap::new(),
            dependencies: HashMap::new(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, message: String) {
        debug!("{}", message);
        self.warnings.push(message);
    }

    fn observe(&mut self, record: &DistributionRecord) {
        let key = record.key();
        if key.is_empty() {
            self.warn(format!(
                "Skipping distribution with an empty name (version {})",
                record.version().unwrap_or("unknown")
            ));
            return;
        }

        if self.ignored.contains(&key) {
            debug!("Ignoring {}", key);
            return;
        }

        self.register(&key, record);

        for requirement in record.requirements() {
            if requirement.is_extra_only() {
                continue;
            }

            match requirement.resolve() {
                Ok(name) => self.add_edge(&key, &name),
                Err(e) => self.warn(format!(
                    "Dropping requirement '{}' declared by {}: {}",
                    requirement,
                    record.name(),
                    e
                )),
            }
        }
    }

    /// Records the package's own metadata under its key
    fn register(&mut self, key: &str, record: &DistributionRecord) {
        let version = record.version().map(str::to_string);

        if let Some(dependency) = self.dependencies.get_mut(key) {
            dependency.set_version(version);
            dependency.set_display_name(record.name());
        } else if let Some(existing) = self.top_level.get_mut(key) {
            existing.set_version(version);
        } else {
            self.top_level.insert(
                key.to_string(),
                Distribution::top_level(record.name(), record.version()),
            );
        }
    }

    /// Notes that `parent` requires `requirement`
    fn add_edge(&mut self, parent: &str, requirement: &RequirementName) {
        let key = requirement.key();
        if self.ignored.contains(key) || IgnoreSet::is_bootstrap(key) {
            return;
        }

        self.dependencies
            .entry(key.to_string())
            .and_modify(|dependency| dependency.add_required_by(parent))
            .or_insert_with(|| Distribution::new(key, None, [parent]));

        self.demote(key);
    }

    /// Moves a top-level entry into the dependency map; never reversed
    fn demote(&mut self, key: &str) {
        if let Some(former_top_level) = self.top_level.remove(key) {
            debug!("{} is required by another package", key);
            if let Some(dependency) = self.dependencies.get_mut(key) {
                dependency.absorb(former_top_level);
            }
        }
    }

    fn finish(self) -> Classification {
        let mut distributions: Vec<Distribution> = self.top_level.into_values().collect();
        let mut dependencies: Vec<Distribution> = self.dependencies.into_values().collect();
        distributions.sort_by(Distribution::cmp_by_name);
        dependencies.sort_by(Distribution::cmp_by_name);

        Classification {
            distributions,
            dependencies,
            warnings: self.warnings,
        }
    }
}
