use pip_chill::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock PackageRegistry serving a fixed set of records
#[derive(Default, Clone)]
pub struct MockPackageRegistry {
    records: Vec<DistributionRecord>,
    unreadable: Vec<String>,
    should_fail: bool,
    pub enumerations: Arc<Mutex<usize>>,
}

impl MockPackageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_distribution(mut self, name: &str, version: &str, requirements: &[&str]) -> Self {
        self.records
            .push(DistributionRecord::from_raw(name, Some(version), requirements));
        self
    }

    /// Adds an entry whose metadata cannot be read
    pub fn with_unreadable(mut self, reason: &str) -> Self {
        self.unreadable.push(reason.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl PackageRegistry for MockPackageRegistry {
    fn distributions(&self) -> Result<Vec<RecordResult>> {
        *self.enumerations.lock().unwrap() += 1;
        if self.should_fail {
            anyhow::bail!("Mock registry failure");
        }

        let mut results: Vec<RecordResult> = self.records.iter().cloned().map(Ok).collect();
        for reason in &self.unreadable {
            results.push(Err(anyhow::anyhow!("{}", reason)));
        }
        Ok(results)
    }

    fn distribution(&self, name: &str) -> Result<Option<DistributionRecord>> {
        let key = canonicalize_name(name);
        Ok(self.records.iter().find(|r| r.key() == key).cloned())
    }
}
