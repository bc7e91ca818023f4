use pip_chill::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LegacyInstallReader with in-memory link files
#[derive(Default, Clone)]
pub struct MockLegacyInstallReader {
    links: Vec<PathBuf>,
    targets: HashMap<PathBuf, PathBuf>,
    records: HashMap<PathBuf, DistributionRecord>,
    pub scans: Arc<Mutex<usize>>,
}

impl MockLegacyInstallReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a link file pointing at a checkout that holds `record`
    pub fn with_link(mut self, link: &str, checkout: &str, record: DistributionRecord) -> Self {
        let link = PathBuf::from(link);
        let checkout = PathBuf::from(checkout);
        self.links.push(link.clone());
        self.targets.insert(link, checkout.clone());
        self.records.insert(checkout, record);
        self
    }

    /// Adds a link file that cannot be read
    pub fn with_broken_link(mut self, link: &str) -> Self {
        self.links.push(PathBuf::from(link));
        self
    }
}

impl LegacyInstallReader for MockLegacyInstallReader {
    fn search_paths(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("/venv/lib/python3.12/site-packages")]
    }

    fn link_files(&self, _dir: &Path) -> Result<Vec<PathBuf>> {
        *self.scans.lock().unwrap() += 1;
        Ok(self.links.clone())
    }

    fn read_link_target(&self, link: &Path) -> Result<PathBuf> {
        self.targets
            .get(link)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock link read failure: {}", link.display()))
    }

    fn distribution_at(&self, dir: &Path) -> Result<DistributionRecord> {
        self.records
            .get(dir)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock metadata missing in {}", dir.display()))
    }
}
