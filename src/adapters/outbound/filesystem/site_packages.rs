use super::metadata::{metadata_entries, project_name_hint, read_distribution};
use crate::chill::domain::{canonicalize_name, DistributionRecord};
use crate::ports::outbound::{PackageRegistry, RecordResult};
use crate::shared::Result;
use std::path::PathBuf;
use tracing::debug;

/// SitePackagesRegistry adapter reading installed metadata from disk
///
/// This adapter implements the PackageRegistry port by scanning one or more
/// site-packages directories for `*.dist-info` and `*.egg-info` entries.
pub struct SitePackagesRegistry {
    directories: Vec<PathBuf>,
}

impl SitePackagesRegistry {
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }
}

impl PackageRegistry for SitePackagesRegistry {
    fn distributions(&self) -> Result<Vec<RecordResult>> {
        let mut records = Vec::new();

        for dir in &self.directories {
            match metadata_entries(dir) {
                Ok(entries) => {
                    debug!("Found {} metadata entries in {}", entries.len(), dir.display());
                    records.extend(entries.iter().map(|entry| read_distribution(entry)));
                }
                // remaining directories are still listed
                Err(e) => records.push(Err(e)),
            }
        }

        Ok(records)
    }

    fn distribution(&self, name: &str) -> Result<Option<DistributionRecord>> {
        let key = canonicalize_name(name);

        for dir in &self.directories {
            let entries = match metadata_entries(dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!("Skipping {} during lookup of {}: {:#}", dir.display(), name, e);
                    continue;
                }
            };

            for entry in entries {
                let matches_hint = entry
                    .file_name()
                    .and_then(|file_name| file_name.to_str())
                    .and_then(project_name_hint)
                    .is_some_and(|hint| canonicalize_name(hint) == key);
                if !matches_hint {
                    continue;
                }

                // unreadable entries are reported by `distributions`
                match read_distribution(&entry) {
                    Ok(record) if record.key() == key => return Ok(Some(record)),
                    Ok(_) => {}
                    Err(e) => debug!("Skipping {}: {:#}", entry.display(), e),
                }
            }
        }

        Ok(None)
    }
}
