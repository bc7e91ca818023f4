use super::metadata::find_distribution_in;
use crate::chill::domain::DistributionRecord;
use crate::ports::outbound::LegacyInstallReader;
use crate::shared::error::ChillError;
use crate::shared::security::read_metadata_file;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

const EGG_LINK_SUFFIX: &str = ".egg-link";

/// EggLinkReader adapter for `setup.py develop` installs
///
/// This adapter implements the LegacyInstallReader port. Each
/// `<name>.egg-link` file holds the path of a source checkout on its first
/// line; the checkout carries the `.egg-info` metadata.
pub struct EggLinkReader {
    search_paths: Vec<PathBuf>,
}

impl EggLinkReader {
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }
}

impl LegacyInstallReader for EggLinkReader {
    fn search_paths(&self) -> Vec<PathBuf> {
        self.search_paths.clone()
    }

    fn link_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let read_dir = fs::read_dir(dir).map_err(|e| ChillError::InvalidSearchPath {
            path: dir.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut links: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .file_name()
                        .and_then(|name| name.to_str())
                        .is_some_and(|name| name.ends_with(EGG_LINK_SUFFIX))
            })
            .collect();
        links.sort();
        Ok(links)
    }

    fn read_link_target(&self, link: &Path) -> Result<PathBuf> {
        let content = read_metadata_file(link, "egg-link")?;
        let first_line = content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or_else(|| ChillError::MetadataReadError {
                path: link.to_path_buf(),
                details: "egg-link file is empty".to_string(),
            })?;

        let target = PathBuf::from(first_line);
        if target.is_absolute() {
            return Ok(target);
        }

        let base = link.parent().unwrap_or_else(|| Path::new("."));
        Ok(base.join(target))
    }

    fn distribution_at(&self, dir: &Path) -> Result<DistributionRecord> {
        find_distribution_in(dir)
    }
}
