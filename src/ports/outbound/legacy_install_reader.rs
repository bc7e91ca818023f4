use crate::chill::domain::DistributionRecord;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LegacyInstallReader port for editable installs recorded as link files
///
/// Legacy `setup.py develop` installs leave a `<name>.egg-link` file on the
/// search path whose first line points at the source checkout holding the
/// metadata. These installs are not visible through the primary registry.
pub trait LegacyInstallReader {
    /// Search path entries that may hold link files
    fn search_paths(&self) -> Vec<PathBuf>;

    /// Lists the link files directly inside one search path entry
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed
    fn link_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Reads the target directory a link file points at
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is empty
    fn read_link_target(&self, link: &Path) -> Result<PathBuf>;

    /// Rebuilds a distribution record from the metadata found in a directory
    ///
    /// # Errors
    /// Returns an error if no readable metadata exists there
    fn distribution_at(&self, dir: &Path) -> Result<DistributionRecord>;
}
