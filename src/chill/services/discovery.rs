use crate::chill::domain::{DistributionRecord, BOOTSTRAP_PACKAGES};
use crate::ports::outbound::{LegacyInstallReader, PackageRegistry, RecordResult};
use std::cell::RefCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Discovery service merging every source of installed distributions
///
/// Produces a single record stream, deduplicated by normalized key with the
/// first sighting winning, in this order:
/// 1. bootstrap tooling looked up by name,
/// 2. everything the registry enumerates,
/// 3. legacy editable installs found through link files.
///
/// The link scan runs at most once per `Discovery` value.
pub struct Discovery<R, L> {
    registry: R,
    legacy_reader: L,
    link_cache: RefCell<Option<Vec<PathBuf>>>,
    warnings: RefCell<Vec<String>>,
}

impl<R, L> Discovery<R, L>
where
    R: PackageRegistry,
    L: LegacyInstallReader,
{
    pub fn new(registry: R, legacy_reader: L) -> Self {
        Self {
            registry,
            legacy_reader,
            link_cache: RefCell::new(None),
            warnings: RefCell::new(Vec::new()),
        }
    }

    /// Lazily enumerates every installed distribution exactly once
    ///
    /// Nothing is read until the iterator is advanced; the registry is only
    /// enumerated once the bootstrap lookups are exhausted, and link files
    /// only after that.
    pub fn enumerate_all(&self) -> impl Iterator<Item = RecordResult> + '_ {
        let bootstrap = BOOTSTRAP_PACKAGES
            .iter()
            .filter_map(move |name| self.lookup(name));

        let registered = std::iter::once(()).flat_map(move |_| {
            debug!("Enumerating registry distributions");
            match self.registry.distributions() {
                Ok(records) => records,
                Err(e) => vec![Err(e.context("Failed to enumerate installed distributions"))],
            }
        });

        let linked = std::iter::once(())
            .flat_map(move |_| self.link_files())
            .filter_map(move |link| self.record_from_link(&link));

        let mut seen: HashSet<String> = HashSet::new();
        bootstrap
            .chain(registered)
            .chain(linked)
            .filter(move |record| match record {
                Ok(record) => seen.insert(record.key()),
                Err(_) => true,
            })
    }

    /// Drains the warnings collected so far
    pub fn take_warnings(&self) -> Vec<String> {
        std::mem::take(&mut *self.warnings.borrow_mut())
    }

    fn warn(&self, message: String) {
        debug!("{}", message);
        self.warnings.borrow_mut().push(message);
    }

    /// A failed lookup yields nothing; the registry enumeration reports it
    fn lookup(&self, name: &str) -> Option<RecordResult> {
        match self.registry.distribution(name) {
            Ok(record) => record.map(Ok),
            Err(e) => {
                debug!("Bootstrap lookup of {} failed: {:#}", name, e);
                None
            }
        }
    }

    /// Link files across all search paths, scanned on first use only
    fn link_files(&self) -> Vec<PathBuf> {
        if let Some(cached) = self.link_cache.borrow().as_ref() {
            return cached.clone();
        }

        let mut links = Vec::new();
        for dir in self.legacy_reader.search_paths() {
            match self.legacy_reader.link_files(&dir) {
                Ok(found) => links.extend(found),
                Err(e) => debug!("Skipping search path {}: {:#}", dir.display(), e),
            }
        }
        debug!("Found {} legacy link file(s)", links.len());

        *self.link_cache.borrow_mut() = Some(links.clone());
        links
    }

    /// Rebuilds the record a link file points at
    ///
    /// When the target cannot be read, the link file's stem stands in as the
    /// distribution name with no version and no requirements.
    fn record_from_link(&self, link: &Path) -> Option<RecordResult> {
        let resolved = self
            .legacy_reader
            .read_link_target(link)
            .and_then(|target| self.legacy_reader.distribution_at(&target));

        match resolved {
            Ok(record) => Some(Ok(record)),
            Err(e) => {
                let stem = link
                    .file_stem()
                    .and_then(|stem| stem.to_str())
                    .map(str::trim)
                    .filter(|stem| !stem.is_empty());

                match stem {
                    Some(stem) => {
                        self.warn(format!(
                            "Could not read metadata for {}: {:#}; listing it as '{}'",
                            link.display(),
                            e,
                            stem
                        ));
                        Some(Ok(DistributionRecord::new(stem, None, Vec::new())))
                    }
                    None => {
                        self.warn(format!(
                            "Ignoring unusable link file {}: {:#}",
                            link.display(),
                            e
                        ));
                        None
                    }
                }
            }
        }
    }
}
