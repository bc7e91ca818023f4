use super::package_name::canonicalize_name;
use std::collections::HashSet;

/// Installer and build tooling hidden from the listing unless `show_all` is set
pub const BOOTSTRAP_PACKAGES: &[&str] = &["pip", "setuptools", "wheel", "pkg-resources"];

/// The tool's own distribution name, hidden with `--no-chill`
pub const SELF_PACKAGE: &str = "pip-chill";

/// IgnoreSet - normalized keys excluded from classification entirely
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    keys: HashSet<String>,
}

impl IgnoreSet {
    /// Builds the ignore set for one classification pass
    ///
    /// # Arguments
    /// * `show_all` - Start from an empty set instead of the bootstrap packages
    /// * `omit_self` - Also ignore this tool's own distribution
    /// * `extra` - Additional names to ignore (only applied when not `show_all`)
    pub fn new<S: AsRef<str>>(show_all: bool, omit_self: bool, extra: &[S]) -> Self {
        let mut keys: HashSet<String> = HashSet::new();

        if !show_all {
            keys.extend(BOOTSTRAP_PACKAGES.iter().map(|name| canonicalize_name(name)));
            keys.extend(extra.iter().map(|name| canonicalize_name(name.as_ref())));
        }

        if omit_self {
            keys.insert(canonicalize_name(SELF_PACKAGE));
        }

        Self { keys }
    }

    /// Whether the given (already normalized) key is ignored
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_bootstrap(key: &str) -> bool {
        BOOTSTRAP_PACKAGES.contains(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}
