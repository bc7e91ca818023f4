use super::package_name::canonicalize_name;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Rendered in place of a version that was never reported
const UNKNOWN_VERSION: &str = "unknown";

/// Distribution entity representing one installed package
///
/// Identity is the normalized key only: two distributions with the same key
/// are equal regardless of version or provenance, and a distribution compares
/// equal to (and hashes like) its bare key string.
#[derive(Debug, Clone)]
pub struct Distribution {
    name: String,
    key: String,
    version: Option<String>,
    required_by: BTreeSet<String>,
}

impl Distribution {
    pub fn new<I, S>(name: &str, version: Option<&str>, required_by: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.to_string(),
            key: canonicalize_name(name),
            version: version.map(str::to_string),
            required_by: required_by.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a distribution that nothing requires (yet)
    pub fn top_level(name: &str, version: Option<&str>) -> Self {
        Self::new(name, version, std::iter::empty::<String>())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The reported version, `"unknown"` when it was never seen
    pub fn version(&self) -> &str {
        self.version.as_deref().unwrap_or(UNKNOWN_VERSION)
    }

    pub fn required_by(&self) -> &BTreeSet<String> {
        &self.required_by
    }

    pub fn is_dependency(&self) -> bool {
        !self.required_by.is_empty()
    }

    pub(crate) fn set_version(&mut self, version: Option<String>) {
        if version.is_some() {
            self.version = version;
        }
    }

    /// Replaces the display name; the key is unaffected
    pub(crate) fn set_display_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub(crate) fn add_required_by(&mut self, key: &str) {
        self.required_by.insert(key.to_string());
    }

    /// Merges a former top-level entry for the same key into this dependency
    ///
    /// The absorbed entry was built from the package's own record, so its
    /// display name and version win.
    pub(crate) fn absorb(&mut self, other: Distribution) {
        self.name = other.name;
        self.set_version(other.version);
        self.required_by.extend(other.required_by);
    }

    /// `name`, or a commented-out line naming the packages that require it
    pub fn render_without_version(&self) -> String {
        self.render_with(self.name.clone())
    }

    /// `name==version`, or a commented-out line naming the packages that require it
    pub fn render(&self) -> String {
        self.render_with(format!("{}=={}", self.name, self.version()))
    }

    fn render_with(&self, requirement: String) -> String {
        if !self.is_dependency() {
            return requirement;
        }

        let parents: Vec<&str> = self.required_by.iter().map(String::as_str).collect();
        format!(
            "# {} # Installed as dependency for {}",
            requirement,
            parents.join(", ")
        )
    }

    /// Orders distributions by display name, ascending
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.key.cmp(&other.key))
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl PartialEq for Distribution {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Distribution {}

impl PartialEq<str> for Distribution {
    fn eq(&self, other: &str) -> bool {
        self.key == other
    }
}

impl PartialEq<&str> for Distribution {
    fn eq(&self, other: &&str) -> bool {
        self.key == *other
    }
}

impl Hash for Distribution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl Borrow<str> for Distribution {
    fn borrow(&self) -> &str {
        &self.key
    }
}
