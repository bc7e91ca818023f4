use crate::chill::domain::{DistributionRecord, RequirementExpression};
use crate::shared::error::ChillError;
use crate::shared::security::read_metadata_file;
use crate::shared::Result;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DIST_INFO_SUFFIX: &str = ".dist-info";
const EGG_INFO_SUFFIX: &str = ".egg-info";

/// Parsed RFC 822 style header block of a core metadata file
///
/// Header names are matched case-insensitively; repeated headers such as
/// `Requires-Dist` keep every value in file order.
#[derive(Debug, Default)]
pub struct CoreMetadata {
    headers: HashMap<String, Vec<String>>,
}

impl CoreMetadata {
    /// Parses the header block, stopping at the first blank line
    pub fn parse(content: &str) -> Self {
        let mut headers: HashMap<String, Vec<String>> = HashMap::new();
        let mut current_key: Option<String> = None;
        let mut current_value = String::new();

        for line in content.lines() {
            if line.trim().is_empty() {
                break;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                if current_key.is_some() {
                    current_value.push(' ');
                    current_value.push_str(line.trim());
                }
                continue;
            }

            if let Some(key) = current_key.take() {
                headers
                    .entry(key)
                    .or_default()
                    .push(current_value.trim().to_string());
                current_value.clear();
            }

            if let Some((key, value)) = line.split_once(':') {
                current_key = Some(key.trim().to_ascii_lowercase());
                current_value.push_str(value.trim());
            }
        }

        if let Some(key) = current_key.take() {
            headers
                .entry(key)
                .or_default()
                .push(current_value.trim().to_string());
        }

        Self { headers }
    }

    /// First value of a header, if present and non-empty
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Every value of a (possibly repeated) header
    pub fn get_all(&self, key: &str) -> &[String] {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Translates an egg-info `requires.txt` into requirement expressions
///
/// Section headers carry the condition for the lines below them:
/// `[extra]` becomes `extra == "extra"`, `[:cond]` becomes `cond` and
/// `[extra:cond]` becomes both joined with `and`.
pub fn parse_requires_txt(content: &str) -> Vec<RequirementExpression> {
    let mut requirements = Vec::new();
    let mut marker: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(section) = line.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            marker = section_marker(section);
            continue;
        }

        let requirement = match &marker {
            Some(marker) => format!("{} ; {}", line, marker),
            None => line.to_string(),
        };
        requirements.push(RequirementExpression::raw(requirement));
    }

    requirements
}

fn section_marker(section: &str) -> Option<String> {
    let (extra, condition) = match section.split_once(':') {
        Some((extra, condition)) => (extra.trim(), condition.trim()),
        None => (section.trim(), ""),
    };

    match (extra.is_empty(), condition.is_empty()) {
        (true, true) => None,
        (true, false) => Some(condition.to_string()),
        (false, true) => Some(format!("extra == \"{}\"", extra)),
        (false, false) => Some(format!("({}) and extra == \"{}\"", condition, extra)),
    }
}

/// Whether a directory entry name looks like installed distribution metadata
pub fn is_metadata_entry(file_name: &str) -> bool {
    file_name.ends_with(DIST_INFO_SUFFIX) || file_name.ends_with(EGG_INFO_SUFFIX)
}

/// Normalizable project name encoded in a metadata entry name
///
/// `typing_extensions-4.12.2.dist-info` yields `typing_extensions`,
/// `mytool.egg-info` yields `mytool`.
pub fn project_name_hint(file_name: &str) -> Option<&str> {
    let stem = file_name
        .strip_suffix(DIST_INFO_SUFFIX)
        .or_else(|| file_name.strip_suffix(EGG_INFO_SUFFIX))?;
    let name = stem.split('-').next().unwrap_or(stem);
    (!name.is_empty()).then_some(name)
}

/// Reads one installed distribution from its metadata entry
///
/// Accepts a `*.dist-info` directory, a `*.egg-info` directory or a
/// single-file `*.egg-info`.
pub fn read_distribution(entry: &Path) -> Result<DistributionRecord> {
    let is_dist_info = entry
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(DIST_INFO_SUFFIX));

    if entry.is_file() {
        let content = read_metadata_file(entry, "PKG-INFO")?;
        return record_from_metadata(entry, &CoreMetadata::parse(&content), Vec::new());
    }

    if is_dist_info {
        let content = read_metadata_file(&entry.join("METADATA"), "METADATA")?;
        return record_from_metadata(entry, &CoreMetadata::parse(&content), Vec::new());
    }

    let content = read_metadata_file(&entry.join("PKG-INFO"), "PKG-INFO")?;
    let metadata = CoreMetadata::parse(&content);

    let requires_txt = entry.join("requires.txt");
    let legacy_requirements =
        if metadata.get_all("Requires-Dist").is_empty() && requires_txt.exists() {
            parse_requires_txt(&read_metadata_file(&requires_txt, "requires.txt")?)
        } else {
            Vec::new()
        };

    record_from_metadata(entry, &metadata, legacy_requirements)
}

fn record_from_metadata(
    entry: &Path,
    metadata: &CoreMetadata,
    legacy_requirements: Vec<RequirementExpression>,
) -> Result<DistributionRecord> {
    let name = metadata.get("Name").ok_or_else(|| ChillError::MetadataReadError {
        path: entry.to_path_buf(),
        details: "missing Name header".to_string(),
    })?;

    let mut requirements: Vec<RequirementExpression> = metadata
        .get_all("Requires-Dist")
        .iter()
        .map(|requirement| RequirementExpression::raw(requirement.as_str()))
        .collect();
    requirements.extend(legacy_requirements);

    Ok(DistributionRecord::new(
        name,
        metadata.get("Version").map(str::to_string),
        requirements,
    ))
}

/// Lists the metadata entries directly inside a directory, sorted by name
pub fn metadata_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|e| ChillError::InvalidSearchPath {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut entries: Vec<PathBuf> = read_dir
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_metadata_entry(&entry.file_name().to_string_lossy()))
        .map(|entry| entry.path())
        .collect();
    entries.sort();
    Ok(entries)
}

/// Finds and reads the distribution whose metadata lives in `dir`
///
/// Used for legacy development installs, where the metadata sits in the
/// source checkout rather than in site-packages.
pub fn find_distribution_in(dir: &Path) -> Result<DistributionRecord> {
    let entries = metadata_entries(dir)?;
    let entry = entries.first().ok_or_else(|| ChillError::MetadataReadError {
        path: dir.to_path_buf(),
        details: "no .egg-info or .dist-info metadata found".to_string(),
    })?;
    read_distribution(entry)
}
