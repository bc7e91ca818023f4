use super::package_name::canonicalize_name;
use pep508_rs::Requirement;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

/// `name [extras] (specifiers | @ url) ; marker # comment`
///
/// Only the name and the extras are captured; everything else is matched so
/// that it can be discarded.
static FALLBACK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<name>[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?)\s*",
        r"(?:\[(?P<extras>[^\]]*)\])?\s*",
        r"(?:@\s*[^\s;#]+|\(?\s*(?:===|~=|==|!=|<=|>=|<|>)[^;#]*)?\s*",
        r"(?:;[^#]*)?",
        r"(?:#.*)?$",
    ))
    .expect("fallback requirement pattern is valid")
});

static EXTRA_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9._-]*[A-Za-z0-9])?$")
        .expect("extra name pattern is valid")
});

static QUOTED_STRING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""[^"]*"|'[^']*'"#).expect("quoted string pattern is valid")
});

/// A trailing `# comment`; a `#` glued to a URL fragment is not one
static COMMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)#.*$").expect("comment pattern is valid"));

static EXTRA_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bextra\b").expect("extra marker pattern is valid"));

/// Whether a marker tests `extra`, ignoring quoted literals
fn mentions_extra(marker: &str) -> bool {
    let unquoted = QUOTED_STRING_PATTERN.replace_all(marker, "");
    EXTRA_MARKER_PATTERN.is_match(&unquoted)
}

/// Errors produced while extracting a name from a requirement expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequirementError {
    #[error("requirement is empty")]
    Empty,

    #[error("invalid requirement '{requirement}': {reason}")]
    Invalid { requirement: String, reason: String },
}

/// Normalized `name[extras]` extracted from a requirement expression
///
/// The name and each extra are canonicalized, and extras are sorted and
/// deduplicated so that `foo[a,b]` and `foo[B, a]` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequirementName {
    name: String,
    extras: Vec<String>,
}

impl RequirementName {
    fn new(name: &str, extras: impl IntoIterator<Item = String>) -> Self {
        let mut extras: Vec<String> = extras
            .into_iter()
            .map(|extra| canonicalize_name(&extra))
            .collect();
        extras.sort();
        extras.dedup();

        Self {
            name: canonicalize_name(name),
            extras,
        }
    }

    /// Parses a requirement with the PEP 508 grammar, falling back to a
    /// pattern match when the grammar rejects the input
    pub fn parse(requirement: &str) -> Result<Self, RequirementError> {
        if requirement.trim().is_empty() {
            return Err(RequirementError::Empty);
        }

        Self::parse_primary(requirement).or_else(|_| Self::parse_fallback(requirement))
    }

    /// Parses with the full PEP 508 requirement grammar
    pub fn parse_primary(requirement: &str) -> Result<Self, RequirementError> {
        if requirement.trim().is_empty() {
            return Err(RequirementError::Empty);
        }

        let parsed = requirement
            .trim()
            .parse::<Requirement>()
            .map_err(|e| RequirementError::Invalid {
                requirement: requirement.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(
            &parsed.name.to_string(),
            parsed.extras.iter().map(|extra| extra.to_string()),
        ))
    }

    /// Parses with the tolerant pattern used for legacy or malformed metadata
    pub fn parse_fallback(requirement: &str) -> Result<Self, RequirementError> {
        if requirement.trim().is_empty() {
            return Err(RequirementError::Empty);
        }

        let invalid = |reason: &str| RequirementError::Invalid {
            requirement: requirement.to_string(),
            reason: reason.to_string(),
        };

        let captures = FALLBACK_PATTERN
            .captures(requirement)
            .ok_or_else(|| invalid("does not look like `name[extras] specifiers; marker`"))?;

        let name = captures
            .name("name")
            .map(|m| m.as_str())
            .ok_or_else(|| invalid("missing distribution name"))?;

        let mut extras = Vec::new();
        if let Some(raw_extras) = captures.name("extras") {
            for extra in raw_extras.as_str().split(',') {
                let extra = extra.trim();
                if extra.is_empty() {
                    continue;
                }
                if !EXTRA_NAME_PATTERN.is_match(extra) {
                    return Err(invalid(&format!("invalid extra name '{}'", extra)));
                }
                extras.push(extra.to_string());
            }
        }

        Ok(Self::new(name, extras))
    }

    /// The normalized distribution key, without extras
    pub fn key(&self) -> &str {
        &self.name
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }
}

impl fmt::Display for RequirementName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.extras.is_empty() {
            write!(f, "[{}]", self.extras.join(","))?;
        }
        Ok(())
    }
}

/// Extracts the canonical `name` or `name[sorted,extras]` from a requirement
///
/// Never fails: when neither the PEP 508 grammar nor the fallback pattern
/// accepts the input, a warning is logged and the input is returned unchanged.
pub fn extract(requirement: &str) -> String {
    match RequirementName::parse(requirement) {
        Ok(name) => name.to_string(),
        Err(e) => {
            warn!("Could not extract a package name from '{}': {}", requirement, e);
            requirement.to_string()
        }
    }
}

/// A requirement as declared by an installed distribution
///
/// Metadata providers hand over either the raw requirement line or an
/// already-parsed structure; both are resolved to a [`RequirementName`]
/// before they reach the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequirementExpression {
    Structured {
        name: String,
        extras: Vec<String>,
        marker: Option<String>,
    },
    Raw(String),
}

impl RequirementExpression {
    pub fn raw(requirement: impl Into<String>) -> Self {
        Self::Raw(requirement.into())
    }

    pub fn structured(name: impl Into<String>, extras: &[&str], marker: Option<&str>) -> Self {
        Self::Structured {
            name: name.into(),
            extras: extras.iter().map(|e| e.to_string()).collect(),
            marker: marker.map(str::to_string),
        }
    }

    /// Whether the requirement only applies when one of the declaring
    /// package's extras is requested (`; extra == "dev"`)
    pub fn is_extra_only(&self) -> bool {
        match self {
            Self::Structured { marker, .. } => marker.as_deref().is_some_and(mentions_extra),
            Self::Raw(requirement) => COMMENT_PATTERN
                .replace(requirement, "")
                .split_once(';')
                .is_some_and(|(_, marker)| mentions_extra(marker)),
        }
    }

    /// Resolves the expression into its normalized name and extras
    pub fn resolve(&self) -> Result<RequirementName, RequirementError> {
        match self {
            Self::Structured { name, extras, .. } => {
                if name.trim().is_empty() {
                    return Err(RequirementError::Empty);
                }
                Ok(RequirementName::new(name, extras.iter().cloned()))
            }
            Self::Raw(requirement) => RequirementName::parse(requirement),
        }
    }
}

impl fmt::Display for RequirementExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structured {
                name,
                extras,
                marker,
            } => {
                write!(f, "{}", name)?;
                if !extras.is_empty() {
                    write!(f, "[{}]", extras.join(","))?;
                }
                if let Some(marker) = marker {
                    write!(f, "; {}", marker)?;
                }
                Ok(())
            }
            Self::Raw(requirement) => write!(f, "{}", requirement),
        }
    }
}

impl From<&str> for RequirementExpression {
    fn from(requirement: &str) -> Self {
        Self::Raw(requirement.to_string())
    }
}
