use crate::error::FoldError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Declarative file selection, combined as a logical AND across all
/// dimensions. Empty set fields and absent regex fields impose no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    /// Extensions a file must have, lowercase, without the leading dot.
    pub include_extensions: Vec<String>,
    /// Extensions that disqualify a file.
    pub exclude_extensions: Vec<String>,
    /// Exact basenames a file must match.
    pub include_files: Vec<String>,
    /// Exact basenames that disqualify a file.
    pub exclude_files: Vec<String>,
    /// Root-relative parent directories a file must sit in (`.` is the root).
    pub include_folders: Vec<String>,
    /// Root-relative parent directories that disqualify a file.
    pub exclude_folders: Vec<String>,
    /// Pattern that must match somewhere in the root-relative path.
    pub include_regex: Option<String>,
    /// Pattern that must not match anywhere in the root-relative path.
    pub exclude_regex: Option<String>,
}
#[derive(Debug, Default)]
pub struct FilterSpecBuilder {
    spec: FilterSpec,
}
impl FilterSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_extensions(mut self, extensions: Vec<String>) -> Self {
        self.spec.include_extensions = extensions;
        self
    }
    pub fn exclude_extensions(mut self, extensions: Vec<String>) -> Self {
        self.spec.exclude_extensions = extensions;
        self
    }
    pub fn include_files(mut self, names: Vec<String>) -> Self {
        self.spec.include_files = names;
        self
    }
    pub fn exclude_files(mut self, names: Vec<String>) -> Self {
        self.spec.exclude_files = names;
        self
    }
    pub fn include_folders(mut self, folders: Vec<String>) -> Self {
        self.spec.include_folders = folders;
        self
    }
    pub fn exclude_folders(mut self, folders: Vec<String>) -> Self {
        self.spec.exclude_folders = folders;
        self
    }
    pub fn include_regex(mut self, pattern: impl Into<String>) -> Self {
        self.spec.include_regex = Some(pattern.into());
        self
    }
    pub fn exclude_regex(mut self, pattern: impl Into<String>) -> Self {
        self.spec.exclude_regex = Some(pattern.into());
        self
    }
    pub fn build(self) -> FilterSpec {
        self.spec
    }
}

/// A [`FilterSpec`] with its regexes compiled and its extension sets
/// normalized, ready to test root-relative paths.
pub(crate) struct FilterMatcher {
    include_extensions: Vec<String>,
    exclude_extensions: Vec<String>,
    include_files: Vec<String>,
    exclude_files: Vec<String>,
    include_folders: Vec<String>,
    exclude_folders: Vec<String>,
    include_regex: Option<Regex>,
    exclude_regex: Option<Regex>,
}
impl FilterMatcher {
    pub(crate) fn new(spec: &FilterSpec) -> Result<Self, FoldError> {
        Ok(Self {
            include_extensions: normalize_extensions(&spec.include_extensions),
            exclude_extensions: normalize_extensions(&spec.exclude_extensions),
            include_files: spec.include_files.clone(),
            exclude_files: spec.exclude_files.clone(),
            include_folders: spec.include_folders.clone(),
            exclude_folders: spec.exclude_folders.clone(),
            include_regex: compile(spec.include_regex.as_deref())?,
            exclude_regex: compile(spec.exclude_regex.as_deref())?,
        })
    }
    /// Tests a root-relative path (`/`-separated) against every active
    /// dimension. Any single failing dimension excludes the file.
    pub(crate) fn matches(&self, relative_path: &str) -> bool {
        let path = Path::new(relative_path);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let folder = parent_folder(path);

        if !self.include_extensions.is_empty() && !self.include_extensions.contains(&extension) {
            return false;
        }
        if self.exclude_extensions.contains(&extension) {
            return false;
        }
        if !self.include_files.is_empty() && !self.include_files.contains(&file_name) {
            return false;
        }
        if self.exclude_files.contains(&file_name) {
            return false;
        }
        if !self.include_folders.is_empty() && !self.include_folders.contains(&folder) {
            return false;
        }
        if self.exclude_folders.contains(&folder) {
            return false;
        }
        if let Some(ref re) = self.include_regex {
            if !re.is_match(relative_path) {
                return false;
            }
        }
        if let Some(ref re) = self.exclude_regex {
            if re.is_match(relative_path) {
                return false;
            }
        }
        true
    }
}

/// The root-relative directory a file sits in; `.` for root-level files.
fn parent_folder(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            parent.to_string_lossy().replace('\\', "/")
        }
        _ => ".".to_string(),
    }
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_lowercase())
        .collect()
}

fn compile(pattern: Option<&str>) -> Result<Option<Regex>, FoldError> {
    match pattern {
        Some(pattern) => Regex::new(pattern)
            .map(Some)
            .map_err(|source| FoldError::InvalidRegex {
                pattern: pattern.to_string(),
                source,
            }),
        None => Ok(None),
    }
}
