//! Generation options supplied by the caller.

use eyre::{Result, eyre};
use indexmap::IndexMap;

/// Human-readable project name.
pub const PROJECT_NAME: &str = "projectName";
/// Free-text project description.
pub const PROJECT_DESCRIPTION: &str = "projectDescription";
/// Project version.
pub const PROJECT_VERSION: &str = "projectVersion";
/// Project homepage.
pub const PROJECT_URL: &str = "projectUrl";
/// Name of the project license.
pub const PROJECT_LICENSE_NAME: &str = "projectLicenseName";
/// URL of the project license.
pub const PROJECT_LICENSE_URL: &str = "projectLicenseUrl";
/// Qualified package of generated routes/handlers.
pub const API_PACKAGE: &str = "apiPackage";
/// Qualified package of generated models/schemas.
pub const MODEL_PACKAGE: &str = "modelPackage";

/// Ordered map from option name to value.
///
/// Backends never mutate the caller's bag; they return a new one with
/// defaults inserted. Entries are only ever added, never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyBag {
    entries: IndexMap<String, String>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key=value` assignment (as given on the command line).
    pub fn parse_assignment(s: &str) -> Result<(String, String)> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| eyre!("expected key=value, got '{}'", s))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(eyre!("empty property name in '{}'", s));
        }
        Ok((key.to_string(), value.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Set a value only when the key is absent; returns the value in effect.
    pub fn insert_default(&mut self, key: &str, value: impl Into<String>) -> &str {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| value.into())
            .as_str()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut bag = PropertyBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}
