//! Installed-app configuration.
//!
//! Mirrors the Django `INSTALLED_APPS` convention: an ordered list of app
//! names plus a conflict policy for mounting. Settings are deserialized
//! from TOML:
//!
//! ```toml
//! installed_apps = ["blog", "shop"]
//! conflict_policy = "strict"
//! ```

use crate::error::{Error, Result};
use crate::registration::invalid_identifier_reason;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// How the composition mounter resolves colliding registrations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// Any collision aborts composition. The default: fail closed at
    /// startup rather than serve an ambiguous registry.
    #[default]
    Strict,
    /// A later app replaces an earlier app's colliding entry; every
    /// replacement is recorded in the audit log.
    OverrideLatest,
    /// Later colliding entries are dropped; every drop is recorded in the
    /// audit log.
    SkipDuplicate,
}

/// Application settings: the ordered app list and the mount policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Ordered list of app names to scan. Order determines mount order
    /// and therefore listing order in the composed registry.
    pub installed_apps: Vec<String>,
    /// Conflict policy applied while mounting.
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

impl Settings {
    /// Creates settings with the given apps and the strict policy.
    pub fn new<I, S>(installed_apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            installed_apps: installed_apps.into_iter().map(Into::into).collect(),
            conflict_policy: ConflictPolicy::default(),
        }
    }

    /// Replaces the conflict policy.
    pub fn with_policy(mut self, policy: ConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    /// Parses settings from a TOML string and validates the app list.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file and validates the app list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Validates the installed-app list.
    pub fn validate(&self) -> Result<()> {
        validate_app_list(&self.installed_apps)
    }
}

/// Validates an installed-app list: every entry must be a well-formed
/// identifier and no entry may appear twice.
pub fn validate_app_list(apps: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for app in apps {
        if let Some(reason) = invalid_identifier_reason(app) {
            return Err(Error::configuration(format!(
                "app name '{app}' {reason}"
            )));
        }
        if !seen.insert(app.as_str()) {
            return Err(Error::configuration(format!(
                "duplicate app '{app}' in installed_apps"
            )));
        }
    }
    Ok(())
}
