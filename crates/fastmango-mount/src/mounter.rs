//! Mounting per-app registries into the composite root.

use crate::composite::CompositeRegistry;
use fastmango_core::{ConflictPolicy, Error, Registration, RegistrationKind, Result};
use fastmango_registry::AppRegistry;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// How one collision was resolved under a non-strict policy.
///
/// Every resolution is recorded; a colliding registration is never
/// silently lost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "resolution")]
pub enum Resolution {
    /// A later app replaced an earlier app's entry (`OverrideLatest`).
    Overridden {
        /// The colliding key.
        key: String,
        /// The kind under which the keys collided.
        kind: RegistrationKind,
        /// The app whose entry now serves the key.
        winner_app: String,
        /// The app whose entry was removed.
        loser_app: String,
    },
    /// A later colliding entry was dropped (`SkipDuplicate`).
    Skipped {
        /// The colliding key.
        key: String,
        /// The kind under which the keys collided.
        kind: RegistrationKind,
        /// The app whose earlier entry was kept.
        kept_app: String,
        /// The app whose entry was dropped.
        dropped_app: String,
    },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overridden {
                key,
                kind,
                winner_app,
                loser_app,
            } => write!(
                f,
                "{kind} '{key}': app '{winner_app}' overrides app '{loser_app}'"
            ),
            Self::Skipped {
                key,
                kind,
                kept_app,
                dropped_app,
            } => write!(
                f,
                "{kind} '{key}': app '{dropped_app}' skipped, app '{kept_app}' kept"
            ),
        }
    }
}

/// A fully mounted composite plus the audit log of its conflict
/// resolutions.
#[derive(Debug)]
pub struct Composition {
    /// The merged registry.
    pub registry: CompositeRegistry,
    /// Collisions encountered and how each was resolved. Empty under the
    /// strict policy (any collision would have aborted instead).
    pub audit: Vec<Resolution>,
}

/// Mounts `scanned` registries in order under their app-name prefixes.
///
/// Collisions are detected in two domains:
///
/// - the qualified `app.key` flat index, and
/// - bare keys within one kind across apps, since consumers such as MCP
///   tool dispatch and the admin UI address components by bare name.
///
/// Under [`ConflictPolicy::Strict`] any collision aborts with
/// [`Error::MountConflict`] naming both source apps and the key; nothing
/// partial is returned. The other policies resolve collisions and record
/// every resolution in the returned audit log.
pub fn compose(scanned: Vec<AppRegistry>, policy: ConflictPolicy) -> Result<Composition> {
    let mut prefixes: HashSet<String> = HashSet::new();
    let mut flat_index: IndexMap<String, Registration> = IndexMap::new();
    // (kind, bare key) -> app currently serving it
    let mut bare_index: HashMap<(RegistrationKind, String), String> = HashMap::new();
    let mut audit = Vec::new();

    for registry in &scanned {
        let app = registry.app_name().to_string();
        if prefixes.contains(&app) {
            return Err(Error::configuration(format!(
                "mount prefix '{app}' is already in use"
            )));
        }

        for reg in registry.list(None) {
            let qualified = reg.qualified_key();
            let bare_key = (reg.kind(), reg.key().to_string());

            if let Some(first_app) = bare_index.get(&bare_key).cloned() {
                match policy {
                    ConflictPolicy::Strict => {
                        return Err(Error::MountConflict {
                            key: reg.key().to_string(),
                            first_app,
                            second_app: app,
                        });
                    }
                    ConflictPolicy::OverrideLatest => {
                        let loser_qualified = format!("{first_app}.{}", reg.key());
                        flat_index.shift_remove(&loser_qualified);
                        flat_index.insert(qualified, reg.clone());
                        bare_index.insert(bare_key, app.clone());
                        tracing::warn!(
                            key = %reg.key(),
                            kind = %reg.kind(),
                            winner = %app,
                            loser = %first_app,
                            "mount collision: overriding earlier registration"
                        );
                        audit.push(Resolution::Overridden {
                            key: reg.key().to_string(),
                            kind: reg.kind(),
                            winner_app: app.clone(),
                            loser_app: first_app,
                        });
                    }
                    ConflictPolicy::SkipDuplicate => {
                        tracing::warn!(
                            key = %reg.key(),
                            kind = %reg.kind(),
                            kept = %first_app,
                            dropped = %app,
                            "mount collision: skipping duplicate registration"
                        );
                        audit.push(Resolution::Skipped {
                            key: reg.key().to_string(),
                            kind: reg.kind(),
                            kept_app: first_app,
                            dropped_app: app.clone(),
                        });
                    }
                }
                continue;
            }

            // Same app registering one key under two kinds collides on the
            // qualified flat key even though the bare index is kind-scoped.
            if let Some(existing) = flat_index.get(&qualified).cloned() {
                match policy {
                    ConflictPolicy::Strict => {
                        return Err(Error::MountConflict {
                            key: qualified,
                            first_app: existing.source_app().to_string(),
                            second_app: app,
                        });
                    }
                    ConflictPolicy::OverrideLatest => {
                        bare_index.remove(&(existing.kind(), existing.key().to_string()));
                        flat_index.insert(qualified.clone(), reg.clone());
                        bare_index.insert(bare_key, app.clone());
                        tracing::warn!(
                            key = %qualified,
                            winner_kind = %reg.kind(),
                            loser_kind = %existing.kind(),
                            "flat-key collision: overriding earlier registration"
                        );
                        audit.push(Resolution::Overridden {
                            key: qualified,
                            kind: reg.kind(),
                            winner_app: app.clone(),
                            loser_app: existing.source_app().to_string(),
                        });
                    }
                    ConflictPolicy::SkipDuplicate => {
                        tracing::warn!(
                            key = %qualified,
                            kept_kind = %existing.kind(),
                            dropped_kind = %reg.kind(),
                            "flat-key collision: skipping duplicate registration"
                        );
                        audit.push(Resolution::Skipped {
                            key: qualified,
                            kind: reg.kind(),
                            kept_app: existing.source_app().to_string(),
                            dropped_app: app.clone(),
                        });
                    }
                }
                continue;
            }

            flat_index.insert(qualified, reg.clone());
            bare_index.insert(bare_key, app.clone());
        }

        prefixes.insert(app);
    }

    // Namespaces are bound only after every entry passed conflict checks,
    // so a failed composition exposes nothing partial.
    let mut namespaces: IndexMap<String, AppRegistry> = IndexMap::with_capacity(scanned.len());
    for registry in scanned {
        namespaces.insert(registry.app_name().to_string(), registry);
    }

    tracing::info!(
        apps = namespaces.len(),
        registrations = flat_index.len(),
        resolutions = audit.len(),
        "composed registry"
    );

    Ok(Composition {
        registry: CompositeRegistry::new(namespaces, flat_index),
        audit,
    })
}

// ============================================================================
// Tests
// ============================================================================
