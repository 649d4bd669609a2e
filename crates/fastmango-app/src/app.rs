//! The `MangoApp` facade.

use arc_swap::ArcSwap;
use fastmango_core::{Registration, RegistrationKind, Result, Settings};
use fastmango_mount::{Composition, Resolution, compose};
use fastmango_registry::{AppSource, scan};
use std::sync::Arc;

/// The unified application facade.
///
/// Holds the installed-app settings, the app source, and the current
/// composite snapshot. Reads (`lookup`, `list_all`, `snapshot`) are
/// lock-free and wait-free; `reload` is the only writer and publishes a
/// fully built replacement in one pointer swap.
pub struct MangoApp {
    settings: Settings,
    source: Arc<dyn AppSource>,
    current: ArcSwap<Composition>,
}

impl std::fmt::Debug for MangoApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MangoApp")
            .field("settings", &self.settings)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl MangoApp {
    /// Scans and mounts the configured apps, failing fast on any
    /// configuration, registration, or mount error.
    pub fn build(settings: Settings, source: Arc<dyn AppSource>) -> Result<Self> {
        settings.validate()?;
        let composition = build_composition(&settings, source.as_ref())?;
        tracing::info!(
            apps = settings.installed_apps.len(),
            registrations = composition.registry.len(),
            "application composed"
        );
        Ok(Self {
            settings,
            source,
            current: ArcSwap::from_pointee(composition),
        })
    }

    /// The settings this app was built from.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The current composite snapshot.
    ///
    /// The returned handle stays consistent for as long as the caller
    /// holds it, regardless of concurrent reloads. Use it for iteration
    /// that must see one coherent view.
    pub fn snapshot(&self) -> Arc<Composition> {
        self.current.load_full()
    }

    /// O(1) lookup by fully qualified `app.key` identifier.
    pub fn lookup(&self, qualified_key: &str) -> Result<Registration> {
        self.current
            .load()
            .registry
            .lookup(qualified_key)
            .cloned()
    }

    /// Registrations from the current snapshot, optionally filtered,
    /// in mount order.
    ///
    /// For borrow-based lazy iteration take a [`MangoApp::snapshot`] and
    /// use [`CompositeRegistry::list_all`](fastmango_mount::CompositeRegistry::list_all)
    /// on it directly.
    pub fn list_all(
        &self,
        kind: Option<RegistrationKind>,
        app_name: Option<&str>,
    ) -> Vec<Registration> {
        self.current
            .load()
            .registry
            .list_all(kind, app_name)
            .cloned()
            .collect()
    }

    /// The audit log from the most recent composition.
    pub fn audit(&self) -> Vec<Resolution> {
        self.current.load().audit.clone()
    }

    /// Re-runs discovery and composition from the current settings and
    /// atomically swaps in the new composite.
    ///
    /// On error the previous snapshot stays published, so readers never
    /// observe a broken or half-built registry.
    pub fn reload(&self) -> Result<Vec<Resolution>> {
        let composition = build_composition(&self.settings, self.source.as_ref())?;
        let audit = composition.audit.clone();
        tracing::info!(
            registrations = composition.registry.len(),
            resolutions = audit.len(),
            "reloaded composite registry"
        );
        self.current.store(Arc::new(composition));
        Ok(audit)
    }
}

fn build_composition(settings: &Settings, source: &dyn AppSource) -> Result<Composition> {
    let scanned = scan(&settings.installed_apps, source)?;
    compose(scanned, settings.conflict_policy)
}

// ============================================================================
// Tests
// ============================================================================
