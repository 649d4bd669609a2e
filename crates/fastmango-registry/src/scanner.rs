//! App discovery: walk the installed-app list and collect registries.

use crate::app_registry::AppRegistry;
use crate::unit::RegistrationUnit;
use fastmango_core::{Error, Result, validate_app_list};
use std::collections::HashMap;

/// Resolves an app name to its registration unit.
///
/// Returning `None` means the app has no registration unit, which is not
/// an error: not every app needs to register anything.
pub trait AppSource: Send + Sync {
    /// Returns the app's registration unit, if it exposes one.
    fn registration_unit(&self, app_name: &str) -> Option<&dyn RegistrationUnit>;
}

/// In-process [`AppSource`] backed by a name-to-unit map.
///
/// The hosting process wires its apps here once at startup; the scanner
/// resolves them by name in configured order.
#[derive(Default)]
pub struct InstalledApps {
    units: HashMap<String, Box<dyn RegistrationUnit>>,
}

impl InstalledApps {
    /// Creates an empty app source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an app with its registration unit, builder style.
    pub fn with_app(
        mut self,
        name: impl Into<String>,
        unit: impl RegistrationUnit + 'static,
    ) -> Self {
        self.add_app(name, unit);
        self
    }

    /// Adds an app with its registration unit.
    pub fn add_app(&mut self, name: impl Into<String>, unit: impl RegistrationUnit + 'static) {
        self.units.insert(name.into(), Box::new(unit));
    }
}

impl AppSource for InstalledApps {
    fn registration_unit(&self, app_name: &str) -> Option<&dyn RegistrationUnit> {
        self.units.get(app_name).map(AsRef::as_ref)
    }
}

/// Scans `apps` in order, running each app's registration unit exactly
/// once against a fresh [`AppRegistry`].
///
/// The app list is validated before any unit runs; duplicates or malformed
/// names fail with [`Error::Configuration`]. A failing unit aborts the
/// whole scan with [`Error::InvalidRegistrationUnit`] or
/// [`Error::DuplicateKey`] — a broken app must not silently vanish from
/// the composed application.
///
/// Output order matches input order, which downstream mounting relies on
/// for deterministic listings and conflict messages.
pub fn scan(apps: &[String], source: &dyn AppSource) -> Result<Vec<AppRegistry>> {
    validate_app_list(apps)?;

    let mut scanned = Vec::with_capacity(apps.len());
    for app in apps {
        let mut registry = AppRegistry::new(app);
        match source.registration_unit(app) {
            None => {
                tracing::debug!(app = %app, "app has no registration unit");
            }
            Some(unit) => {
                unit.register(&mut registry).map_err(|err| match err {
                    err @ (Error::DuplicateKey { .. }
                    | Error::InvalidRegistrationUnit { .. }) => err,
                    other => Error::invalid_unit(app, other.to_string()),
                })?;
                tracing::debug!(
                    app = %app,
                    registrations = registry.len(),
                    "scanned registration unit"
                );
            }
        }
        scanned.push(registry);
    }
    Ok(scanned)
}

// ============================================================================
// Tests
// ============================================================================
