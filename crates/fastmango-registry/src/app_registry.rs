//! Insertion-ordered registry for a single app.

use fastmango_core::registration::invalid_identifier_reason;
use fastmango_core::{Error, Payload, Registration, RegistrationKind, Result};
use indexmap::IndexMap;

/// Registry of components contributed by one app.
///
/// Keys are unique per kind within the app. Iteration follows
/// registration order, so listings stay deterministic across runs given a
/// deterministic app-load order. A registry is built once per scan; a
/// re-scan produces new registries rather than mutating old ones.
#[derive(Debug)]
pub struct AppRegistry {
    app_name: String,
    registrations: IndexMap<(RegistrationKind, String), Registration>,
}

impl AppRegistry {
    /// Creates an empty registry for the named app.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            registrations: IndexMap::new(),
        }
    }

    /// The app that owns this registry.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Registers a component under `key`.
    ///
    /// Fails with [`Error::DuplicateKey`] if the key is already taken for
    /// this kind, and with [`Error::InvalidRegistrationUnit`] if the key is
    /// not a well-formed identifier.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        payload: Payload,
        kind: RegistrationKind,
    ) -> Result<()> {
        let key = key.into();
        if let Some(reason) = invalid_identifier_reason(&key) {
            return Err(Error::invalid_unit(
                &self.app_name,
                format!("registration key '{key}' {reason}"),
            ));
        }
        if self.registrations.contains_key(&(kind, key.clone())) {
            return Err(Error::DuplicateKey {
                app: self.app_name.clone(),
                key,
                kind,
            });
        }
        let registration =
            Registration::new(key.clone(), kind, payload, self.app_name.clone());
        self.registrations.insert((kind, key), registration);
        Ok(())
    }

    /// Returns the first registration under `key` in registration order.
    pub fn get(&self, key: &str) -> Result<&Registration> {
        self.registrations
            .values()
            .find(|r| r.key() == key)
            .ok_or_else(|| Error::not_found(key))
    }

    /// Returns the registration under `key` for a specific kind.
    pub fn get_kind(&self, kind: RegistrationKind, key: &str) -> Result<&Registration> {
        self.registrations
            .get(&(kind, key.to_string()))
            .ok_or_else(|| Error::not_found(key))
    }

    /// Iterates registrations in registration order, optionally filtered
    /// by kind.
    pub fn list(
        &self,
        kind: Option<RegistrationKind>,
    ) -> impl Iterator<Item = &Registration> + '_ {
        self.registrations
            .values()
            .filter(move |r| kind.is_none_or(|k| r.kind() == k))
    }

    /// Number of registrations held.
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Whether the app registered nothing.
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
