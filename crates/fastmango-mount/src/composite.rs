//! The fully merged, queryable registry view.

use fastmango_core::{Error, Registration, RegistrationKind, Result};
use fastmango_registry::AppRegistry;
use indexmap::IndexMap;

/// The composed root registry: every mounted app's registrations under
/// one namespace-prefixed index.
///
/// A composite is built once by [`compose`](crate::compose) and never
/// mutated afterwards. A reload builds a replacement wholesale, so readers
/// holding a composite always see a consistent view.
#[derive(Debug)]
pub struct CompositeRegistry {
    namespaces: IndexMap<String, AppRegistry>,
    flat_index: IndexMap<String, Registration>,
}

impl CompositeRegistry {
    pub(crate) fn new(
        namespaces: IndexMap<String, AppRegistry>,
        flat_index: IndexMap<String, Registration>,
    ) -> Self {
        Self {
            namespaces,
            flat_index,
        }
    }

    /// O(1) lookup by fully qualified `app.key` identifier.
    pub fn lookup(&self, qualified_key: &str) -> Result<&Registration> {
        self.flat_index
            .get(qualified_key)
            .ok_or_else(|| Error::not_found(qualified_key))
    }

    /// Iterates registrations in mount order, optionally filtered by kind
    /// and owning app.
    ///
    /// Registrations of an earlier-mounted app always precede those of a
    /// later one. The iterator is lazy and restartable.
    pub fn list_all<'a>(
        &'a self,
        kind: Option<RegistrationKind>,
        app_name: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Registration> + 'a {
        self.flat_index.values().filter(move |r| {
            kind.is_none_or(|k| r.kind() == k)
                && app_name.is_none_or(|a| r.source_app() == a)
        })
    }

    /// Mounted app names in mount order.
    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// The per-app registry mounted under `app_name`, if present.
    pub fn namespace(&self, app_name: &str) -> Option<&AppRegistry> {
        self.namespaces.get(app_name)
    }

    /// Qualified keys in mount order.
    pub fn flat_keys(&self) -> impl Iterator<Item = &str> {
        self.flat_index.keys().map(String::as_str)
    }

    /// Number of entries in the flat index.
    pub fn len(&self) -> usize {
        self.flat_index.len()
    }

    /// Whether nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.flat_index.is_empty()
    }
}
