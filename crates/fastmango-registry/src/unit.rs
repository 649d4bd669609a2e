//! The registration unit contract.
//!
//! Each app may expose zero or one registration unit. The unit is invoked
//! once per scan with a fresh [`AppRegistry`] and makes its `register`
//! calls there, the explicit-call equivalent of decorator-style
//! registration in dynamic frameworks.

use crate::app_registry::AppRegistry;
use fastmango_core::{Payload, RegistrationKind, Result};
use std::sync::Arc;

/// An app's registration unit.
///
/// Implementations must be deterministic: running the unit twice against
/// fresh registries must produce structurally equal contents, so that
/// re-scans are idempotent.
pub trait RegistrationUnit: Send + Sync {
    /// Registers this app's components into `registry`.
    ///
    /// Any error aborts the whole scan; a unit is never partially
    /// registered.
    fn register(&self, registry: &mut AppRegistry) -> Result<()>;
}

impl<F> RegistrationUnit for F
where
    F: Fn(&mut AppRegistry) -> Result<()> + Send + Sync,
{
    fn register(&self, registry: &mut AppRegistry) -> Result<()> {
        self(registry)
    }
}

/// Declarative registration unit: a list of `(key, kind, payload)` entries
/// applied in order.
#[derive(Default)]
pub struct Registrations {
    entries: Vec<(String, RegistrationKind, Payload)>,
}

impl Registrations {
    /// Creates an empty registration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn with(
        mut self,
        key: impl Into<String>,
        kind: RegistrationKind,
        payload: Payload,
    ) -> Self {
        self.entries.push((key.into(), kind, payload));
        self
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list declares nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl RegistrationUnit for Registrations {
    fn register(&self, registry: &mut AppRegistry) -> Result<()> {
        for (key, kind, payload) in &self.entries {
            registry.register(key.clone(), Arc::clone(payload), *kind)?;
        }
        Ok(())
    }
}
