//! Registration entries contributed by apps.
//!
//! A [`Registration`] is one named `(key, payload, kind)` triple contributed
//! by an app. Payloads are opaque shared handles; consumers that know the
//! concrete descriptor type recover it with
//! [`Registration::downcast_payload`].

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque shared handle to a registered component descriptor.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// Kind of component a registration contributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationKind {
    /// An admin view over a database model.
    ModelAdmin,
    /// An MCP tool exposed to AI agents.
    ToolServer,
}

impl fmt::Display for RegistrationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelAdmin => write!(f, "model_admin"),
            Self::ToolServer => write!(f, "tool_server"),
        }
    }
}

/// One named component contributed by an app.
///
/// Keys are unique per (`kind`, `source_app`) pair at registration time;
/// global uniqueness is enforced when the owning app registry is mounted
/// under its namespace.
#[derive(Clone)]
pub struct Registration {
    key: String,
    kind: RegistrationKind,
    payload: Payload,
    source_app: String,
}

impl Registration {
    /// Creates a registration owned by `source_app`.
    pub fn new(
        key: impl Into<String>,
        kind: RegistrationKind,
        payload: Payload,
        source_app: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            kind,
            payload,
            source_app: source_app.into(),
        }
    }

    /// The bare key this component was registered under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The component kind.
    pub fn kind(&self) -> RegistrationKind {
        self.kind
    }

    /// The app that contributed this registration.
    pub fn source_app(&self) -> &str {
        &self.source_app
    }

    /// The opaque payload handle.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The globally unique `app.key` identifier used after mounting.
    pub fn qualified_key(&self) -> String {
        format!("{}.{}", self.source_app, self.key)
    }

    /// Recovers the concrete descriptor type, if it matches.
    pub fn downcast_payload<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.payload).downcast::<T>().ok()
    }

    /// Whether two registrations share the same payload handle.
    pub fn payload_ptr_eq(&self, other: &Registration) -> bool {
        Arc::ptr_eq(&self.payload, &other.payload)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("key", &self.key)
            .field("kind", &self.kind)
            .field("source_app", &self.source_app)
            .finish_non_exhaustive()
    }
}

/// Returns why `s` cannot be used as a registration key or app name,
/// or `None` if it is acceptable.
///
/// Identifiers must be non-empty and must not contain `.` (it is the
/// qualified-key separator) or whitespace.
pub fn invalid_identifier_reason(s: &str) -> Option<&'static str> {
    if s.is_empty() {
        Some("is empty")
    } else if s.contains('.') {
        Some("contains '.'")
    } else if s.chars().any(char::is_whitespace) {
        Some("contains whitespace")
    } else {
        None
    }
}
