//! Error types for the FastMango composition engine.

use crate::registration::RegistrationKind;

/// Errors that can occur during app discovery, composition, and lookup.
///
/// Composition-time errors (`Configuration`, `InvalidRegistrationUnit`,
/// `DuplicateKey`, `MountConflict`) are fail-fast: they occur before the
/// application facade becomes available, and there is no partially ready
/// state. `NotFound` is per-call and recoverable by the caller.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed installed-app list (duplicate or empty entries).
    #[error("configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration.
        message: String,
    },

    /// An app's registration unit does not match the expected contract.
    #[error("invalid registration unit in app '{app}': {reason}")]
    InvalidRegistrationUnit {
        /// The app whose unit is malformed.
        app: String,
        /// What the unit did wrong.
        reason: String,
    },

    /// An app registered the same key twice for one kind.
    #[error("duplicate {kind} key '{key}' in app '{app}'")]
    DuplicateKey {
        /// The offending app.
        app: String,
        /// The key registered twice.
        key: String,
        /// The kind under which the key collided.
        kind: RegistrationKind,
    },

    /// Two registrations collided while mounting under the strict policy.
    #[error("mount conflict on key '{key}': registered by app '{first_app}' and app '{second_app}'")]
    MountConflict {
        /// The colliding key, verbatim.
        key: String,
        /// The app mounted first.
        first_app: String,
        /// The app whose mount collided.
        second_app: String,
    },

    /// Lookup of an absent key.
    #[error("registration not found: {key}")]
    NotFound {
        /// The key that was requested.
        key: String,
    },

    /// I/O error while reading a settings file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid TOML.
    #[error("invalid settings file: {0}")]
    Settings(#[from] toml::de::Error),
}

/// Convenience `Result` type alias for FastMango operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Creates a new invalid-registration-unit error.
    pub fn invalid_unit<A, R>(app: A, reason: R) -> Self
    where
        A: Into<String>,
        R: Into<String>,
    {
        Error::InvalidRegistrationUnit {
            app: app.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new not-found error.
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Error::NotFound { key: key.into() }
    }

    /// Returns whether this error is recoverable by the caller.
    ///
    /// Only lookup misses are recoverable; everything else should abort
    /// application startup.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
