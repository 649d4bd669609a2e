//! FastMango Core — shared types, errors, and settings.
//!
//! This crate provides the foundational types used across all FastMango
//! crates. It has no internal FastMango dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`registration`]: Registration entries and payload handles
//! - [`settings`]: Installed-app configuration and validation

pub mod error;
pub mod registration;
pub mod settings;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use registration::{Payload, Registration, RegistrationKind, invalid_identifier_reason};
pub use settings::{ConflictPolicy, Settings, validate_app_list};
