//! FastMango app composition engine — umbrella crate.
//!
//! Re-exports all FastMango components for convenience. Use feature
//! flags to trim the surface: `admin` and `mcp` are on by default.

pub use fastmango_core as core;
pub use fastmango_mount as mount;
pub use fastmango_registry as registry;

pub use fastmango_app as app;

#[cfg(feature = "admin")]
pub use fastmango_admin as admin;

#[cfg(feature = "mcp")]
pub use fastmango_mcp as mcp;

// The facade and the types most callers touch, at the crate root.
pub use fastmango_app::MangoApp;
pub use fastmango_core::{
    ConflictPolicy, Error, Registration, RegistrationKind, Result, Settings,
};
