//! FastMango Mount — merging per-app registries into one composite.
//!
//! [`compose`] takes the ordered registries produced by discovery and
//! mounts each under its app-name prefix, producing an immutable
//! [`CompositeRegistry`] plus an audit log of every conflict resolution.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     fastmango-mount                      │
//! ├──────────────────────────────────────────────────────────┤
//! │  compose — mount registries in order, apply policy       │
//! │  Resolution — audit record per resolved collision        │
//! ├──────────────────────────────────────────────────────────┤
//! │  CompositeRegistry — namespaces + flat qualified index   │
//! │  lookup / list_all — O(1) access, ordered iteration      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Under the default strict policy any collision aborts composition and no
//! partial root is ever exposed.

pub mod composite;
pub mod mounter;

#[cfg(test)]
mod proptests;

// Re-exports
pub use composite::CompositeRegistry;
pub use mounter::{Composition, Resolution, compose};
