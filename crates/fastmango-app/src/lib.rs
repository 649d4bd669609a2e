//! FastMango App — the facade over discovery and composition.
//!
//! [`MangoApp`] is the single object hosting code interacts with: it runs
//! the scan-and-mount pipeline at startup (fail-fast; there is no
//! partially ready state), then serves lock-free reads from an immutable
//! composite snapshot. [`MangoApp::reload`] rebuilds the composite from
//! the current settings and publishes it with a single atomic pointer
//! swap; readers in flight keep their old snapshot.
//!
//! ```text
//! settings ──► scan ──► compose ──► Composition ──► ArcSwap publish
//!                                        ▲               │
//!                                     reload          snapshot()
//! ```

pub mod app;

// Re-exports
pub use app::MangoApp;
pub use fastmango_mount::{Composition, Resolution};
