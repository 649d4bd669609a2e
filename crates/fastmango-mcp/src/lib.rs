//! FastMango MCP — tool descriptors and dispatch.
//!
//! Apps expose AI-agent tools as [`ToolSpec`] descriptors (name,
//! description, JSON input schema, async handler); [`tool_unit`] packages
//! them as a registration unit, and [`ToolDispatcher`] lists and invokes
//! tools across a composed registry.
//!
//! The MCP wire protocol itself is an external collaborator: descriptors
//! here carry everything a protocol adapter needs (schemas and handlers)
//! without binding to a transport.
//!
//! # Example
//!
//! ```rust,ignore
//! let search = ToolSpec::new("search", |args| async move {
//!     let query = args["query"].as_str().unwrap_or_default().to_string();
//!     Ok(json!({ "results": [], "query": query }))
//! })
//! .with_description("Full-text search over blog posts");
//!
//! let apps = InstalledApps::new().with_app("blog", tool_unit([search]));
//! ```

pub mod dispatch;
pub mod error;
pub mod tools;

// Re-exports
pub use dispatch::ToolDispatcher;
pub use error::{Error, Result};
pub use tools::{ToolFuture, ToolSpec, tool_unit};
