//! Tool listing and dispatch over a composed registry.

use crate::tools::{ToolFuture, ToolSpec};
use fastmango_core::RegistrationKind;
use fastmango_mount::CompositeRegistry;
use serde_json::Value;
use std::sync::Arc;

/// Dispatches tool calls against a composite snapshot.
///
/// Callers hold one snapshot for the duration of a logical operation, so
/// listing and dispatch stay mutually consistent even across reloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToolDispatcher;

impl ToolDispatcher {
    /// Creates a dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// All tools in mount order.
    pub fn list_tools(&self, composite: &CompositeRegistry) -> Vec<Arc<ToolSpec>> {
        composite
            .list_all(Some(RegistrationKind::ToolServer), None)
            .filter_map(|reg| reg.downcast_payload::<ToolSpec>())
            .collect()
    }

    /// Dispatches a tool call by name.
    ///
    /// Accepts either the bare tool name (the form MCP clients use) or a
    /// fully qualified `app.name` key. Returns `None` if no mounted tool
    /// matches, leaving the not-found response to the protocol adapter.
    pub fn call(&self, composite: &CompositeRegistry, name: &str, args: Value) -> Option<ToolFuture> {
        let tool = self.resolve(composite, name)?;
        tracing::debug!(tool = %tool.name(), "dispatching tool call");
        Some(tool.invoke(args))
    }

    /// Whether a tool with this name is mounted.
    pub fn has_tool(&self, composite: &CompositeRegistry, name: &str) -> bool {
        self.resolve(composite, name).is_some()
    }

    fn resolve(&self, composite: &CompositeRegistry, name: &str) -> Option<Arc<ToolSpec>> {
        if name.contains('.') {
            return composite
                .lookup(name)
                .ok()
                .and_then(|reg| reg.downcast_payload::<ToolSpec>());
        }
        composite
            .list_all(Some(RegistrationKind::ToolServer), None)
            .find(|reg| reg.key() == name)
            .and_then(|reg| reg.downcast_payload::<ToolSpec>())
    }
}

// ============================================================================
// Tests
// ============================================================================
