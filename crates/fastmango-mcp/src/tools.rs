//! Tool descriptors.

use crate::error::Result;
use fastmango_core::RegistrationKind;
use fastmango_registry::Registrations;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by a tool handler.
pub type ToolFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

type ToolHandler = Arc<dyn Fn(Value) -> ToolFuture + Send + Sync>;

/// Descriptor for one MCP tool: metadata plus its async handler.
#[derive(Clone)]
pub struct ToolSpec {
    name: String,
    description: String,
    input_schema: Value,
    handler: ToolHandler,
}

impl ToolSpec {
    /// Creates a tool with a default description and an empty-object
    /// input schema.
    pub fn new<F, Fut>(name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        let name = name.into();
        Self {
            description: format!("Tool: {name}"),
            name,
            input_schema: Value::Object(serde_json::Map::new()),
            handler: Arc::new(move |args| Box::pin(handler(args))),
        }
    }

    /// Replaces the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replaces the JSON input schema.
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Tool name; also the registration key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// JSON schema for the tool's arguments.
    pub fn input_schema(&self) -> &Value {
        &self.input_schema
    }

    /// Invokes the handler with `args`.
    pub fn invoke(&self, args: Value) -> ToolFuture {
        (self.handler)(args)
    }
}

impl fmt::Debug for ToolSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSpec")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Builds a registration unit exposing `tools`, each keyed by its name.
pub fn tool_unit<I>(tools: I) -> Registrations
where
    I: IntoIterator<Item = ToolSpec>,
{
    let mut unit = Registrations::new();
    for tool in tools {
        let key = tool.name().to_string();
        unit = unit.with(key, RegistrationKind::ToolServer, Arc::new(tool));
    }
    unit
}

// ============================================================================
// Tests
// ============================================================================
