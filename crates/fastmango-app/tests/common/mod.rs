//! Common test utilities for the MangoApp integration tests.

use fastmango_admin::{FieldType, ModelDescriptor, admin_unit};
use fastmango_core::{Payload, RegistrationKind, Settings};
use fastmango_mcp::{ToolSpec, tool_unit};
use fastmango_registry::{AppSource, InstalledApps, Registrations};
use serde_json::json;
use std::sync::Arc;

/// Shared string payload for registrations that don't need a real
/// descriptor.
pub fn payload(label: &str) -> Payload {
    Arc::new(label.to_string())
}

/// A blog app exposing one admin model.
pub fn blog_unit() -> Registrations {
    admin_unit([ModelDescriptor::new("Post", "blog_post")
        .field("id", FieldType::Integer)
        .field("title", FieldType::Text)])
}

/// A shop app exposing one admin model.
pub fn shop_unit() -> Registrations {
    admin_unit([ModelDescriptor::new("Order", "shop_order")
        .field("id", FieldType::Integer)
        .field("customer_email", FieldType::Text)])
}

/// An assistant app exposing one echo tool.
pub fn assistant_unit() -> Registrations {
    tool_unit([ToolSpec::new("echo", |args| async move { Ok(args) })
        .with_description("Echoes its arguments")])
}

/// The standard three-app source used across tests.
pub fn standard_source() -> Arc<dyn AppSource> {
    Arc::new(
        InstalledApps::new()
            .with_app("blog", blog_unit())
            .with_app("shop", shop_unit())
            .with_app("assistant", assistant_unit()),
    )
}

/// Settings for the standard three apps, strict policy.
pub fn standard_settings() -> Settings {
    Settings::new(["blog", "shop", "assistant"])
}

/// A source where `blog` and `blog2` both register the model key `Post`.
pub fn colliding_source() -> Arc<dyn AppSource> {
    Arc::new(
        InstalledApps::new()
            .with_app(
                "blog",
                Registrations::new().with("Post", RegistrationKind::ModelAdmin, payload("first")),
            )
            .with_app(
                "blog2",
                Registrations::new().with("Post", RegistrationKind::ModelAdmin, payload("second")),
            ),
    )
}

/// A source whose `tools` app violates the registration-unit contract.
pub fn broken_source() -> Arc<dyn AppSource> {
    Arc::new(
        InstalledApps::new()
            .with_app("blog", blog_unit())
            .with_app(
                "tools",
                Registrations::new().with("", RegistrationKind::ToolServer, payload("broken")),
            ),
    )
}

/// Convenience: a tool spec returning a canned JSON value.
pub fn canned_tool(name: &str, value: serde_json::Value) -> ToolSpec {
    let canned = value.clone();
    ToolSpec::new(name, move |_| {
        let canned = canned.clone();
        async move { Ok(canned) }
    })
    .with_input_schema(json!({ "type": "object" }))
}
