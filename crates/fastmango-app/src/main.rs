//! FastMango demo service.
//!
//! Wires two demo apps (a blog with admin models, an assistant with MCP
//! tools) through discovery and composition, then exercises the facade:
//! listing the flat index, resolving an admin view, and dispatching a
//! tool call.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use fastmango_admin::{AdminSite, FieldType, ModelDescriptor, admin_unit};
use fastmango_app::MangoApp;
use fastmango_core::Settings;
use fastmango_mcp::{ToolDispatcher, ToolSpec, tool_unit};
use fastmango_registry::{AppSource, InstalledApps};
use serde_json::json;
use std::sync::Arc;

fn demo_apps() -> InstalledApps {
    let blog_models = vec![
        ModelDescriptor::new("Post", "blog_post")
            .field("id", FieldType::Integer)
            .field("title", FieldType::Text)
            .field("body", FieldType::Text)
            .field("author_id", FieldType::Integer)
            .foreign_key(),
        ModelDescriptor::new("Comment", "blog_comment")
            .field("id", FieldType::Integer)
            .field("body", FieldType::Text),
    ];

    let assistant_tools = vec![
        ToolSpec::new("search_posts", |args| async move {
            let query = args["query"].as_str().unwrap_or_default().to_string();
            Ok(json!({ "query": query, "results": [] }))
        })
        .with_description("Full-text search over blog posts")
        .with_input_schema(json!({
            "type": "object",
            "properties": { "query": { "type": "string" } },
            "required": ["query"]
        })),
        ToolSpec::new("post_count", |_| async { Ok(json!({ "count": 0 })) })
            .with_description("Number of published posts"),
    ];

    InstalledApps::new()
        .with_app("blog", admin_unit(blog_models))
        .with_app("assistant", tool_unit(assistant_tools))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fastmango=debug".into()),
        )
        .init();

    // Settings come from FASTMANGO_SETTINGS if set, otherwise the demo list.
    let settings = match std::env::var("FASTMANGO_SETTINGS") {
        Ok(path) => {
            tracing::info!(path = %path, "loading settings");
            Settings::load(path)?
        }
        Err(_) => Settings::new(["blog", "assistant"]),
    };

    let source: Arc<dyn AppSource> = Arc::new(demo_apps());
    let app = MangoApp::build(settings, source)?;

    let snapshot = app.snapshot();
    for key in snapshot.registry.flat_keys() {
        tracing::info!(key = %key, "mounted");
    }

    let site = AdminSite::new();
    for (owner, view) in site.views(&snapshot.registry) {
        tracing::info!(
            url = %site.view_url(&owner, &view.model.name),
            columns = ?view.list_display,
            "admin view"
        );
    }

    let dispatcher = ToolDispatcher::new();
    if let Some(call) = dispatcher.call(
        &snapshot.registry,
        "search_posts",
        json!({ "query": "mango" }),
    ) {
        let result = call.await?;
        tracing::info!(result = %result, "tool call succeeded");
    }

    Ok(())
}
