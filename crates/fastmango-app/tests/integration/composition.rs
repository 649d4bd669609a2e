//! End-to-end composition scenarios.

use crate::common;
use fastmango_admin::{AdminSite, ModelAdmin};
use fastmango_app::MangoApp;
use fastmango_core::{ConflictPolicy, Error, Settings};
use fastmango_mcp::ToolDispatcher;
use serde_json::json;

#[test]
fn two_disjoint_apps_compose_exactly() {
    let app = MangoApp::build(
        Settings::new(["blog", "shop"]),
        common::standard_source(),
    )
    .unwrap();

    let snapshot = app.snapshot();
    let keys: Vec<_> = snapshot.registry.flat_keys().collect();
    assert_eq!(keys, vec!["blog.Post", "shop.Order"]);
}

#[test]
fn colliding_apps_fail_strict_composition() {
    let err = MangoApp::build(
        Settings::new(["blog", "blog2"]),
        common::colliding_source(),
    )
    .unwrap_err();

    let Error::MountConflict {
        key,
        first_app,
        second_app,
    } = err
    else {
        unreachable!("expected MountConflict, got {err}");
    };
    assert_eq!(key, "Post");
    assert_eq!(first_app, "blog");
    assert_eq!(second_app, "blog2");
}

#[test]
fn duplicate_app_list_fails_before_scanning() {
    let err = MangoApp::build(Settings::new(["a", "a"]), common::standard_source()).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn malformed_unit_aborts_the_whole_build() {
    // "tools" is scanned after "blog", but the abort means no facade and
    // therefore no partial output from any app.
    let err = MangoApp::build(
        Settings::new(["blog", "tools"]),
        common::broken_source(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidRegistrationUnit { .. }));
    assert!(err.to_string().contains("tools"));
}

#[test]
fn lookup_returns_registered_payload() {
    let app = MangoApp::build(common::standard_settings(), common::standard_source()).unwrap();

    let reg = app.lookup("blog.Post").unwrap();
    let view = reg.downcast_payload::<ModelAdmin>().unwrap();
    assert_eq!(view.model.table, "blog_post");

    let err = app.lookup("blog.Missing").unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn admin_and_tools_compose_side_by_side() {
    let app = MangoApp::build(common::standard_settings(), common::standard_source()).unwrap();
    let snapshot = app.snapshot();

    let site = AdminSite::new();
    let views = site.views(&snapshot.registry);
    let models: Vec<_> = views.iter().map(|(_, v)| v.model.name.as_str()).collect();
    assert_eq!(models, vec!["Post", "Order"]);

    let dispatcher = ToolDispatcher::new();
    let tools = dispatcher.list_tools(&snapshot.registry);
    assert_eq!(tools.len(), 1);
    assert_eq!(tools[0].name(), "echo");
}

#[tokio::test(flavor = "current_thread")]
async fn tool_dispatch_through_the_facade() {
    let app = MangoApp::build(common::standard_settings(), common::standard_source()).unwrap();
    let snapshot = app.snapshot();

    let result = ToolDispatcher::new()
        .call(&snapshot.registry, "echo", json!({ "ping": true }))
        .unwrap()
        .await
        .unwrap();
    assert_eq!(result, json!({ "ping": true }));

    assert!(
        ToolDispatcher::new()
            .call(&snapshot.registry, "missing", json!({}))
            .is_none()
    );
}

#[test]
fn override_policy_is_audited_end_to_end() {
    let settings =
        Settings::new(["blog", "blog2"]).with_policy(ConflictPolicy::OverrideLatest);
    let app = MangoApp::build(settings, common::colliding_source()).unwrap();

    assert!(app.lookup("blog.Post").is_err());
    let winner = app.lookup("blog2.Post").unwrap();
    assert_eq!(winner.source_app(), "blog2");
    assert_eq!(app.audit().len(), 1);
}

#[test]
fn settings_file_drives_composition() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
installed_apps = ["shop", "blog"]
conflict_policy = "strict"
"#
    )
    .unwrap();

    let settings = Settings::load(file.path()).unwrap();
    let app = MangoApp::build(settings, common::standard_source()).unwrap();

    // Mount order follows the file's app order.
    let keys: Vec<_> = app
        .list_all(None, None)
        .iter()
        .map(|r| r.qualified_key())
        .collect();
    assert_eq!(keys, vec!["shop.Order", "blog.Post"]);
}
