//! The admin site: registration helper and read-side access.

use crate::model::{ModelAdmin, ModelDescriptor};
use fastmango_core::{RegistrationKind, Result};
use fastmango_mount::CompositeRegistry;
use fastmango_registry::Registrations;
use std::sync::Arc;

/// Builds a registration unit exposing admin views for `models`.
///
/// Each model becomes one `ModelAdmin` registration keyed by the model
/// name; models flagged `admin_exclude` are left out, mirroring the
/// auto-registration convention of opt-out rather than opt-in.
pub fn admin_unit<I>(models: I) -> Registrations
where
    I: IntoIterator<Item = ModelDescriptor>,
{
    let mut unit = Registrations::new();
    for model in models {
        if model.admin_exclude {
            continue;
        }
        let key = model.name.clone();
        unit = unit.with(
            key,
            RegistrationKind::ModelAdmin,
            Arc::new(ModelAdmin::for_model(model)),
        );
    }
    unit
}

/// Read-side accessor for admin views over a composed registry.
#[derive(Clone, Debug)]
pub struct AdminSite {
    base_url: String,
}

impl AdminSite {
    /// Creates a site mounted at `/admin`.
    pub fn new() -> Self {
        Self {
            base_url: "/admin".to_string(),
        }
    }

    /// Overrides the mount URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The URL prefix the admin is served under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All admin views in mount order, paired with their owning app.
    pub fn views(&self, composite: &CompositeRegistry) -> Vec<(String, Arc<ModelAdmin>)> {
        composite
            .list_all(Some(RegistrationKind::ModelAdmin), None)
            .filter_map(|reg| {
                reg.downcast_payload::<ModelAdmin>()
                    .map(|view| (reg.source_app().to_string(), view))
            })
            .collect()
    }

    /// Resolves one admin view by fully qualified key.
    pub fn view(&self, composite: &CompositeRegistry, qualified_key: &str) -> Result<Arc<ModelAdmin>> {
        let reg = composite.lookup(qualified_key)?;
        reg.downcast_payload::<ModelAdmin>()
            .ok_or_else(|| fastmango_core::Error::not_found(qualified_key))
    }

    /// URL a view is served under: `{base_url}/{app}/{model}` lowercased.
    pub fn view_url(&self, app: &str, model_name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            app.to_lowercase(),
            model_name.to_lowercase()
        )
    }
}

impl Default for AdminSite {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
