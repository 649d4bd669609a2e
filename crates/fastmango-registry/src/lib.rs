//! FastMango Registry — per-app registries and discovery.
//!
//! An app contributes components through a [`RegistrationUnit`]: either an
//! explicit implementation that calls [`AppRegistry::register`] at scan
//! time, or a declarative [`Registrations`] list. The [`scan`] function
//! walks the configured app list in order, runs each app's unit exactly
//! once against a fresh [`AppRegistry`], and returns the ordered results
//! ready for mounting.
//!
//! # Example
//!
//! ```rust,ignore
//! let apps = InstalledApps::new()
//!     .with_app("blog", Registrations::new().with(
//!         "Post",
//!         RegistrationKind::ModelAdmin,
//!         Arc::new(post_admin),
//!     ));
//!
//! let scanned = scan(&settings.installed_apps, &apps)?;
//! ```

pub mod app_registry;
pub mod scanner;
pub mod unit;

// Re-exports
pub use app_registry::AppRegistry;
pub use scanner::{AppSource, InstalledApps, scan};
pub use unit::{RegistrationUnit, Registrations};
