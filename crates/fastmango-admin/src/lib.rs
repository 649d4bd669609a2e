//! FastMango Admin — automatic admin views over model descriptors.
//!
//! Apps describe their database models with [`ModelDescriptor`]; a default
//! [`ModelAdmin`] view is derived per model with sensible column and
//! search-field selection, and [`admin_unit`] packages the views as a
//! registration unit ready for discovery. [`AdminSite`] is the read side:
//! it lists and resolves admin views from a composed registry.
//!
//! # Example
//!
//! ```rust,ignore
//! let post = ModelDescriptor::new("Post", "blog_post")
//!     .field("id", FieldType::Integer)
//!     .field("title", FieldType::Text)
//!     .field("author_id", FieldType::Integer).foreign_key();
//!
//! let apps = InstalledApps::new().with_app("blog", admin_unit([post]));
//! ```

pub mod model;
pub mod site;

// Re-exports
pub use model::{FieldDescriptor, FieldType, ModelAdmin, ModelDescriptor};
pub use site::{AdminSite, admin_unit};
