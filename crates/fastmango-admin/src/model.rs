//! Model descriptors and derived admin views.

use serde::{Deserialize, Serialize};

/// Field data types the admin understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free-form text.
    Text,
    /// Integer column.
    Integer,
    /// Floating-point column.
    Float,
    /// Boolean column.
    Boolean,
    /// Timestamp column.
    DateTime,
    /// Arbitrary JSON column.
    Json,
}

/// One column of a model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Column name.
    pub name: String,
    /// Column data type.
    pub data_type: FieldType,
    /// Whether this column references another model.
    #[serde(default)]
    pub foreign_key: bool,
}

/// Description of a database model an app exposes to the admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model name, used as the registration key.
    pub name: String,
    /// Backing table name.
    pub table: String,
    /// Columns in declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Opt-out flag: excluded models get no admin view.
    #[serde(default)]
    pub admin_exclude: bool,
}

impl ModelDescriptor {
    /// Creates a descriptor with no fields.
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            fields: Vec::new(),
            admin_exclude: false,
        }
    }

    /// Appends a plain field.
    pub fn field(mut self, name: impl Into<String>, data_type: FieldType) -> Self {
        self.fields.push(FieldDescriptor {
            name: name.into(),
            data_type,
            foreign_key: false,
        });
        self
    }

    /// Marks the most recently added field as a foreign key.
    pub fn foreign_key(mut self) -> Self {
        if let Some(last) = self.fields.last_mut() {
            last.foreign_key = true;
        }
        self
    }

    /// Excludes this model from admin registration.
    pub fn exclude_from_admin(mut self) -> Self {
        self.admin_exclude = true;
        self
    }
}

/// An admin view derived from a model descriptor.
///
/// Derivation follows the default-admin conventions: sensitive and
/// foreign-key columns are hidden from listings, text-like fields become
/// searchable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAdmin {
    /// The model this view presents.
    pub model: ModelDescriptor,
    /// Columns shown in list views.
    pub list_display: Vec<String>,
    /// Fields offered for searching.
    pub search_fields: Vec<String>,
}

impl ModelAdmin {
    /// Derives the default admin view for `model`.
    ///
    /// List columns skip password-like fields and foreign keys, falling
    /// back to `["id"]` if nothing remains. Search fields are the text
    /// columns plus anything named like an email, name, or username.
    pub fn for_model(model: ModelDescriptor) -> Self {
        let mut list_display: Vec<String> = model
            .fields
            .iter()
            .filter(|f| !f.name.to_lowercase().contains("password") && !f.foreign_key)
            .map(|f| f.name.clone())
            .collect();
        if list_display.is_empty() {
            list_display.push("id".to_string());
        }

        let search_fields: Vec<String> = model
            .fields
            .iter()
            .filter(|f| {
                let name = f.name.to_lowercase();
                if name.contains("password") {
                    return false;
                }
                f.data_type == FieldType::Text
                    || name.contains("email")
                    || name.contains("name")
                    || name.contains("username")
            })
            .map(|f| f.name.clone())
            .collect();

        Self {
            model,
            list_display,
            search_fields,
        }
    }

    /// Plural display name for listings.
    pub fn plural_name(&self) -> String {
        format!("{}s", self.model.name)
    }
}
