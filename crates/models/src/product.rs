use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// The categories the catalog pages enumerate. Matching on read is
/// case-insensitive; values are stored exactly as provided on write.
pub const CATEGORIES: [&str; 7] =
    ["Servers", "Laptops", "Workstations", "Networking", "CCTV", "Storage", "Power"];

pub const PLACEHOLDER_IMAGE: &str = "/products/placeholder.jpg";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub category: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    /// Serialized spec mapping; decoded by the service layer on every read.
    #[sea_orm(column_type = "Text")]
    pub specs_json: String,
    /// Serialized image URL list; first entry is the primary image.
    #[sea_orm(column_type = "Text")]
    pub images_json: String,
    pub rental_price: Option<String>,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Stock status shown in the admin product table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    OutOfStock,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::LowStock => "Low Stock",
            Status::OutOfStock => "Out of Stock",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

pub fn parse_status(s: &str) -> Result<Status, ModelError> {
    match s {
        "Active" => Ok(Status::Active),
        "Low Stock" => Ok(Status::LowStock),
        "Out of Stock" => Ok(Status::OutOfStock),
        other => Err(ModelError::Validation(format!("invalid product status: {other}"))),
    }
}

pub fn validate_title(title: &str) -> Result<(), ModelError> {
    if title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ModelError> {
    if category.trim().is_empty() {
        return Err(ModelError::Validation("category required".into()));
    }
    Ok(())
}

/// Derive a URL-safe slug from a title: lowercase, non-alphanumeric runs
/// collapsed to single hyphens, no leading/trailing hyphen.
pub fn slugify(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut prev_dash = false;
    for c in title.chars().flat_map(|c| c.to_lowercase()) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_dash = false;
        } else if !prev_dash && !out.is_empty() {
            out.push('-');
            prev_dash = true;
        }
    }
    out.trim_matches('-').to_string()
}
