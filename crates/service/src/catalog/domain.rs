use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use models::product::Status;

/// Insertion-ordered spec-name → spec-value mapping.
pub type SpecMap = IndexMap<String, String>;

/// A catalog entry as the rest of the system sees it: the spec blob and the
/// image list are already decoded. Wire format is camelCase to match the
/// storefront and admin clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub specs: SpecMap,
    pub images: Vec<String>,
    pub rental_price: Option<String>,
    pub is_new: bool,
    pub is_featured: bool,
    pub status: Status,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// First image in the list; the storefront card and gallery lead with it.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or(models::product::PLACEHOLDER_IMAGE)
    }
}

/// Create input. Every field except title/category is optional and
/// defaulted by the service; `imageUrl` is accepted as an alternative to a
/// full `images` array, mirroring what the admin form posts.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProduct {
    pub title: String,
    pub category: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub specs: Option<SpecMap>,
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub rental_price: Option<String>,
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<Status>,
}

/// Partial update: only supplied fields are applied. `specs` replaces the
/// prior mapping wholesale (never a deep merge); the image fields resolve
/// through [`ImagePatch`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub status: Option<Status>,
    pub rental_price: Option<String>,
    pub is_featured: Option<bool>,
    pub is_new: Option<bool>,
    pub specs: Option<SpecMap>,
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
}

/// The two shapes an image update may arrive in, resolved to one tagged
/// value before it reaches the entity.
#[derive(Clone, Debug, PartialEq)]
pub enum ImagePatch {
    /// Replace the whole list.
    Replace(Vec<String>),
    /// Replace only the primary (first) image, keeping the rest.
    SetPrimary(String),
}

impl ProductPatch {
    /// A non-empty `images` array wins over `imageUrl`; an empty array is
    /// ignored, matching the admin client's submission quirks.
    pub fn image_patch(&self) -> Option<ImagePatch> {
        if let Some(images) = &self.images {
            if !images.is_empty() {
                return Some(ImagePatch::Replace(images.clone()));
            }
        }
        self.image_url.clone().map(ImagePatch::SetPrimary)
    }
}

/// Read filter for list queries. Category matching is case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub featured_only: bool,
}
