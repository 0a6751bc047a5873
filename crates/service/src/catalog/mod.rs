pub mod domain;
pub mod repository;
pub mod service;
pub mod spec_blob;

pub use domain::{ImagePatch, NewProduct, Product, ProductFilter, ProductPatch, SpecMap};
pub use repository::{CatalogRepository, MemoryCatalogRepository, SeaOrmCatalogRepository};
pub use service::CatalogService;

/// Canonical category set the storefront enumerates.
pub use models::product::CATEGORIES;
