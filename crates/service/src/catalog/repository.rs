use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use tokio::sync::RwLock;
use uuid::Uuid;

use models::product;

use crate::errors::ServiceError;

use super::domain::{Product, ProductFilter};
use super::spec_blob;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn insert(&self, product: Product) -> Result<(), ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ServiceError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ServiceError>;
    /// Matching rows ordered newest-first.
    async fn find_by_filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError>;
    /// Persist the full row for an existing id; `false` when the id is gone.
    async fn save(&self, product: Product) -> Result<bool, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// In-memory backing: front-insert vector with linear scans, the same
/// semantics and performance envelope as the original mock store.
#[derive(Default)]
pub struct MemoryCatalogRepository {
    inner: RwLock<Vec<Product>>,
}

impl MemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogRepository for MemoryCatalogRepository {
    async fn insert(&self, product: Product) -> Result<(), ServiceError> {
        let mut items = self.inner.write().await;
        if items.iter().any(|p| p.slug == product.slug) {
            return Err(ServiceError::Validation(format!("slug already in use: {}", product.slug)));
        }
        items.insert(0, product);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ServiceError> {
        Ok(self.inner.read().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ServiceError> {
        Ok(self.inner.read().await.iter().find(|p| p.slug == slug).cloned())
    }

    async fn find_by_filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        let items = self.inner.read().await;
        let mut out: Vec<Product> = items
            .iter()
            .filter(|p| {
                filter
                    .category
                    .as_deref()
                    .map(|c| p.category.eq_ignore_ascii_case(c))
                    .unwrap_or(true)
                    && (!filter.featured_only || p.is_featured)
            })
            .cloned()
            .collect();
        // Stable sort: ties keep front-insert (newest submitted first) order.
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn save(&self, product: Product) -> Result<bool, ServiceError> {
        let mut items = self.inner.write().await;
        match items.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|p| p.id != id);
        Ok(items.len() < before)
    }
}

/// SeaORM-backed repository; specs and image lists are stored as JSON text
/// blobs and decoded on every read path.
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: product::Model) -> Result<Product, ServiceError> {
    Ok(Product {
        id: m.id,
        title: m.title,
        slug: m.slug,
        category: m.category,
        description: m.description,
        short_description: m.short_description,
        specs: spec_blob::decode(&m.specs_json)?,
        images: spec_blob::decode_images(&m.images_json)?,
        rental_price: m.rental_price,
        is_new: m.is_new,
        is_featured: m.is_featured,
        status: product::parse_status(&m.status)?,
        created_at: m.created_at.with_timezone(&Utc),
    })
}

fn to_row(p: &Product) -> Result<product::ActiveModel, ServiceError> {
    Ok(product::ActiveModel {
        id: Set(p.id),
        title: Set(p.title.clone()),
        slug: Set(p.slug.clone()),
        category: Set(p.category.clone()),
        description: Set(p.description.clone()),
        short_description: Set(p.short_description.clone()),
        specs_json: Set(spec_blob::encode(&p.specs)?),
        images_json: Set(spec_blob::encode_images(&p.images)?),
        rental_price: Set(p.rental_price.clone()),
        is_new: Set(p.is_new),
        is_featured: Set(p.is_featured),
        status: Set(p.status.as_str().to_string()),
        created_at: Set(p.created_at.into()),
    })
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn insert(&self, p: Product) -> Result<(), ServiceError> {
        to_row(&p)?.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .map(to_domain)
            .transpose()
    }

    async fn find_by_filter(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        let mut query = product::Entity::find();
        if let Some(category) = &filter.category {
            // Case-insensitive on read; values are stored as provided.
            query = query.filter(
                Expr::expr(Func::lower(Expr::col(product::Column::Category)))
                    .eq(category.to_lowercase()),
            );
        }
        if filter.featured_only {
            query = query.filter(product::Column::IsFeatured.eq(true));
        }
        query
            .order_by_desc(product::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn save(&self, p: Product) -> Result<bool, ServiceError> {
        match to_row(&p)?.update(&self.db).await {
            Ok(_) => Ok(true),
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
