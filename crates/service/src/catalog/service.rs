use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use models::product::{slugify, validate_category, validate_title, PLACEHOLDER_IMAGE};

use crate::errors::ServiceError;

use super::domain::{ImagePatch, NewProduct, Product, ProductFilter, ProductPatch};
use super::repository::CatalogRepository;

/// Application service for the product catalog: create defaults, slug
/// derivation, whitelist-merge updates, and the read selectors the
/// storefront pages use.
pub struct CatalogService<R: CatalogRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CatalogRepository + ?Sized> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create(&self, input: NewProduct) -> Result<Product, ServiceError> {
        validate_title(&input.title)?;
        validate_category(&input.category)?;

        let slug = match input.slug {
            Some(s) if !s.trim().is_empty() => s,
            _ => slugify(&input.title),
        };
        let images = match input.images {
            Some(images) if !images.is_empty() => images,
            _ => match input.image_url {
                Some(url) if !url.trim().is_empty() => vec![url],
                _ => vec![PLACEHOLDER_IMAGE.to_string()],
            },
        };

        let product = Product {
            id: Uuid::new_v4(),
            title: input.title,
            slug,
            category: input.category,
            description: input.description,
            short_description: input.short_description,
            specs: input.specs.unwrap_or_default(),
            images,
            rental_price: input.rental_price,
            is_new: input.is_new.unwrap_or(false),
            is_featured: input.is_featured.unwrap_or(false),
            status: input.status.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.repo.insert(product.clone()).await?;
        info!(product_id = %product.id, slug = %product.slug, "product_created");
        Ok(product)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Product, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("product"))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Product, ServiceError> {
        self.repo.find_by_slug(slug).await?.ok_or_else(|| ServiceError::not_found("product"))
    }

    /// List reads are newest-first; an empty filter returns the whole
    /// catalog.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ServiceError> {
        self.repo.find_by_filter(filter).await
    }

    /// Whitelist merge: only fields present in the patch overwrite prior
    /// values. A supplied spec mapping replaces the previous one wholesale.
    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, ServiceError> {
        let mut product = self.get_by_id(id).await?;

        let image_patch = patch.image_patch();
        if let Some(title) = patch.title {
            validate_title(&title)?;
            product.title = title;
        }
        if let Some(category) = patch.category {
            validate_category(&category)?;
            product.category = category;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(short_description) = patch.short_description {
            product.short_description = Some(short_description);
        }
        if let Some(status) = patch.status {
            product.status = status;
        }
        if let Some(rental_price) = patch.rental_price {
            product.rental_price = Some(rental_price);
        }
        if let Some(is_featured) = patch.is_featured {
            product.is_featured = is_featured;
        }
        if let Some(is_new) = patch.is_new {
            product.is_new = is_new;
        }
        if let Some(specs) = patch.specs {
            product.specs = specs;
        }
        match image_patch {
            Some(ImagePatch::Replace(images)) => product.images = images,
            Some(ImagePatch::SetPrimary(url)) => {
                if product.images.is_empty() {
                    product.images.push(url);
                } else {
                    product.images[0] = url;
                }
            }
            None => {}
        }

        if !self.repo.save(product.clone()).await? {
            return Err(ServiceError::not_found("product"));
        }
        info!(product_id = %product.id, "product_updated");
        Ok(product)
    }

    /// Delete is terminal and reports NotFound for an id that is already
    /// gone; it never silently succeeds.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("product"));
        }
        info!(product_id = %id, "product_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::domain::{SpecMap, Status};
    use super::super::repository::MemoryCatalogRepository;
    use super::*;

    fn svc() -> CatalogService<MemoryCatalogRepository> {
        CatalogService::new(Arc::new(MemoryCatalogRepository::new()))
    }

    fn new_product(title: &str, category: &str) -> NewProduct {
        NewProduct { title: title.into(), category: category.into(), ..Default::default() }
    }

    fn specs(pairs: &[(&str, &str)]) -> SpecMap {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn create_requires_title() {
        let svc = svc();
        let err = svc.create(new_product("", "Servers")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
    }

    #[tokio::test]
    async fn create_derives_slug_from_title() {
        let svc = svc();
        let p = svc.create(new_product("Dell PowerEdge R740!", "Servers")).await.unwrap();
        assert_eq!(p.slug, "dell-poweredge-r740");
        assert_eq!(p.status, Status::Active);
        assert_eq!(p.images, vec!["/products/placeholder.jpg".to_string()]);
        assert!(!p.is_new);
        assert!(!p.is_featured);
    }

    #[tokio::test]
    async fn create_keeps_explicit_slug_and_images() {
        let svc = svc();
        let input = NewProduct {
            slug: Some("custom-slug".into()),
            images: Some(vec!["/products/server.jpg".into(), "/products/side.jpg".into()]),
            ..new_product("Dell PowerEdge R740", "Servers")
        };
        let p = svc.create(input).await.unwrap();
        assert_eq!(p.slug, "custom-slug");
        assert_eq!(p.primary_image(), "/products/server.jpg");
    }

    #[tokio::test]
    async fn get_by_slug_and_id() {
        let svc = svc();
        let p = svc.create(new_product("HP Z8 G4", "Workstations")).await.unwrap();
        assert_eq!(svc.get_by_slug("hp-z8-g4").await.unwrap().id, p.id);
        assert_eq!(svc.get_by_id(p.id).await.unwrap().slug, "hp-z8-g4");
        assert!(matches!(
            svc.get_by_slug("missing").await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn category_filter_is_case_insensitive() {
        let svc = svc();
        svc.create(new_product("Dell PowerEdge R740", "Servers")).await.unwrap();
        svc.create(new_product("MacBook Pro 16", "Laptops")).await.unwrap();

        let lower = svc
            .list(&ProductFilter { category: Some("servers".into()), ..Default::default() })
            .await
            .unwrap();
        let upper = svc
            .list(&ProductFilter { category: Some("Servers".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        // Stored value stays as provided on write.
        assert_eq!(lower[0].category, "Servers");
    }

    #[tokio::test]
    async fn featured_filter_restricts_results() {
        let svc = svc();
        svc.create(NewProduct {
            is_featured: Some(true),
            ..new_product("Dell PowerEdge R740", "Servers")
        })
        .await
        .unwrap();
        svc.create(new_product("Cisco Catalyst 9300", "Networking")).await.unwrap();

        let featured = svc
            .list(&ProductFilter { featured_only: true, ..Default::default() })
            .await
            .unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].title, "Dell PowerEdge R740");
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let svc = svc();
        let input = NewProduct {
            specs: Some(specs(&[("X", "Y")])),
            rental_price: Some("₹15,000/month".into()),
            ..new_product("Dell PowerEdge R740", "Servers")
        };
        let p = svc.create(input).await.unwrap();

        let updated = svc
            .update(p.id, ProductPatch { is_featured: Some(true), ..Default::default() })
            .await
            .unwrap();
        assert!(updated.is_featured);
        assert_eq!(updated.title, p.title);
        assert_eq!(updated.specs, p.specs);
        assert_eq!(updated.rental_price, p.rental_price);
        assert_eq!(updated.created_at, p.created_at);
    }

    #[tokio::test]
    async fn update_replaces_specs_wholesale() {
        let svc = svc();
        let input =
            NewProduct { specs: Some(specs(&[("X", "Y")])), ..new_product("Switch", "Networking") };
        let p = svc.create(input).await.unwrap();

        let updated = svc
            .update(p.id, ProductPatch { specs: Some(specs(&[("A", "B")])), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(updated.specs, specs(&[("A", "B")]));
    }

    #[tokio::test]
    async fn update_set_primary_keeps_remaining_images() {
        let svc = svc();
        let input = NewProduct {
            images: Some(vec!["/products/a.jpg".into(), "/products/b.jpg".into()]),
            ..new_product("NVR System", "CCTV")
        };
        let p = svc.create(input).await.unwrap();

        let updated = svc
            .update(
                p.id,
                ProductPatch { image_url: Some("/uploads/new.jpg".into()), ..Default::default() },
            )
            .await
            .unwrap();
        assert_eq!(updated.images, vec!["/uploads/new.jpg".to_string(), "/products/b.jpg".into()]);
    }

    #[tokio::test]
    async fn update_and_delete_missing_id_report_not_found() {
        let svc = svc();
        let missing = Uuid::new_v4();
        assert!(matches!(
            svc.update(missing, ProductPatch::default()).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(matches!(svc.delete(missing).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let svc = svc();
        svc.create(new_product("First", "Servers")).await.unwrap();
        svc.create(new_product("Second", "Servers")).await.unwrap();
        svc.create(new_product("Third", "Servers")).await.unwrap();

        let all = svc.list(&ProductFilter::default()).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Third", "Second", "First"]);
    }
}
