use std::sync::Arc;

use service::catalog::{CatalogRepository, CatalogService};
use service::inquiry::{InquiryRepository, InquiryService};
use service::settings::{SettingsRepository, SettingsService};

/// Shared handler state. The repositories behind the services are trait
/// objects because the backing (memory or Postgres) is chosen once at
/// process start.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<dyn CatalogRepository>>,
    pub inquiries: Arc<InquiryService<dyn InquiryRepository>>,
    pub settings: Arc<SettingsService<dyn SettingsRepository>>,
}

impl ServerState {
    pub fn new(
        catalog_repo: Arc<dyn CatalogRepository>,
        inquiry_repo: Arc<dyn InquiryRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(catalog_repo)),
            inquiries: Arc::new(InquiryService::new(inquiry_repo)),
            settings: Arc::new(SettingsService::new(settings_repo)),
        }
    }

    /// State backed entirely by in-memory repositories; also what the e2e
    /// tests run against.
    pub fn in_memory() -> Self {
        use service::catalog::MemoryCatalogRepository;
        use service::inquiry::MemoryInquiryRepository;
        use service::settings::MemorySettingsRepository;

        Self::new(
            Arc::new(MemoryCatalogRepository::new()),
            Arc::new(MemoryInquiryRepository::new()),
            Arc::new(MemorySettingsRepository::new()),
        )
    }

    /// State backed by SeaORM repositories over one shared connection pool.
    pub fn with_database(db: sea_orm::DatabaseConnection) -> Self {
        use service::catalog::SeaOrmCatalogRepository;
        use service::inquiry::SeaOrmInquiryRepository;
        use service::settings::SeaOrmSettingsRepository;

        Self::new(
            Arc::new(SeaOrmCatalogRepository { db: db.clone() }),
            Arc::new(SeaOrmInquiryRepository { db: db.clone() }),
            Arc::new(SeaOrmSettingsRepository { db }),
        )
    }
}
