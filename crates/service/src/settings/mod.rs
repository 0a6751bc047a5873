pub mod defaults;
pub mod repository;
pub mod service;

pub use repository::{MemorySettingsRepository, SeaOrmSettingsRepository, SettingsRepository};
pub use service::SettingsService;
