use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, instrument};

use crate::errors::ServiceError;

use super::defaults::DEFAULT_SETTINGS;
use super::repository::SettingsRepository;

/// Application service for the flat key/value settings store. Reads are a
/// layered lookup: stored values overlay the hardcoded default table, so an
/// empty store still returns a complete map.
pub struct SettingsService<R: SettingsRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: SettingsRepository + ?Sized> SettingsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<HashMap<String, String>, ServiceError> {
        let mut map: HashMap<String, String> =
            DEFAULT_SETTINGS.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        for (key, value) in self.repo.load_all().await? {
            map.insert(key, value);
        }
        Ok(map)
    }

    pub async fn get(&self, key: &str) -> Result<Option<String>, ServiceError> {
        Ok(self.get_all().await?.remove(key))
    }

    /// Per-key upserts, matching the original's independent writes; a
    /// failure partway leaves earlier keys applied.
    #[instrument(skip(self, entries), fields(keys = entries.len()))]
    pub async fn upsert_many(&self, entries: HashMap<String, String>) -> Result<(), ServiceError> {
        for (key, value) in entries {
            if key.trim().is_empty() {
                return Err(ServiceError::Validation("setting key must be non-empty".into()));
            }
            self.repo.upsert(&key, &value).await?;
        }
        info!("settings_saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::defaults::{ADMIN_PASSWORD_KEY, ADMIN_USERNAME_KEY};
    use super::super::repository::MemorySettingsRepository;
    use super::*;

    fn svc() -> SettingsService<MemorySettingsRepository> {
        SettingsService::new(Arc::new(MemorySettingsRepository::new()))
    }

    #[tokio::test]
    async fn empty_store_returns_full_default_map() {
        let svc = svc();
        let all = svc.get_all().await.unwrap();
        assert_eq!(all.get(ADMIN_USERNAME_KEY).map(String::as_str), Some("admin"));
        assert_eq!(all.get(ADMIN_PASSWORD_KEY).map(String::as_str), Some("prisha2024"));
        assert_eq!(all.get("name").map(String::as_str), Some("Prisha Enterprises"));
        assert_eq!(all.len(), 8);
    }

    #[tokio::test]
    async fn upsert_overrides_only_its_key() {
        let svc = svc();
        svc.upsert_many(HashMap::from([("phone".to_string(), "+91 1".to_string())]))
            .await
            .unwrap();

        let all = svc.get_all().await.unwrap();
        assert_eq!(all.get("phone").map(String::as_str), Some("+91 1"));
        assert_eq!(all.get("email").map(String::as_str), Some("contact@prishaenterprises.in"));
        assert_eq!(all.get(ADMIN_USERNAME_KEY).map(String::as_str), Some("admin"));
    }

    #[tokio::test]
    async fn upsert_overwrites_existing_value() {
        let svc = svc();
        svc.upsert_many(HashMap::from([("phone".to_string(), "+91 1".to_string())]))
            .await
            .unwrap();
        svc.upsert_many(HashMap::from([("phone".to_string(), "+91 2".to_string())]))
            .await
            .unwrap();
        assert_eq!(svc.get("phone").await.unwrap().as_deref(), Some("+91 2"));
    }

    #[tokio::test]
    async fn unrecognized_keys_are_stored_and_returned() {
        let svc = svc();
        svc.upsert_many(HashMap::from([("tagline".to_string(), "IT on rent".to_string())]))
            .await
            .unwrap();
        assert_eq!(svc.get("tagline").await.unwrap().as_deref(), Some("IT on rent"));
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let svc = svc();
        let err = svc
            .upsert_many(HashMap::from([(" ".to_string(), "x".to_string())]))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
