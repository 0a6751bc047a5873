use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tokio::sync::RwLock;

use models::setting;

use crate::errors::ServiceError;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn load_all(&self) -> Result<Vec<(String, String)>, ServiceError>;
    /// Create the key if absent, overwrite if present. Each call is one
    /// independent write; callers get no cross-key atomicity.
    async fn upsert(&self, key: &str, value: &str) -> Result<(), ServiceError>;
}

#[derive(Default)]
pub struct MemorySettingsRepository {
    inner: RwLock<HashMap<String, String>>,
}

impl MemorySettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn load_all(&self) -> Result<Vec<(String, String)>, ServiceError> {
        let map = self.inner.read().await;
        Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<(), ServiceError> {
        self.inner.write().await.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct SeaOrmSettingsRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn load_all(&self) -> Result<Vec<(String, String)>, ServiceError> {
        let rows = setting::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(rows.into_iter().map(|r| (r.key, r.value)).collect())
    }

    async fn upsert(&self, key: &str, value: &str) -> Result<(), ServiceError> {
        let existing = setting::Entity::find_by_id(key.to_string())
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        match existing {
            Some(row) => {
                let mut am: setting::ActiveModel = row.into();
                am.value = Set(value.to_string());
                am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            }
            None => {
                let am = setting::ActiveModel {
                    key: Set(key.to_string()),
                    value: Set(value.to_string()),
                };
                am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
            }
        }
        Ok(())
    }
}
