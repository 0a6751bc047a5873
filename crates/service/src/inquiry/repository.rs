use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use tokio::sync::RwLock;
use uuid::Uuid;

use models::inquiry;

use crate::errors::ServiceError;

use super::domain::{Inquiry, Status};

#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn insert(&self, inquiry: Inquiry) -> Result<(), ServiceError>;
    /// All inquiries, newest-first.
    async fn list(&self) -> Result<Vec<Inquiry>, ServiceError>;
    /// `None` when the id is gone.
    async fn set_status(&self, id: Uuid, status: Status) -> Result<Option<Inquiry>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
}

/// In-memory backing mirroring the original mock store: front insertion,
/// linear scans.
#[derive(Default)]
pub struct MemoryInquiryRepository {
    inner: RwLock<Vec<Inquiry>>,
}

impl MemoryInquiryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl InquiryRepository for MemoryInquiryRepository {
    async fn insert(&self, inquiry: Inquiry) -> Result<(), ServiceError> {
        self.inner.write().await.insert(0, inquiry);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Inquiry>, ServiceError> {
        let items = self.inner.read().await;
        let mut out: Vec<Inquiry> = items.iter().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<Option<Inquiry>, ServiceError> {
        let mut items = self.inner.write().await;
        Ok(items.iter_mut().find(|i| i.id == id).map(|i| {
            i.status = status;
            i.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|i| i.id != id);
        Ok(items.len() < before)
    }
}

pub struct SeaOrmInquiryRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: inquiry::Model) -> Result<Inquiry, ServiceError> {
    Ok(Inquiry {
        id: m.id,
        name: m.name,
        email: m.email,
        phone: m.phone,
        company: m.company,
        message: m.message,
        source: inquiry::parse_source(&m.source)?,
        product: m.product,
        status: inquiry::parse_status(&m.status)?,
        created_at: m.created_at.with_timezone(&Utc),
    })
}

fn to_row(i: &Inquiry) -> inquiry::ActiveModel {
    inquiry::ActiveModel {
        id: Set(i.id),
        name: Set(i.name.clone()),
        email: Set(i.email.clone()),
        phone: Set(i.phone.clone()),
        company: Set(i.company.clone()),
        message: Set(i.message.clone()),
        source: Set(i.source.as_str().to_string()),
        product: Set(i.product.clone()),
        status: Set(i.status.as_str().to_string()),
        created_at: Set(i.created_at.into()),
    }
}

#[async_trait]
impl InquiryRepository for SeaOrmInquiryRepository {
    async fn insert(&self, i: Inquiry) -> Result<(), ServiceError> {
        to_row(&i).insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Inquiry>, ServiceError> {
        inquiry::Entity::find()
            .order_by_desc(inquiry::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(to_domain)
            .collect()
    }

    async fn set_status(&self, id: Uuid, status: Status) -> Result<Option<Inquiry>, ServiceError> {
        let found = inquiry::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(found) = found else { return Ok(None) };
        let mut am: inquiry::ActiveModel = found.into();
        am.status = Set(status.as_str().to_string());
        match am.update(&self.db).await {
            Ok(updated) => Ok(Some(to_domain(updated)?)),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(ServiceError::Db(e.to_string())),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
        let res = inquiry::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected > 0)
    }
}
