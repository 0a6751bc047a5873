use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;

use super::domain::{Inquiry, NewInquiry, Status};
use super::repository::InquiryRepository;

/// Application service for the inquiry inbox.
pub struct InquiryService<R: InquiryRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: InquiryRepository + ?Sized> InquiryService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Store a form submission. Contact fields are taken as given (the form
    /// layer owns user-facing validation); `status` always starts at `new`,
    /// whatever the caller supplied.
    #[instrument(skip(self, input), fields(source = ?input.source))]
    pub async fn create(&self, input: NewInquiry) -> Result<Inquiry, ServiceError> {
        let inquiry = Inquiry {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            message: input.message.unwrap_or_default(),
            source: input.source.unwrap_or_default(),
            product: input.product,
            status: Status::New,
            created_at: Utc::now(),
        };
        self.repo.insert(inquiry.clone()).await?;
        info!(inquiry_id = %inquiry.id, source = inquiry.source.as_str(), "inquiry_received");
        Ok(inquiry)
    }

    pub async fn list(&self) -> Result<Vec<Inquiry>, ServiceError> {
        self.repo.list().await
    }

    /// Unguarded transition: any status in the enumerated set is accepted
    /// from any current state.
    pub async fn set_status(&self, id: Uuid, status: Status) -> Result<Inquiry, ServiceError> {
        let updated = self
            .repo
            .set_status(id, status)
            .await?
            .ok_or_else(|| ServiceError::not_found("inquiry"))?;
        info!(inquiry_id = %id, status = status.as_str(), "inquiry_status_changed");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("inquiry"));
        }
        info!(inquiry_id = %id, "inquiry_deleted");
        Ok(())
    }
}
