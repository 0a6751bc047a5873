use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use models::inquiry::{Source, Status};

/// A form submission as stored and listed in the admin inbox. The wire
/// format keeps the original `date` field name for the creation timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: String,
    pub source: Source,
    pub product: Option<String>,
    pub status: Status,
    #[serde(rename = "date")]
    pub created_at: DateTime<Utc>,
}

/// Create input from the public contact/quote forms. The service boundary
/// is deliberately permissive: contact fields are stored as given, and any
/// supplied `status` is ignored (creation always starts at `new`).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub source: Option<Source>,
    pub product: Option<String>,
    pub status: Option<Status>,
}
