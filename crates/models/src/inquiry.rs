use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inquiry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub source: String,
    /// Free-text label naming the product of interest, not a foreign key.
    pub product: Option<String>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        panic!("no relations defined here")
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Inquiry lifecycle tag. Transitions are deliberately unguarded: the admin
/// UI may move an inquiry between any two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    New,
    Responded,
    Closed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "new",
            Status::Responded => "responded",
            Status::Closed => "closed",
        }
    }
}

pub fn parse_status(s: &str) -> Result<Status, ModelError> {
    match s {
        "new" => Ok(Status::New),
        "responded" => Ok(Status::Responded),
        "closed" => Ok(Status::Closed),
        other => Err(ModelError::Validation(format!("invalid inquiry status: {other}"))),
    }
}

/// Which form the inquiry came in through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    ContactPage,
    QuoteModal,
    ProductInquiry,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::ContactPage => "contact_page",
            Source::QuoteModal => "quote_modal",
            Source::ProductInquiry => "product_inquiry",
        }
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::ContactPage
    }
}

pub fn parse_source(s: &str) -> Result<Source, ModelError> {
    match s {
        "contact_page" => Ok(Source::ContactPage),
        "quote_modal" => Ok(Source::QuoteModal),
        "product_inquiry" => Ok(Source::ProductInquiry),
        other => Err(ModelError::Validation(format!("invalid inquiry source: {other}"))),
    }
}
