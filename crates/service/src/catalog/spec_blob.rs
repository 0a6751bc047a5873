//! Codec for the product specification blob.
//!
//! Specs are persisted as one JSON text column and reconstructed into an
//! insertion-ordered mapping on read. Invariant: `decode(encode(m)) == m`
//! for every mapping, including the empty one.

use crate::errors::ServiceError;

use super::domain::SpecMap;

pub fn encode(specs: &SpecMap) -> Result<String, ServiceError> {
    serde_json::to_string(specs).map_err(|e| ServiceError::Db(e.to_string()))
}

/// Decode a stored blob. Empty/blank text decodes to the empty mapping so
/// rows written before a product had any specs stay readable.
pub fn decode(blob: &str) -> Result<SpecMap, ServiceError> {
    if blob.trim().is_empty() {
        return Ok(SpecMap::new());
    }
    serde_json::from_str(blob).map_err(|e| ServiceError::Db(e.to_string()))
}

pub fn encode_images(images: &[String]) -> Result<String, ServiceError> {
    serde_json::to_string(images).map_err(|e| ServiceError::Db(e.to_string()))
}

pub fn decode_images(blob: &str) -> Result<Vec<String>, ServiceError> {
    if blob.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(blob).map_err(|e| ServiceError::Db(e.to_string()))
}
