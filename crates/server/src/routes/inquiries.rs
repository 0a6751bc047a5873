use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use service::inquiry::domain::Status;
use service::inquiry::NewInquiry;

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

/// Public endpoint behind the contact page, quote modal, and per-product
/// inquiry forms.
#[utoipa::path(post, path = "/api/inquiry", tag = "inquiries",
    request_body = crate::openapi::NewInquiryDoc,
    responses((status = 201, description = "Created")))]
pub async fn create_inquiry(
    State(state): State<ServerState>,
    Json(input): Json<NewInquiry>,
) -> Result<(StatusCode, Json<serde_json::Value>), JsonApiError> {
    observability::INQUIRIES_RECEIVED_TOTAL.inc();
    let inquiry = state.inquiries.create(input).await?;
    Ok((StatusCode::CREATED, Json(json!({ "success": true, "inquiry": inquiry }))))
}

#[utoipa::path(get, path = "/api/inquiry", tag = "inquiries",
    responses((status = 200, description = "OK")))]
pub async fn list_inquiries(
    State(state): State<ServerState>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let inquiries = state.inquiries.list().await?;
    Ok(Json(json!({ "inquiries": inquiries })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: Uuid,
    pub status: Status,
}

#[utoipa::path(patch, path = "/api/inquiry", tag = "inquiries",
    request_body = crate::openapi::UpdateInquiryStatusDoc,
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn update_inquiry_status(
    State(state): State<ServerState>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let inquiry = state.inquiries.set_status(req.id, req.status).await?;
    Ok(Json(json!({ "success": true, "inquiry": inquiry })))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: Option<Uuid>,
}

#[utoipa::path(delete, path = "/api/inquiry", tag = "inquiries",
    params(("id" = Option<Uuid>, Query, description = "Inquiry id to delete")),
    responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn delete_inquiry(
    State(state): State<ServerState>,
    Query(q): Query<DeleteQuery>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = q
        .id
        .ok_or_else(|| JsonApiError::new(StatusCode::NOT_FOUND, "Inquiry not found"))?;
    state.inquiries.delete(id).await?;
    Ok(Json(json!({ "success": true })))
}
