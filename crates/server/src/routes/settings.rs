use std::collections::HashMap;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::errors::JsonApiError;
use crate::observability;
use crate::state::ServerState;

/// Full settings map: stored values overlaid on the hardcoded defaults, so
/// a fresh install answers with a complete map.
#[utoipa::path(get, path = "/api/settings", tag = "settings",
    responses((status = 200, description = "OK")))]
pub async fn get_settings(
    State(state): State<ServerState>,
) -> Result<Json<HashMap<String, String>>, JsonApiError> {
    let all = state.settings.get_all().await?;
    Ok(Json(all))
}

/// Upsert every key in the body. Non-string values are stringified, the
/// same coercion the original admin form relied on.
#[utoipa::path(post, path = "/api/settings", tag = "settings",
    request_body = crate::openapi::SettingsDoc,
    responses((status = 200, description = "OK"), (status = 400, description = "Validation Error")))]
pub async fn save_settings(
    State(state): State<ServerState>,
    Json(body): Json<HashMap<String, Value>>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    observability::SETTINGS_UPDATES_TOTAL.inc();
    let entries: HashMap<String, String> = body
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect();
    state.settings.upsert_many(entries).await?;
    Ok(Json(json!({ "success": true })))
}
