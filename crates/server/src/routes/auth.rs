use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use service::settings::defaults::{ADMIN_PASSWORD_KEY, ADMIN_USERNAME_KEY};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordInput {
    pub current_password: String,
    pub new_password: String,
}

/// Compare submitted credentials against the settings-backed pair; the
/// defaulting layer makes a fresh install log in with the demo credential.
#[utoipa::path(post, path = "/api/auth/login", tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses((status = 200, description = "Logged In"), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let settings = state.settings.get_all().await?;
    if credential(&settings, ADMIN_USERNAME_KEY) == input.username
        && credential(&settings, ADMIN_PASSWORD_KEY) == input.password
    {
        info!(username = %input.username, "admin_login");
        return Ok(Json(json!({ "success": true })));
    }
    Err(JsonApiError::new(StatusCode::UNAUTHORIZED, "Invalid credentials"))
}

#[utoipa::path(post, path = "/api/auth/change-password", tag = "auth",
    request_body = crate::openapi::ChangePasswordRequest,
    responses((status = 200, description = "OK"), (status = 400, description = "Current password is incorrect")))]
pub async fn change_password(
    State(state): State<ServerState>,
    Json(input): Json<ChangePasswordInput>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    let settings = state.settings.get_all().await?;
    if credential(&settings, ADMIN_PASSWORD_KEY) != input.current_password {
        return Err(JsonApiError::new(StatusCode::BAD_REQUEST, "Current password is incorrect"));
    }
    state
        .settings
        .upsert_many(HashMap::from([(ADMIN_PASSWORD_KEY.to_string(), input.new_password)]))
        .await?;
    info!("admin_password_changed");
    Ok(Json(json!({ "success": true })))
}

fn credential<'a>(settings: &'a HashMap<String, String>, key: &str) -> &'a str {
    settings.get(key).map(String::as_str).unwrap_or_default()
}
