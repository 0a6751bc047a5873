use std::collections::HashMap;

use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Documentation mirror of `service::catalog::NewProduct`; the wire format
/// is camelCase.
#[derive(ToSchema)]
pub struct NewProductDoc {
    pub title: String,
    pub category: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub specs: Option<HashMap<String, String>>,
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub rental_price: Option<String>,
    pub is_new: Option<bool>,
    pub is_featured: Option<bool>,
    pub status: Option<String>,
}

/// Documentation mirror of the PATCH body: product id plus the whitelisted
/// patch fields.
#[derive(ToSchema)]
pub struct UpdateProductDoc {
    pub id: Uuid,
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub status: Option<String>,
    pub rental_price: Option<String>,
    pub is_featured: Option<bool>,
    pub is_new: Option<bool>,
    pub specs: Option<HashMap<String, String>>,
    pub images: Option<Vec<String>>,
    pub image_url: Option<String>,
}

#[derive(ToSchema)]
pub struct NewInquiryDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub message: Option<String>,
    pub source: Option<String>,
    pub product: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateInquiryStatusDoc {
    pub id: Uuid,
    /// One of `new`, `responded`, `closed`.
    pub status: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Settings upsert body: arbitrary keys; the recognized ones are listed.
#[derive(ToSchema)]
pub struct SettingsDoc {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gst: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::get_products,
        crate::routes::products::create_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
        crate::routes::inquiries::create_inquiry,
        crate::routes::inquiries::list_inquiries,
        crate::routes::inquiries::update_inquiry_status,
        crate::routes::inquiries::delete_inquiry,
        crate::routes::settings::get_settings,
        crate::routes::settings::save_settings,
        crate::routes::auth::login,
        crate::routes::auth::change_password,
    ),
    components(
        schemas(
            HealthResponse,
            NewProductDoc,
            UpdateProductDoc,
            NewInquiryDoc,
            UpdateInquiryStatusDoc,
            LoginRequest,
            ChangePasswordRequest,
            SettingsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products"),
        (name = "inquiries"),
        (name = "settings"),
        (name = "auth")
    )
)]
pub struct ApiDoc;
