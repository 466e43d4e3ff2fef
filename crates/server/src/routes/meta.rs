use axum::{http::Uri, response::Response, Json};
use common::Health;
use service::PermitError;
use utoipa::OpenApi;

use crate::{errors::JsonApiError, observability, openapi::ApiDoc};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

pub async fn metrics() -> Response {
    observability::render()
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// POST on a meta path is a create in a category of that name, which never exists.
pub async fn reserved_category(uri: Uri) -> JsonApiError {
    let name = uri.path().trim_start_matches('/');
    PermitError::unknown_category(name).into()
}
