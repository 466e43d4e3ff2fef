use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::{Category, Permit};
use tracing::info;

use crate::{
    errors::JsonApiError,
    extract::{parse_bool, PermitPayload},
    observability,
    state::AppState,
};

#[utoipa::path(
    get, path = "/", tag = "permits",
    responses((status = 200, description = "Known permit categories", body = [String]))
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<[Category; 2]> {
    Json(state.permits.list_categories())
}

#[utoipa::path(
    get, path = "/{category}/{id}", tag = "permits",
    params(
        ("category" = String, Path, description = "electrical | structural"),
        ("id" = i64, Path, description = "Permit id within the category")
    ),
    responses(
        (status = 200, description = "Permit", body = crate::openapi::PermitDoc),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Unknown category or permit")
    )
)]
pub async fn get_permit(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> Result<Json<Permit>, JsonApiError> {
    let id: i64 = id
        .parse()
        .map_err(|e| JsonApiError::bad_request(format!("invalid permit id `{id}`: {e}")))?;

    match state.permits.get_permit(&category, id).await {
        Ok(permit) => {
            observability::record_lookup(&category, true);
            info!(%category, id = permit.id, pid = permit.pid, status = permit.status, "permit found");
            Ok(Json(permit))
        }
        Err(e) => {
            observability::record_lookup(&category, false);
            Err(e.into())
        }
    }
}

#[utoipa::path(
    post, path = "/{category}", tag = "permits",
    params(("category" = String, Path, description = "electrical | structural")),
    request_body(
        content = crate::openapi::PermitDoc,
        description = "Only `pid` is used; `id` and `status` are assigned by the server"
    ),
    responses(
        (status = 200, description = "Created permit", body = crate::openapi::PermitDoc),
        (status = 400, description = "Body cannot be bound"),
        (status = 404, description = "Unknown category")
    )
)]
pub async fn create_permit(
    State(state): State<AppState>,
    Path(category): Path<String>,
    PermitPayload(input): PermitPayload,
) -> Result<Json<Permit>, JsonApiError> {
    let permit = state.permits.create_permit(&category, input.pid).await?;
    observability::record_created(&category);
    let total = state.permits.count(&category).await?;
    info!(
        %category,
        id = permit.id,
        pid = permit.pid,
        status = permit.status,
        total,
        ignored_id = ?input.id,
        ignored_status = ?input.status,
        "permit created"
    );
    Ok(Json(permit))
}

#[utoipa::path(
    post, path = "/{category}/status/{status}", tag = "permits",
    params(
        ("category" = String, Path, description = "electrical | structural"),
        ("status" = String, Path, description = "Boolean such as true, false, 1, 0, t, f")
    ),
    responses(
        (status = 200, description = "Default status replaced"),
        (status = 400, description = "Status is not a boolean"),
        (status = 404, description = "Unknown category")
    )
)]
pub async fn set_category_status(
    State(state): State<AppState>,
    Path((category, status)): Path<(String, String)>,
) -> Result<StatusCode, JsonApiError> {
    let status = parse_bool(&status)
        .ok_or_else(|| JsonApiError::bad_request(format!("invalid status `{status}`")))?;

    let previous = state.permits.default_status(&category).await?;
    state.permits.set_category_status(&category, status).await?;
    observability::record_status_change(&category);
    info!(%category, previous, status, "all new permits in category will carry this status");
    Ok(StatusCode::OK)
}
