use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Permit as it appears on the wire.
#[derive(ToSchema)]
pub struct PermitDoc {
    pub id: i64,
    pub pid: i64,
    pub status: bool,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::meta::health,
        crate::routes::permits::list_categories,
        crate::routes::permits::get_permit,
        crate::routes::permits::create_permit,
        crate::routes::permits::set_category_status,
    ),
    components(schemas(HealthResponse, PermitDoc)),
    tags(
        (name = "health"),
        (name = "permits")
    )
)]
pub struct ApiDoc;
