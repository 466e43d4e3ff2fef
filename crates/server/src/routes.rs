use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod meta;
pub mod permits;

/// Build the full application router: permit endpoints plus health, metrics and docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // 元信息路由（健康检查、指标、文档）；POST 与未知类别一致返回 404
    let meta_routes: Router<AppState> = Router::new()
        .route("/health", get(meta::health).post(meta::reserved_category))
        .route("/metrics", get(meta::metrics).post(meta::reserved_category))
        .route("/openapi.json", get(meta::openapi).post(meta::reserved_category));

    // 许可证路由：类别作为路径段
    let permit_routes: Router<AppState> = Router::new()
        .route("/", get(permits::list_categories))
        .route("/:category", post(permits::create_permit))
        .route("/:category/:id", get(permits::get_permit))
        .route("/:category/status/:status", post(permits::set_category_status));

    // 组合
    meta_routes
        .merge(permit_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                // 请求到达时打点
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
