// ============================================================================
// Catalog API - Category Handlers
// File: crates/catalog-api/src/handlers/category.rs
// ============================================================================
//! Category association handlers: eager lookup, cascade insert, and the
//! catalog browse with a selectable fetch strategy.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use catalog_core::dto::CategoryDto;
use catalog_core::repositories::FetchStrategy;

use crate::response::{error_reply, ApiResponse};
use crate::state::AppState;

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub fetch: Option<String>,
}

fn parse_strategy(fetch: Option<&str>) -> Result<FetchStrategy, ErrorReply> {
    match fetch {
        None => Ok(FetchStrategy::default()),
        Some("joined") => Ok(FetchStrategy::Joined),
        Some("per-category") => Ok(FetchStrategy::PerCategory),
        Some(other) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "VALIDATION_ERROR",
                &format!("Unknown fetch strategy: {other}"),
            )),
        )),
    }
}

/// Category lookup with menus - GET /api/v1/categories/{category_code}
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_code): Path<i32>,
) -> Result<Json<ApiResponse<CategoryDto>>, ErrorReply> {
    let dto = state
        .category_service
        .find_category(category_code)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(dto)))
}

/// Cascade insert - POST /api/v1/categories
pub async fn register_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryDto>,
) -> Result<(StatusCode, Json<ApiResponse<CategoryDto>>), ErrorReply> {
    let saved = state
        .category_service
        .regist_category(payload)
        .await
        .map_err(error_reply)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved))))
}

/// Whole-catalog browse - GET /api/v1/catalog?fetch=per-category|joined
///
/// `per-category` runs the N+1 loading path on purpose; watch the query log.
pub async fn browse_catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<ApiResponse<Vec<CategoryDto>>>, ErrorReply> {
    let strategy = parse_strategy(params.fetch.as_deref())?;

    let catalog = state
        .category_service
        .browse_catalog(strategy)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(catalog)))
}
