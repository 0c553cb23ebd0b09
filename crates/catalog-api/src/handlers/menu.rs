// ============================================================================
// Catalog API - Menu Handlers
// File: crates/catalog-api/src/handlers/menu.rs
// ============================================================================
//! Menu lookup, listing, and CRUD handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use catalog_core::dto::{CategoryDto, MenuDto};
use catalog_shared::Page;

use crate::response::{error_reply, ApiResponse};
use crate::state::AppState;

type ErrorReply = (StatusCode, Json<ApiResponse<()>>);

/// Listing query parameters. Page numbers are 1-based here; the service
/// normalizes them.
#[derive(Debug, Deserialize)]
pub struct MenuListParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// A menu listing is either the full descending list or one page of it.
#[derive(Serialize)]
#[serde(untagged)]
pub enum MenuListing {
    Paged(Page<MenuDto>),
    Full(Vec<MenuDto>),
}

/// Menu lookup - GET /api/v1/menus/{menu_code}
pub async fn get_menu(
    State(state): State<AppState>,
    Path(menu_code): Path<i32>,
) -> Result<Json<ApiResponse<MenuDto>>, ErrorReply> {
    let dto = state
        .menu_service
        .find_menu_by_code(menu_code)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(dto)))
}

/// Menu listing - GET /api/v1/menus?page=1&size=10
///
/// Without paging parameters the whole list comes back, code descending.
pub async fn list_menus(
    State(state): State<AppState>,
    Query(params): Query<MenuListParams>,
) -> Result<Json<ApiResponse<MenuListing>>, ErrorReply> {
    let listing = if params.page.is_some() || params.size.is_some() {
        let page = state
            .menu_service
            .find_menu_page(params.page.unwrap_or(1), params.size)
            .await
            .map_err(error_reply)?;
        MenuListing::Paged(page)
    } else {
        let list = state
            .menu_service
            .find_menu_list()
            .await
            .map_err(error_reply)?;
        MenuListing::Full(list)
    };

    Ok(Json(ApiResponse::success(listing)))
}

/// Price filter - GET /api/v1/menus/price/{min_price}
pub async fn menus_by_price(
    State(state): State<AppState>,
    Path(min_price): Path<i32>,
) -> Result<Json<ApiResponse<Vec<MenuDto>>>, ErrorReply> {
    let list = state
        .menu_service
        .find_by_menu_price(min_price)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(list)))
}

/// Category listing for the registration form - GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CategoryDto>>>, ErrorReply> {
    let list = state
        .menu_service
        .find_all_category()
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(list)))
}

/// Menu registration - POST /api/v1/menus
pub async fn register_menu(
    State(state): State<AppState>,
    Json(payload): Json<MenuDto>,
) -> Result<(StatusCode, Json<ApiResponse<MenuDto>>), ErrorReply> {
    let saved = state
        .menu_service
        .regist_menu(payload)
        .await
        .map_err(error_reply)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(saved))))
}

/// Menu rename - PUT /api/v1/menus
pub async fn modify_menu(
    State(state): State<AppState>,
    Json(payload): Json<MenuDto>,
) -> Result<Json<ApiResponse<MenuDto>>, ErrorReply> {
    let saved = state
        .menu_service
        .modify_menu(payload)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(saved)))
}

/// Menu removal - DELETE /api/v1/menus/{menu_code}
pub async fn delete_menu(
    State(state): State<AppState>,
    Path(menu_code): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ErrorReply> {
    state
        .menu_service
        .delete_menu(menu_code)
        .await
        .map_err(error_reply)?;

    Ok(Json(ApiResponse::success(())))
}
