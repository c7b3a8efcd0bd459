//! Admin handlers.
//!
//! Each handler maps to exactly one `AdminService` call and returns its
//! result unchanged. Mutations answer `204 No Content`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, put},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::AppResult;
use domain::{AccountKind, Buyer, Product, Role, Seller};

use crate::api::extractors::AppQuery;
use crate::api::state::AppState;

/// Account kind selector for user operations
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountKindQuery {
    /// `BUYER` or `SELLER`, any letter case
    #[param(value_type = String, example = "SELLER")]
    pub role: AccountKind,
}

/// Create admin routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/sellers", get(list_sellers))
        .route("/sellers/:id/approve", put(approve_seller))
        .route("/sellers/:id/block", put(block_seller))
        .route("/buyers", get(list_buyers))
        .route("/users/:id", delete(delete_user))
        .route("/users/:id/suspend", put(suspend_user))
        .route("/products", get(list_products))
        .route("/products/:id", delete(remove_product))
        .route("/sales-report", get(sales_report))
        .route("/roles", get(list_roles))
}

/// List all sellers
#[utoipa::path(
    get,
    path = "/admin/sellers",
    tag = "Accounts",
    responses(
        (status = 200, description = "All sellers", body = Vec<Seller>)
    )
)]
pub async fn list_sellers(State(state): State<AppState>) -> AppResult<Json<Vec<Seller>>> {
    Ok(Json(state.admin_service.list_sellers().await?))
}

/// List all buyers
#[utoipa::path(
    get,
    path = "/admin/buyers",
    tag = "Accounts",
    responses(
        (status = 200, description = "All buyers", body = Vec<Buyer>)
    )
)]
pub async fn list_buyers(State(state): State<AppState>) -> AppResult<Json<Vec<Buyer>>> {
    Ok(Json(state.admin_service.list_buyers().await?))
}

/// Approve a seller
#[utoipa::path(
    put,
    path = "/admin/sellers/{id}/approve",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "Seller ID")
    ),
    responses(
        (status = 204, description = "Seller approved"),
        (status = 404, description = "Seller not found")
    )
)]
pub async fn approve_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.admin_service.approve_seller(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Block a seller (revoke approval)
#[utoipa::path(
    put,
    path = "/admin/sellers/{id}/block",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "Seller ID")
    ),
    responses(
        (status = 204, description = "Seller blocked"),
        (status = 404, description = "Seller not found")
    )
)]
pub async fn block_seller(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.admin_service.block_seller(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a buyer or seller
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "User ID"),
        AccountKindQuery
    ),
    responses(
        (status = 204, description = "User deleted, or did not exist"),
        (status = 400, description = "Unrecognized role")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppQuery(query): AppQuery<AccountKindQuery>,
) -> AppResult<StatusCode> {
    state.admin_service.delete_user(id, query.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Suspend a buyer or seller
#[utoipa::path(
    put,
    path = "/admin/users/{id}/suspend",
    tag = "Accounts",
    params(
        ("id" = i64, Path, description = "User ID"),
        AccountKindQuery
    ),
    responses(
        (status = 204, description = "User suspended"),
        (status = 400, description = "Unrecognized role"),
        (status = 404, description = "User not found")
    )
)]
pub async fn suspend_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AppQuery(query): AppQuery<AccountKindQuery>,
) -> AppResult<StatusCode> {
    state.admin_service.suspend_user(id, query.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all products
#[utoipa::path(
    get,
    path = "/admin/products",
    tag = "Catalog",
    responses(
        (status = 200, description = "All products", body = Vec<Product>)
    )
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(state.admin_service.list_products().await?))
}

/// Remove a product
#[utoipa::path(
    delete,
    path = "/admin/products/{id}",
    tag = "Catalog",
    params(
        ("id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product removed, or did not exist")
    )
)]
pub async fn remove_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.admin_service.remove_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Total sales across all products
#[utoipa::path(
    get,
    path = "/admin/sales-report",
    tag = "Catalog",
    responses(
        (status = 200, description = "Plain-text sales total", body = String, content_type = "text/plain")
    )
)]
pub async fn sales_report(State(state): State<AppState>) -> AppResult<String> {
    let report = state.admin_service.sales_report().await?;
    Ok(report.to_string())
}

/// List the role catalog
#[utoipa::path(
    get,
    path = "/admin/roles",
    tag = "Accounts",
    responses(
        (status = 200, description = "All roles", body = Vec<Role>)
    )
)]
pub async fn list_roles(State(state): State<AppState>) -> AppResult<Json<Vec<Role>>> {
    Ok(Json(state.admin_service.list_roles().await?))
}
