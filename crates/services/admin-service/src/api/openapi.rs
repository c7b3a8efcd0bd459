//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{Buyer, Product, Role, Seller};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::admin_handler::list_sellers,
        crate::api::handlers::admin_handler::list_buyers,
        crate::api::handlers::admin_handler::approve_seller,
        crate::api::handlers::admin_handler::block_seller,
        crate::api::handlers::admin_handler::delete_user,
        crate::api::handlers::admin_handler::suspend_user,
        crate::api::handlers::admin_handler::list_products,
        crate::api::handlers::admin_handler::remove_product,
        crate::api::handlers::admin_handler::sales_report,
        crate::api::handlers::admin_handler::list_roles,
    ),
    components(schemas(Seller, Buyer, Product, Role)),
    tags(
        (name = "Accounts", description = "Buyer and seller moderation"),
        (name = "Catalog", description = "Product moderation and sales reporting"),
    )
)]
pub struct ApiDoc;
