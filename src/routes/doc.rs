use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
    models::{Order, OrderStatus},
    response::{ApiResponse, Meta},
    routes::{health, orders},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        orders::list_orders,
        orders::create_order,
        orders::update_order,
        orders::delete_order,
    ),
    components(
        schemas(
            Order,
            OrderStatus,
            OrderList,
            CreateOrderRequest,
            UpdateOrderRequest,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Orders", description = "Order tracking endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
