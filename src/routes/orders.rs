use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    db::DbPool,
    dto::orders::{CreateOrderRequest, OrderList, UpdateOrderRequest},
    error::{AppError, AppResult},
    models::Order,
    response::{ApiResponse, Meta},
    services::order_service,
    validation::{validate_create, validate_update},
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", axum::routing::put(update_order).delete(delete_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = ApiResponse<OrderList>),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(pool): State<DbPool>) -> AppResult<Json<ApiResponse<OrderList>>> {
    let items = order_service::list_orders(&pool).await?;
    let total = items.len() as i64;

    Ok(Json(ApiResponse::success(
        "Ok",
        OrderList { items },
        Some(Meta::total(total)),
    )))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<Order>),
        (status = 400, description = "Validation errors or duplicate Order ID"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let new_order = validate_create(&payload).map_err(AppError::Validation)?;
    let order = order_service::create_order(&pool, new_order).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Order created",
            order,
            Some(Meta::empty()),
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Row id of the order")
    ),
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<Order>),
        (status = 400, description = "Invalid id, invalid fields, or nothing to update"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    if id <= 0 {
        return Err(AppError::BadRequest("Invalid id".to_string()));
    }

    let changes = validate_update(&payload).map_err(AppError::Validation)?;
    let order = order_service::update_order(&pool, id, changes).await?;

    Ok(Json(ApiResponse::success(
        "Order updated",
        order,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(
        ("id" = i64, Path, description = "Row id of the order")
    ),
    responses(
        (status = 200, description = "Order deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if id <= 0 {
        return Err(AppError::BadRequest("Invalid id".to_string()));
    }

    order_service::delete_order(&pool, id).await?;

    Ok(Json(ApiResponse::success(
        "Order deleted",
        serde_json::json!({ "success": true }),
        Some(Meta::empty()),
    )))
}
