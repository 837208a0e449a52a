//! Store operations against the orders table. Each function is one atomic
//! statement on an injected pool; storage conflicts are translated into
//! domain errors here so handlers only see `AppError`.

use crate::{
    db::DbPool,
    error::{AppError, AppResult, is_unique_violation},
    models::Order,
    validation::{NewOrder, OrderChanges},
};

/// All orders, newest creation first. Ties on `created_at` fall back to the
/// row id so the ordering stays deterministic.
pub async fn list_orders(pool: &DbPool) -> AppResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(
        "SELECT * FROM orders ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(orders)
}

/// Insert a validated order and return the stored row, including the
/// generated id and created_at. A collision on the business key maps to
/// `DuplicateOrderId`.
pub async fn create_order(pool: &DbPool, order: NewOrder) -> AppResult<Order> {
    let created = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (order_id, customer_name, product_ordered, quantity, order_date, order_status)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(&order.order_id)
    .bind(&order.customer_name)
    .bind(&order.product_ordered)
    .bind(order.quantity)
    .bind(order.order_date)
    .bind(order.order_status)
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::DuplicateOrderId
        } else {
            AppError::DbError(err)
        }
    })?;

    Ok(created)
}

/// Merge-update only the supplied columns in a single statement; omitted
/// fields keep their stored values. Renaming the business key into an
/// existing one is a duplicate, a missing row is not-found.
pub async fn update_order(pool: &DbPool, id: i64, changes: OrderChanges) -> AppResult<Order> {
    if changes.is_empty() {
        return Err(AppError::BadRequest("No fields to update".to_string()));
    }

    let updated = sqlx::query_as::<_, Order>(
        r#"
        UPDATE orders SET
            order_id = COALESCE($2, order_id),
            customer_name = COALESCE($3, customer_name),
            product_ordered = COALESCE($4, product_ordered),
            quantity = COALESCE($5, quantity),
            order_date = COALESCE($6, order_date),
            order_status = COALESCE($7, order_status)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(changes.order_id)
    .bind(changes.customer_name)
    .bind(changes.product_ordered)
    .bind(changes.quantity)
    .bind(changes.order_date)
    .bind(changes.order_status)
    .fetch_optional(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::DuplicateOrderId
        } else {
            AppError::DbError(err)
        }
    })?;

    updated.ok_or(AppError::NotFound)
}

/// Remove the row; not-found when nothing matched.
pub async fn delete_order(pool: &DbPool, id: i64) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound);
    }

    Ok(())
}
