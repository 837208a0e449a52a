use axum::Router;

use crate::db::DbPool;

pub mod doc;
pub mod health;
pub mod orders;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<DbPool> {
    Router::new().nest("/orders", orders::router())
}
