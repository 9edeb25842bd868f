use axum::Router;

pub mod orders;
pub mod system;

/// Router for all domain endpoints.
pub fn router() -> Router {
    Router::new().nest("/orders", orders::router())
}
