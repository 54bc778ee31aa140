//! Rol API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

/// Rol router - 仅管理员可用
pub fn router() -> Router<ServerState> {
    Router::new().nest("/roles", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn(require_admin))
}
