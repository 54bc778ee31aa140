//! Usuario API 模块

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/usuarios", routes())
        // Password reset lives at the top level (original API shape)
        .route("/reset-password", post(handler::reset_password))
}

fn routes() -> Router<ServerState> {
    // 公开注册路由：服务端生成 clave 并通过邮件下发
    let public_routes = Router::new().route("/", post(handler::create));

    // 管理路由：仅管理员可用
    let admin_routes = Router::new()
        .route("/", get(handler::list).patch(handler::update_all))
        // Count route (must be before /{id} to avoid path conflicts)
        .route("/count", get(handler::count))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .put(handler::replace)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
