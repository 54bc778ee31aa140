//! Mascota API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/mascotas", routes())
}

fn routes() -> Router<ServerState> {
    // GET /mascotas 是公开路由 (认证中间件放行)，其余需要登录
    Router::new()
        .route("/", get(handler::list).post(handler::create).patch(handler::update_all))
        // Filtered and count routes (must be before /{id} to avoid path conflicts)
        .route("/en-adopcion", get(handler::list_en_adopcion))
        .route("/count", get(handler::count))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .put(handler::replace)
                .delete(handler::delete),
        )
        // Explicit join route: adoption requests targeting a mascota
        .route("/{id}/solicitudes", get(handler::list_solicitudes))
}
