//! Raza API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/razas", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create).patch(handler::update_all))
        .route("/count", get(handler::count))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
        // Explicit join route: mascotas of a raza
        .route("/{id}/mascotas", get(handler::list_mascotas))
}
