//! Persona API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/personas", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create).patch(handler::update_all))
        // Count route (must be before /{id} to avoid path conflicts)
        .route("/count", get(handler::count))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .put(handler::replace)
                .delete(handler::delete),
        )
        // Explicit join route: adoption requests filed by a persona
        .route("/{id}/solicitudes", get(handler::list_solicitudes))
}
