//! Auth API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/identificar", post(handler::identificar))
        .route("/me", get(handler::me))
}
