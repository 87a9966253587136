//! Menu Catalog API

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/menu", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/available", get(handler::list_available))
        .route("/{id}", get(handler::get_by_id))
        .route(
            "/{id}/toggle-availability",
            patch(handler::toggle_availability),
        )
}
