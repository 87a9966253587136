//! Kitchen Order API
//!
//! | Path | Method | Notes |
//! |------|--------|-------|
//! | /orders | POST | create, prices lines from the menu |
//! | /orders | GET | list, `?status=&staffId=&restaurantId=` |
//! | /orders/{id} | GET, PUT, DELETE | |
//! | /orders/{id}/status | PATCH | lifecycle transition |
//! | /orders/{id}/assign-staff | PATCH | |
//! | /orders/dashboard/counts | GET | count per status |
//! | /orders/count/{status} | GET | |
//! | /orders/inventory | GET | inventory passthrough |
//! | /orders/inventory/check-stock | GET | `?itemName=&quantity=` |
//! | /orders/inventory/{item_id} | GET | |

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/orders", routes())
}

fn routes() -> Router<ServerState> {
    let order_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", patch(handler::update_status))
        .route("/{id}/assign-staff", patch(handler::assign_staff));

    let stats_routes = Router::new()
        .route("/dashboard/counts", get(handler::dashboard_counts))
        .route("/count/{status}", get(handler::count_by_status));

    let inventory_routes = Router::new()
        .route("/inventory", get(handler::inventory_list))
        .route("/inventory/check-stock", get(handler::check_stock))
        .route("/inventory/{item_id}", get(handler::inventory_item));

    order_routes.merge(stats_routes).merge(inventory_routes)
}
