//! HTTP routes for flight endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    claim_role, close_flight, create_flight, delete_flight, get_catalog, get_flight, list_flights,
    release_role, release_role_anywhere, FlightHandlers,
};

/// Creates the flight router. Paths are relative to `/api`.
pub fn flight_routes(handlers: FlightHandlers) -> Router {
    Router::new()
        .route("/catalog", get(get_catalog))
        .route("/flights", post(create_flight).get(list_flights))
        .route("/flights/:id", get(get_flight).delete(delete_flight))
        .route("/flights/:id/close", post(close_flight))
        .route("/flights/:id/roles", delete(release_role))
        .route("/flights/:id/roles/:role", post(claim_role))
        .route("/roles", delete(release_role_anywhere))
        .with_state(handlers)
}
