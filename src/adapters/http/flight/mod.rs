//! HTTP adapter for flight endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AssignmentResponse, CreateFlightRequest, ErrorResponse, FlightListResponse, FlightResponse,
    FlightSummaryResponse, ListFlightsQuery, RoleKindResponse, RoleRosterResponse,
};
pub use handlers::FlightHandlers;
pub use routes::flight_routes;
