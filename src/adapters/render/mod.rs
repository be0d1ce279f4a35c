//! Text renderers for flight snapshots.

mod card;

pub use card::{FlightCardRenderer, UNASSIGNED};
