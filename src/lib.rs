//! Flight Roster - role-slot sign-up for short-lived group activities.
//!
//! Participants join a flight by claiming one role (pilot, dispatcher,
//! passenger, ...) from a fixed catalog. Each role has a capacity, each
//! participant holds at most one role per flight, and every claim or release
//! is atomic per flight even under concurrent requests.
//!
//! Layout follows a hexagonal split:
//! - `domain` - catalog, session aggregate, events, errors
//! - `ports` - registry, access and event contracts
//! - `adapters` - in-memory registry, event bus, card renderer, HTTP
//! - `application` - command and query handlers, idle reaper
//! - `config` - environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
