//! Domain types for the railway map.
//!
//! Stations and routes are plain values. Validation of map notation
//! happens in [`crate::notation`]; these types only enforce their own
//! structural invariants.

mod route;
mod station;

pub use route::{Distance, Route};
pub use station::{InvalidStation, Station};
