//! Railway map notation.
//!
//! A map is a list of `OD#` tokens, where `O` and `D` are single uppercase
//! letters naming the origin and destination stations and `#` is the
//! non-negative distance between them, e.g. `"AB5, BC4, CD8"`.

mod error;
mod parse;

pub use error::MalformedRoute;
pub use parse::{MapNotation, RouteSpec, parse_route, parse_routes};
