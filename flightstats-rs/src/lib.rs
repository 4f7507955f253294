#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements a client library for querying scheduled flights from the
//! FlightStats flex schedules service.

mod error;
mod models;
mod schedule;
mod string_new_types;
mod url_builder;

pub use error::{Error, ParseStringError, Result};
pub use models::*;
pub use schedule::*;
pub use string_new_types::AirportCode;
pub use url_builder::{DEFAULT_BASE_URL, UrlBuilder};
