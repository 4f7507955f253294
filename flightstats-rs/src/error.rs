use chrono::{DateTime, Utc};
use snafu::{Location, Snafu};

use crate::AirportCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Time requested is in the past (requested: '{requested}', now: '{now}')"))]
    PastTime {
        #[snafu(implicit)]
        location: Location,
        requested: DateTime<Utc>,
        now: DateTime<Utc>,
    },
    #[snafu(display("Http error"))]
    Http {
        #[snafu(implicit)]
        location: Location,
        source: http_client::Error,
    },
    #[snafu(display("Failed to decode schedule response"))]
    Decode {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: serde_json::Error,
    },
    #[snafu(display("No airport with fs code '{code}' in the current schedule response"))]
    UnknownAirport {
        #[snafu(implicit)]
        location: Location,
        code: AirportCode,
    },
    #[snafu(display("Invalid UTC offset '{value}'"))]
    InvalidOffset {
        #[snafu(implicit)]
        location: Location,
        value: String,
    },
}

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub))]
pub enum ParseStringError {
    #[snafu(display("String was unexpectedly empty"))]
    Empty {
        #[snafu(implicit)]
        location: Location,
    },
}
