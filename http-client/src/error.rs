use reqwest::StatusCode;
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("HTTP reqwest error"))]
    #[snafu(context(false))]
    Reqwest {
        #[snafu(implicit)]
        location: Location,
        source: reqwest::Error,
    },
    #[snafu(display("HTTP request failed, status: '{status}', url: '{url}', body: '{body}'"))]
    FailedRequest {
        #[snafu(implicit)]
        location: Location,
        url: String,
        status: StatusCode,
        body: String,
    },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Reqwest { .. } => None,
            Error::FailedRequest { status, .. } => Some(*status),
        }
    }

    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Reqwest { .. } => None,
            Error::FailedRequest { body, .. } => Some(body),
        }
    }
}
