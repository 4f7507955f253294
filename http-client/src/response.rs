use reqwest::{StatusCode, Url};

use crate::Result;

#[derive(Debug)]
pub struct Response(pub(crate) reqwest::blocking::Response);

impl Response {
    pub fn status(&self) -> StatusCode {
        self.0.status()
    }

    pub fn url(&self) -> &Url {
        self.0.url()
    }

    pub fn text(self) -> Result<String> {
        self.0.text().map_err(From::from)
    }
}
