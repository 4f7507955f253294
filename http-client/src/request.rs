use reqwest::header::{HeaderName, HeaderValue};

use crate::{Response, Result, error::FailedRequestSnafu};

#[derive(Debug)]
pub struct RequestBuilder(pub(crate) reqwest::blocking::RequestBuilder);

impl RequestBuilder {
    pub fn header<K, V>(self, key: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        Self(self.0.header(key, value))
    }

    /// This method will check the status of the response and return an error if it fails
    pub fn send(self) -> Result<Response> {
        let response = self.0.send()?;

        let status = response.status();
        if !status.is_success() {
            return FailedRequestSnafu {
                url: response.url().clone(),
                status,
                body: response.text()?,
            }
            .fail();
        }

        Ok(Response(response))
    }
}
