use std::time::Duration;

use reqwest::{IntoUrl, blocking::Client};

use crate::RequestBuilder;

#[derive(Debug, Clone)]
pub struct HttpClient(Client);

#[derive(Default, Debug)]
pub struct HttpClientBuilder {
    client: reqwest::blocking::ClientBuilder,
}

impl HttpClient {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn get(&self, url: impl IntoUrl) -> RequestBuilder {
        RequestBuilder(self.0.get(url))
    }
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.client = self.client.timeout(timeout);
        self
    }

    /// Disables TLS certificate verification for all requests made by the
    /// built client.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.client = self.client.danger_accept_invalid_certs(accept);
        self
    }

    pub fn build(self) -> HttpClient {
        HttpClient(self.client.build().unwrap())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
