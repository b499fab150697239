//! The I/O seam between `Webservice` and the network.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Failures below the HTTP semantic layer.
#[derive(Debug, Error)]
pub enum TransportError {
    /// DNS, TCP or TLS setup failed
    #[error("connection error: {0}")]
    Connection(String),
    /// The request did not complete within its timeout
    #[error("request timeout")]
    Timeout,
    /// The request could not be built (bad header value, unsupported URL)
    #[error("request build error: {0}")]
    Build(String),
    /// Anything else the transport reports
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else if err.is_builder() {
            TransportError::Build(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

/// Sends one `HttpRequest` and returns whatever came back.
///
/// Implementations must return non-2xx responses as `Ok`: interpreting the
/// status is the executor's job.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).send(request).await
    }
}

/// `Transport` backed by a `reqwest::Client`.
///
/// The client owns connection pooling; build it with
/// `reqwest::Client::builder()` to configure proxies or TLS, then wrap it
/// with `from_reqwest`.
///
/// Redirects follow the client's policy. With the default client a 3xx that
/// carries a `Location` is followed (up to 10 hops) and the executor only
/// sees the final response; a 3xx without `Location` comes back as is. Pass
/// a client built with `redirect(reqwest::redirect::Policy::none())` to see
/// every 3xx as `HttpError`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            inner: reqwest::Client::new(),
        }
    }

    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self
            .inner
            .request(to_reqwest_method(request.method), request.url)
            .timeout(request.timeout);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status: Some(status),
            headers,
            body,
        })
    }
}
