//! Generic JSON request executor.
//!
//! # Design
//! `Webservice` holds only its transport and carries no mutable state
//! between calls, so one instance can be cloned or shared across tasks
//! freely. Each call is split into `build_request` (route validation, body
//! encoding), one `Transport::send`, and `parse_response` (status policy,
//! body decoding). The two pure halves are free functions, independent of
//! any transport, so a host that performs its own I/O can reuse the
//! decoding contract.

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Error, WebserviceError, WebserviceErrorPayload};
use crate::http::{HttpRequest, HttpResponse};
use crate::options::RequestOptions;
use crate::transport::{ReqwestTransport, Transport};

/// Message reported when a transport hands back a response without status.
pub const INVALID_RESPONSE_MESSAGE: &str = "HTTP URL Response is invalid";

/// Stateless executor for JSON web service calls.
#[derive(Debug, Clone)]
pub struct Webservice<T = ReqwestTransport> {
    transport: T,
}

impl Default for Webservice<ReqwestTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl Webservice<ReqwestTransport> {
    /// Executor backed by a fresh `reqwest::Client`.
    pub fn new() -> Self {
        Self {
            transport: ReqwestTransport::new(),
        }
    }
}

impl<T: Transport> Webservice<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request to `route` and decode the answer.
    ///
    /// 2xx bodies decode into `R`. Bodies of responses with status >= 400
    /// decode into `E` when they can; any other status yields
    /// `HttpError` without payload.
    pub async fn execute<R, E>(&self, route: &str, options: RequestOptions) -> Result<R, Error<E>>
    where
        R: DeserializeOwned,
        E: WebserviceErrorPayload,
    {
        let request = build_request::<E>(route, &options)?;
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.transport.send(request).await?;
        parse_response(response)
    }

    /// `execute` with default options: `GET`, no headers, no body.
    pub async fn get<R, E>(&self, route: &str) -> Result<R, Error<E>>
    where
        R: DeserializeOwned,
        E: WebserviceErrorPayload,
    {
        self.execute(route, RequestOptions::default()).await
    }

    /// Reserved for binary uploads; always fails.
    pub async fn upload<E>(&self) -> Result<(), Error<E>> {
        Err(Error::NotImplemented("upload"))
    }

    /// Reserved for binary downloads; always fails.
    pub async fn download<E>(&self) -> Result<Vec<u8>, Error<E>> {
        Err(Error::NotImplemented("download"))
    }
}

/// Turn `route` and `options` into a transport-ready request.
pub fn build_request<E>(route: &str, options: &RequestOptions) -> Result<HttpRequest, Error<E>> {
    let url = parse_route(route).ok_or(WebserviceError::InvalidUrl)?;

    let headers = options
        .headers
        .iter()
        .map(|(field, value)| (field.as_str().to_string(), value.clone()))
        .collect();

    let body = options
        .body
        .as_ref()
        .map(serde_json::to_vec)
        .transpose()
        .map_err(Error::Serialization)?;

    Ok(HttpRequest {
        method: options.method,
        url,
        headers,
        body,
        timeout: options.timeout,
    })
}

/// Apply the status policy to a response and decode its body.
pub fn parse_response<R, E>(response: HttpResponse) -> Result<R, Error<E>>
where
    R: DeserializeOwned,
    E: WebserviceErrorPayload,
{
    let Some(code) = response.status else {
        return Err(WebserviceError::Other {
            message: INVALID_RESPONSE_MESSAGE.to_string(),
        }
        .into());
    };
    debug!(status = code, bytes = response.body.len(), "received response");

    match code {
        200..=299 => serde_json::from_slice(&response.body).map_err(Error::Deserialization),
        400.. => {
            let payload = match serde_json::from_slice::<E>(&response.body) {
                Ok(payload) => Some(payload),
                Err(err) => {
                    warn!(status = code, error = %err, "could not decode error payload");
                    None
                }
            };
            Err(WebserviceError::HttpError { code, payload }.into())
        }
        _ => Err(WebserviceError::HttpError {
            code,
            payload: None,
        }
        .into()),
    }
}

/// Absolute http(s) URL, or `None`.
fn parse_route(route: &str) -> Option<Url> {
    let url = Url::parse(route).ok()?;
    match url.scheme() {
        "http" | "https" if url.has_host() => Some(url),
        _ => None,
    }
}
