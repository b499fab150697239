//! Error types for the webservice executor.
//!
//! # Design
//! `WebserviceError` is the structured taxonomy callers match on: bad
//! route, status-coded failure, lost connectivity, unreadable response.
//! JSON failures on the request body and on the success path are kept out of
//! it and surface as their own `Error` variants, so a caller can tell "the
//! server said no" apart from "we could not read what the server said".
//! A malformed error body never hides the status code: it degrades to an
//! `HttpError` without payload.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::transport::TransportError;

/// Marker for types that describe an error body returned by a web service.
///
/// Implement it for the shape the server sends back with 4xx/5xx responses:
///
/// ```
/// use serde::Deserialize;
/// use webservice_core::WebserviceErrorPayload;
///
/// #[derive(Debug, Deserialize)]
/// struct ApiError {
///     reason: String,
/// }
///
/// impl WebserviceErrorPayload for ApiError {}
/// ```
pub trait WebserviceErrorPayload: DeserializeOwned {}

impl WebserviceErrorPayload for serde_json::Value {}

/// Structured failures produced by `Webservice::execute`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebserviceError<E> {
    /// The route is not an absolute http(s) URL. No request was sent.
    #[error("invalid URL")]
    InvalidUrl,

    /// The server answered outside 2xx. `payload` is set only for status
    /// codes >= 400 whose body decoded as `E`.
    #[error("HTTP {code}")]
    HttpError { code: u16, payload: Option<E> },

    /// The transport could not reach the server.
    #[error("no connection")]
    NoConnection,

    /// Anything else, described by `message`.
    #[error("{message}")]
    Other { message: String },
}

/// Every failure `Webservice` can return.
#[derive(Debug, Error)]
pub enum Error<E> {
    /// Structured failure, see `WebserviceError`.
    #[error(transparent)]
    Webservice(WebserviceError<E>),

    /// The request body could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A 2xx response body could not be deserialized into the success type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),

    /// The transport failed for a reason other than lost connectivity.
    #[error("transport failed: {0}")]
    Transport(#[source] TransportError),

    /// The operation exists on the API surface but has no implementation.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl<E> Error<E> {
    /// The structured failure, if this is one.
    pub fn webservice(&self) -> Option<&WebserviceError<E>> {
        match self {
            Error::Webservice(err) => Some(err),
            _ => None,
        }
    }

    /// Consume the error and return the structured failure, if this is one.
    pub fn into_webservice(self) -> Option<WebserviceError<E>> {
        match self {
            Error::Webservice(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<WebserviceError<E>> for Error<E> {
    fn from(err: WebserviceError<E>) -> Self {
        Error::Webservice(err)
    }
}

impl<E> From<TransportError> for Error<E> {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Connection(_) => Error::Webservice(WebserviceError::NoConnection),
            other => Error::Transport(other),
        }
    }
}
