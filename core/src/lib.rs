//! Generic JSON web service client.
//!
//! # Overview
//! One entry point, `Webservice::execute`, sends an HTTP request built from
//! declarative `RequestOptions` and decodes the answer: 2xx bodies into the
//! caller's success type, error bodies into the caller's error payload type.
//!
//! ```no_run
//! use serde::Deserialize;
//! use webservice_core::{Webservice, WebserviceErrorPayload};
//!
//! #[derive(Debug, Deserialize)]
//! struct User {
//!     id: u64,
//!     name: String,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct ApiError {
//!     reason: String,
//! }
//!
//! impl WebserviceErrorPayload for ApiError {}
//!
//! async fn example() -> Result<User, webservice_core::Error<ApiError>> {
//!     let service = Webservice::new();
//!     service.get::<User, ApiError>("https://api.example.com/users/1").await
//! }
//! ```
//!
//! # Design
//! - `Webservice` is stateless apart from its transport; construct it once
//!   and share it.
//! - The network sits behind the `Transport` trait. `ReqwestTransport` is
//!   the default; tests plug in fakes.
//! - `build_request` and `parse_response` are pure free functions, so the
//!   decoding contract can be exercised without I/O or a transport.

pub mod client;
pub mod error;
pub mod http;
pub mod options;
pub mod transport;

pub use client::{build_request, parse_response, Webservice, INVALID_RESPONSE_MESSAGE};
pub use error::{Error, WebserviceError, WebserviceErrorPayload};
pub use http::{HeaderField, HttpMethod, HttpRequest, HttpResponse};
pub use options::{RequestOptions, DEFAULT_TIMEOUT};
pub use transport::{ReqwestTransport, Transport, TransportError};
