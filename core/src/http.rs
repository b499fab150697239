//! HTTP transport types shared by the executor and its transports.
//!
//! # Design
//! Requests and responses are described as plain data. `Webservice` builds
//! an `HttpRequest`, hands it to a `Transport`, and interprets the returned
//! `HttpResponse`. Keeping the I/O behind this boundary lets tests drive the
//! status policy with canned responses instead of a live server.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    Post,
    #[default]
    Get,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Verb as written on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Post => "POST",
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header names recognized by the executor.
///
/// `Custom` covers anything outside the known set. `HeaderField::from` folds
/// known names into their dedicated variant. Equality and hashing go by the
/// case-insensitive wire name, so `Custom("content-type")`, `ContentType`,
/// `"X-Trace"` and `"x-trace"` never end up as two separate headers.
#[derive(Debug, Clone)]
pub enum HeaderField {
    Accept,
    AcceptEncoding,
    AcceptLanguage,
    Authorization,
    CacheControl,
    ContentType,
    Cookie,
    UserAgent,
    Custom(String),
}

const KNOWN_FIELDS: [HeaderField; 8] = [
    HeaderField::Accept,
    HeaderField::AcceptEncoding,
    HeaderField::AcceptLanguage,
    HeaderField::Authorization,
    HeaderField::CacheControl,
    HeaderField::ContentType,
    HeaderField::Cookie,
    HeaderField::UserAgent,
];

impl HeaderField {
    /// Header name as sent on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            HeaderField::Accept => "Accept",
            HeaderField::AcceptEncoding => "Accept-Encoding",
            HeaderField::AcceptLanguage => "Accept-Language",
            HeaderField::Authorization => "Authorization",
            HeaderField::CacheControl => "Cache-Control",
            HeaderField::ContentType => "Content-Type",
            HeaderField::Cookie => "Cookie",
            HeaderField::UserAgent => "User-Agent",
            HeaderField::Custom(name) => name,
        }
    }
}

impl PartialEq for HeaderField {
    fn eq(&self, other: &Self) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }
}

impl Eq for HeaderField {}

impl Hash for HeaderField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for byte in self.as_str().bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
        state.write_u8(0xff);
    }
}

impl From<&str> for HeaderField {
    fn from(name: &str) -> Self {
        KNOWN_FIELDS
            .iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(name))
            .cloned()
            .unwrap_or_else(|| HeaderField::Custom(name.to_string()))
    }
}

impl From<String> for HeaderField {
    fn from(name: String) -> Self {
        HeaderField::from(name.as_str())
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Produced by `build_request`. Header names are already
/// resolved to their wire form and the body is already JSON-encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: url::Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
    pub timeout: Duration,
}

/// An HTTP response described as plain data.
///
/// `status` is `None` when the transport got something back that cannot be
/// read as an HTTP response. `headers` is filled by the transport for hosts
/// that inspect the raw response; the status policy ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HttpResponse {
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Response with a status code and a body, no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            headers: Vec::new(),
            body: body.into(),
        }
    }
}
