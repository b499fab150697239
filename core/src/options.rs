//! Per-call request parameters.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::http::{HeaderField, HttpMethod};

/// How long a request may stay in flight when the caller does not say.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Declarative description of one call to `Webservice::execute`.
///
/// Defaults: `GET`, no headers, no body, 60 second timeout.
///
/// ```
/// use std::time::Duration;
/// use serde_json::json;
/// use webservice_core::{HeaderField, HttpMethod, RequestOptions};
///
/// let options = RequestOptions::new()
///     .method(HttpMethod::Post)
///     .header(HeaderField::ContentType, "application/json")
///     .body(json!({ "name": "Ann" }).as_object().cloned().unwrap_or_default())
///     .timeout(Duration::from_secs(10));
/// assert_eq!(options.method, HttpMethod::Post);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: HashMap<HeaderField, String>,
    pub body: Option<Map<String, Value>>,
    pub timeout: Duration,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::default(),
            headers: HashMap::new(),
            body: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Set one header. A later value for the same field replaces the earlier one.
    pub fn header(mut self, field: impl Into<HeaderField>, value: impl Into<String>) -> Self {
        self.headers.insert(field.into(), value.into());
        self
    }

    /// Replace all headers.
    pub fn headers(mut self, headers: HashMap<HeaderField, String>) -> Self {
        self.headers = headers;
        self
    }

    pub fn body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
