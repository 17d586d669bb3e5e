//! HTTP API Client
//!
//! Resolves endpoints against the configured base address, sends requests
//! through a [`Transport`] and normalizes the outcome into `Result<T, ApiError>`.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use std::rc::Rc;

use super::error::ApiError;

/// Default API base URL, used when neither the build environment nor local
/// storage provide one
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Local storage key holding a user override of the API base URL
pub const API_BASE_STORAGE_KEY: &str = "ml_trader_api_url";

/// API base baked in at build time (`ML_TRADER_API_URL=... trunk build`)
fn build_time_api_base() -> &'static str {
    option_env!("ML_TRADER_API_URL").unwrap_or(DEFAULT_API_BASE)
}

/// Get the API base URL from local storage, then the build environment
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    normalize_base(&stored.unwrap_or_else(|| build_time_api_base().to_string()))
}

/// Remove trailing slashes from a base address
pub fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

/// Absolute endpoints pass through; anything else is appended to `base`.
pub fn resolve_url(base: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }

    let base = base.trim_end_matches('/');
    if endpoint.is_empty() {
        base.to_string()
    } else if endpoint.starts_with('/') {
        format!("{}{}", base, endpoint)
    } else {
        format!("{}/{}", base, endpoint)
    }
}

// ============ Request Types ============

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Caller-supplied configuration for one request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self {
            method: Method::Post,
            body: Some(body),
            ..Default::default()
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Fully resolved request handed to a [`Transport`]
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

/// Raw answer from the server, any status
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a request and returns whatever the server answered.
///
/// Only transport-level failures are errors here; status handling belongs
/// to [`ApiClient`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Browser transport backed by `fetch` through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Build(e.to_string()))?
                .send()
                .await?,
            None => builder.send().await?,
        };

        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}

/// Base address plus transport; cheap to clone and provided via context
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base: &str, transport: Rc<dyn Transport>) -> Self {
        Self {
            base: normalize_base(base),
            transport,
        }
    }

    /// Browser client using the configured base address
    pub fn from_env() -> Self {
        Self::new(&get_api_base(), Rc::new(GlooTransport))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        resolve_url(&self.base, endpoint)
    }

    /// Perform one request and decode a 2xx JSON payload into `T`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let request = HttpRequest {
            method: options.method,
            url: self.url_for(endpoint),
            headers: options.headers,
            query: options.query,
            body: options.body,
        };

        log::debug!("{} {}", request.method.as_str(), request.url);

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }

        decode_body(&response.body)
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return serde_json::from_value(serde_json::Value::Null).map_err(ApiError::from);
    }
    serde_json::from_str(body).map_err(ApiError::from)
}
