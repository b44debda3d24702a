//! # HTTP JSON client
//!
//! [`ApiClient`] issues one request per call against the configured base URL.
//! The work is split into three steps so the interesting parts are testable
//! without a network:
//!
//! 1. [`prepare`] builds the URL (base + path + query pairs, repeated names
//!    allowed), the headers and the serialised body. `Content-Type` is always
//!    JSON; `Authorization: Bearer` is added only when a token is supplied.
//! 2. The prepared request is sent with `reqwest` (the browser `fetch` API on
//!    wasm32).
//! 3. [`decode`] turns status + body into `T` or an [`ApiError`]. Failed
//!    responses take their message from the body's `error` field, then its
//!    `message` field, then [`DEFAULT_ERROR_MESSAGE`].
//!
//! The client does not retry, cache, or de-duplicate requests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::config::ApiConfig;
use store::{KeyValueStore, SessionStore};

use crate::error::{ApiError, DEFAULT_ERROR_MESSAGE};

/// HTTP verbs the marketplace API uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl Method {
    fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        }
    }
}

/// Per-call options. `Default` is a bare GET.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Extra headers, applied after the defaults.
    pub headers: Vec<(String, String)>,
    /// Query pairs in order. A name may repeat.
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method: Method::Post,
            body: Some(body),
            ..Self::default()
        })
    }

    /// POST without a body.
    pub fn post_empty() -> Self {
        Self {
            method: Method::Post,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A fully assembled request, ready to hand to the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Header value, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Assemble a request. `path` is appended to `base_url` verbatim.
pub fn prepare(
    base_url: &str,
    path: &str,
    token: Option<&str>,
    options: &RequestOptions,
) -> Result<PreparedRequest, ApiError> {
    let mut url = reqwest::Url::parse(&format!("{}{}", base_url.trim_end_matches('/'), path))
        .map_err(|e| ApiError::Encode(format!("invalid URL for {path}: {e}")))?;
    if !options.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (name, value) in &options.query {
            pairs.append_pair(name, value);
        }
    }

    let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
    if let Some(token) = token {
        headers.push(("Authorization".to_string(), format!("Bearer {token}")));
    }
    for (name, value) in &options.headers {
        headers.retain(|(n, _)| !n.eq_ignore_ascii_case(name));
        headers.push((name.clone(), value.clone()));
    }

    let body = options
        .body
        .as_ref()
        .map(serde_json::to_string)
        .transpose()
        .map_err(|e| ApiError::Encode(e.to_string()))?;

    Ok(PreparedRequest {
        method: options.method,
        url: url.into(),
        headers,
        body,
    })
}

/// Interpret a response.
pub fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return serde_json::from_slice(body)
            .map_err(|e| ApiError::Network(format!("invalid response body: {e}")));
    }

    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "message"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
    Err(ApiError::Request { status, message })
}

/// Client for the marketplace API, reading its bearer token from a
/// [`SessionStore`] on every call.
#[derive(Clone, Debug)]
pub struct ApiClient<S: KeyValueStore> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: KeyValueStore> ApiClient<S> {
    pub fn new(config: &ApiConfig, store: S) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session: SessionStore::new(store),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Issue a request and decode the JSON response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let token = self.session.token();
        let prepared = prepare(&self.base_url, path, token.as_deref(), &options)?;
        tracing::debug!(
            method = ?prepared.method,
            url = %prepared.url,
            authenticated = token.is_some(),
            "API request"
        );

        let mut builder = self
            .http
            .request(prepared.method.as_reqwest(), &prepared.url);
        for (name, value) in &prepared.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(error = %e, url = %prepared.url, "API request failed");
            ApiError::from(e)
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let result = decode(status, &bytes);
        if let Err(ref e) = result {
            tracing::warn!(
                status,
                error = %e,
                url = %prepared.url,
                "API request returned an error"
            );
        }
        result
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(path, RequestOptions::get()).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(path, RequestOptions::post(body)?).await
    }
}
