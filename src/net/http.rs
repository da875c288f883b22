//! HTTP transport seam for the REST client.
//!
//! Client-side (csr): real fetch calls via `gloo-net`.
//! Native builds: an offline transport that fails every request, so the same
//! components compile and unit tests can substitute scripted transports.

use std::sync::Arc;

use async_trait::async_trait;

/// HTTP verb used by the workshop API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential to attach, if any.
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

/// Status and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced an HTTP status (network failure, CORS, ...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Sends one request and reports the server's status and body.
#[async_trait(?Send)]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by the browser `fetch` API.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

#[cfg(feature = "csr")]
#[async_trait(?Send)]
impl HttpTransport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => gloo_net::http::Request::get(&request.url),
            Method::Post => gloo_net::http::Request::post(&request.url),
        };
        if let Some(token) = request.bearer.as_deref() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = match request.body.as_ref() {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| TransportError(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Ok(HttpResponse { status, body })
    }
}

/// Transport used outside the browser; every request fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineTransport;

#[async_trait(?Send)]
impl HttpTransport for OfflineTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError(format!("{} is not available outside the browser", request.url)))
    }
}

/// Transport appropriate for the current build target.
#[must_use]
pub fn default_transport() -> Arc<dyn HttpTransport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(FetchTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(OfflineTransport)
    }
}
