// folio-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls against an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use super::http::HttpClient;
use crate::error::from_status;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory)
///
/// Calls the Router directly through tower's `oneshot`, so a server and its
/// client can share one process with no socket in between.
///
/// # Example
///
/// ```ignore
/// use folio_client::OneshotHttpClient;
///
/// let router = folio_mock::build_router(state);
/// let client = OneshotHttpClient::new(router);
/// let sequences: Vec<FolioSequence> = client.get("/api/folio-sequences").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn build_request(&self, method: Method, path: &str, body: Body) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_json_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Body::from(bytes))
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(from_status(
                status,
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, Body::empty())?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_json_request(Method::POST, path, body)?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, Body::empty())?;
        self.execute(request).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_json_request(Method::PATCH, path, body)?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, Body::empty())?;
        self.execute(request).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
