// folio-client/src/client/http.rs
// HTTP client over the network

use crate::error::from_status;
use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Transport used by the typed folio APIs
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    fn token(&self) -> Option<&str>;
}

/// Network HTTP client backed by reqwest
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url is empty".into()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "folio API request failed");
            return Err(from_status(status, text));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.post(self.url(path))).await
    }

    async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send(self.client.patch(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send(self.client.delete(self.url(path))).await
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(
            client.url("/api/folio-sequences"),
            "http://localhost:8080/api/folio-sequences"
        );
        assert_eq!(client.url("health"), "http://localhost:8080/health");
    }

    #[test]
    fn rejects_empty_base_url() {
        let err = NetworkHttpClient::new(&ClientConfig::new("  ")).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn carries_token_from_config() {
        let config = ClientConfig::new("http://localhost:8080").with_token("abc");
        let client = NetworkHttpClient::new(&config).unwrap();
        assert_eq!(client.token(), Some("abc"));
    }
}
