//! The request client.

use std::sync::Arc;

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::interceptor::AuthInterceptor;
use crate::request::{Body, RequestDescriptor};

/// HTTP client bound to one API origin.
///
/// Every request passes through [`AuthInterceptor::on_request`] before it is
/// sent and through [`AuthInterceptor::on_response`] exactly once after it
/// settles, whether it succeeded, failed in transit or was never sent.
/// Cloning is cheap and clones share the interceptor and connection pool.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
    interceptor: Arc<AuthInterceptor>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, interceptor: AuthInterceptor) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
            interceptor: Arc::new(interceptor),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request. Non-success statuses come back as
    /// [`ClientError::Api`].
    pub async fn send(&self, request: RequestDescriptor) -> Result<Response, ClientError> {
        let outcome = self.dispatch(request).await;
        self.interceptor.on_response(outcome)
    }

    /// Send a request and decode a JSON response body.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
    ) -> Result<T, ClientError> {
        let resp = self.send(request).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    pub async fn get(&self, path: impl Into<String>) -> Result<Response, ClientError> {
        self.send(RequestDescriptor::get(path)).await
    }

    pub async fn delete(&self, path: impl Into<String>) -> Result<Response, ClientError> {
        self.send(RequestDescriptor::delete(path)).await
    }

    async fn dispatch(&self, mut request: RequestDescriptor) -> Result<Response, ClientError> {
        request.apply_defaults(self.config.default_headers());
        let request = self.interceptor.on_request(request)?;
        let url = self.config.url_for(&request.path)?;

        tracing::debug!(method = %request.method, %url, "dispatching request");

        let mut req = self.http.request(request.method, url).headers(request.headers);
        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        req = match request.body {
            Some(Body::Json(value)) => {
                let payload =
                    serde_json::to_vec(&value).map_err(|e| ClientError::Encode(e.to_string()))?;
                req.body(payload)
            }
            Some(Body::Form(pairs)) => req.form(&pairs),
            None => req,
        };

        let resp = req.send().await.map_err(ClientError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status,
                body: resp.text().await.unwrap_or_default(),
            });
        }

        Ok(resp)
    }
}
