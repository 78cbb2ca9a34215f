use async_trait::async_trait;
use bytes::Bytes;
use serde::de::IgnoredAny;
use serde_json::Value;
use std::sync::Arc;

use super::error::FatSecretError;
use super::token_manager::TokenManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMethod {
    Get,
    Post,
}

/// One outbound call to the FatSecret REST API
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequest {
    pub method: UpstreamMethod,
    pub path: &'static str,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
}

impl UpstreamRequest {
    pub fn get(path: &'static str) -> Self {
        Self {
            method: UpstreamMethod::Get,
            path,
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: &'static str, body: Value) -> Self {
        Self {
            method: UpstreamMethod::Post,
            path,
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn param_opt<T: ToString>(self, name: &'static str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    /// Value of the first query pair with this name
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Upstream status and raw JSON body, relayed byte for byte to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: Bytes,
}

#[async_trait]
pub trait FatSecretApi: Send + Sync {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, FatSecretError>;
}

pub struct FatSecretClient {
    http_client: reqwest::Client,
    api_url: String,
    tokens: Arc<TokenManager>,
}

impl FatSecretClient {
    pub fn new(http_client: reqwest::Client, api_url: String, tokens: Arc<TokenManager>) -> Self {
        Self {
            http_client,
            api_url,
            tokens,
        }
    }
}

#[async_trait]
impl FatSecretApi for FatSecretClient {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, FatSecretError> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}{}", self.api_url, request.path);

        let builder = match request.method {
            UpstreamMethod::Get => self
                .http_client
                .get(&url)
                .query(&request.query)
                .query(&[("format", "json")]),
            UpstreamMethod::Post => {
                let builder = self.http_client.post(&url).query(&request.query);
                match &request.body {
                    Some(body) => builder.json(body),
                    None => builder,
                }
            }
        };

        let response = builder.bearer_auth(token).send().await?;
        let status = response.status().as_u16();

        tracing::debug!(path = request.path, status, "FatSecret responded");

        let body = response.bytes().await?;

        // Only checked, never re-encoded: key order and number formatting stay as sent
        serde_json::from_slice::<IgnoredAny>(&body).map_err(|e| {
            FatSecretError::InvalidResponse {
                endpoint: request.path,
                message: e.to_string(),
            }
        })?;

        Ok(UpstreamResponse { status, body })
    }
}
