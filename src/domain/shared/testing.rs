use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use std::sync::Mutex;

use crate::infrastructure::fatsecret::{
    FatSecretApi, FatSecretError, UpstreamRequest, UpstreamResponse,
};

/// In-memory FatSecret stand-in that records every request it receives
pub struct RecordingApi {
    requests: Mutex<Vec<UpstreamRequest>>,
    response: Mutex<UpstreamResponse>,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response: Mutex::new(UpstreamResponse {
                status: 200,
                body: Bytes::from_static(b"{}"),
            }),
        }
    }
}

impl RecordingApi {
    pub fn respond_with(&self, status: u16, body: Value) {
        *self.response.lock().unwrap() = UpstreamResponse {
            status,
            body: Bytes::from(serde_json::to_vec(&body).unwrap()),
        };
    }

    pub fn requests(&self) -> Vec<UpstreamRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> UpstreamRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no upstream request was sent")
    }
}

#[async_trait]
impl FatSecretApi for RecordingApi {
    async fn send(&self, request: UpstreamRequest) -> Result<UpstreamResponse, FatSecretError> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.lock().unwrap().clone())
    }
}
