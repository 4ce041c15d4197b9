//! HTTP client for the owner REST endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use atelier_core::{AssignTaskRequest, UnassignedTask, WorkerSummary};

use crate::api::OwnerApi;
use crate::error::ClientError;

const WORKERS_PATH: &str = "/owner/workers";
const UNASSIGNED_TASKS_PATH: &str = "/owner/tasks/unassigned";

/// Optional knobs for [`HttpClient`].
#[derive(Debug, Clone, Default)]
pub struct HttpClientOptions {
    /// Bearer token sent with every request.
    pub token: Option<String>,
    /// Per-request timeout. None leaves requests unbounded.
    pub timeout: Option<Duration>,
}

/// HTTP client for the owner REST API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client with default options.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_options(base_url, HttpClientOptions::default())
    }

    /// Create a client with a token and/or timeout.
    pub fn with_options(base_url: &str, options: HttpClientOptions) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = options.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ClientError::Connection(format!("invalid token: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let inner = builder
            .build()
            .map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self {
            inner,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get JSON from an endpoint.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self.inner.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Serialization(e.to_string()))
    }

    /// POST a JSON body, ignoring any response payload.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST request");

        let response = self.inner.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

/// Path of the assign endpoint for a task.
fn assign_path(request: &AssignTaskRequest) -> String {
    format!("/owner/tasks/{}/assign", request.task_id)
}

#[async_trait]
impl OwnerApi for HttpClient {
    async fn list_workers(&self) -> Result<Vec<WorkerSummary>, ClientError> {
        self.get_json(WORKERS_PATH).await
    }

    async fn get_unassigned_tasks(&self) -> Result<Vec<UnassignedTask>, ClientError> {
        self.get_json(UNASSIGNED_TASKS_PATH).await
    }

    async fn assign_task(&self, request: &AssignTaskRequest) -> Result<(), ClientError> {
        debug!(
            task_id = %request.task_id,
            worker_id = %request.worker_id,
            "Assigning task"
        );
        self.post_json(&assign_path(request), &request.body()).await
    }
}
