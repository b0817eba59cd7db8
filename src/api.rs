//! Typed REST client for the `/tasks` collection
//!
//! Network access goes through the `Transport` capability so tests can script
//! exchanges without a live server. The production transport wraps `reqwest`.
//!
//! Failure contract: `fetch_tasks`/`create_task`/`update_task`/`toggle_complete`
//! propagate errors; `delete_task` downgrades any failure to `false` because its
//! callers treat a failed delete as a recoverable UI event, not an exception.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{Error, Result};
use crate::task::{is_completed, Task, TaskDraft, TaskPatch};

/// HTTP method subset used by the tasks endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single outgoing exchange. A body, when present, is JSON.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        HttpRequest {
            method,
            url: url.into(),
            body: None,
        }
    }

    pub fn with_json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// The transport's view of a completed exchange.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability interface over the network.
///
/// One call per `send`; retries, caching, and cancellation are out of scope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(method = request.method.as_str(), url = %request.url, "sending request");
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Put => self.client.put(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| Error::Transport(err.to_string()))?;
        debug!(status, "response received");
        Ok(HttpResponse { status, body })
    }
}

/// Thin typed wrapper over the `/tasks` CRUD endpoints.
pub struct TaskApi {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl TaskApi {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        TaskApi {
            transport,
            base_url,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Fetch the full task collection.
    ///
    /// The decoded array is returned as-is; record-level validation is the
    /// renderer's problem, not the client's.
    pub async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let request = HttpRequest::new(Method::Get, self.collection_url());
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
            });
        }
        let tasks = serde_json::from_str(&response.body)?;
        Ok(tasks)
    }

    /// Create a task from a draft; returns the server's canonical record.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<Task> {
        let body = serde_json::to_string(draft)?;
        let request =
            HttpRequest::new(Method::Post, self.collection_url()).with_json_body(body);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
            });
        }
        let task = serde_json::from_str(&response.body)?;
        Ok(task)
    }

    /// Apply a partial update; returns the server's updated record.
    pub async fn update_task(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        let body = serde_json::to_string(patch)?;
        let request = HttpRequest::new(Method::Put, self.item_url(id)).with_json_body(body);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(Error::Http {
                status: response.status,
            });
        }
        let task = serde_json::from_str(&response.body)?;
        Ok(task)
    }

    /// Delete a task. Returns `true` only on a 2xx outcome and never errors:
    /// callers check the boolean and report failure through the notifier.
    pub async fn delete_task(&self, id: &str) -> bool {
        let request = HttpRequest::new(Method::Delete, self.item_url(id));
        match self.transport.send(request).await {
            Ok(response) => response.is_success(),
            Err(err) => {
                debug!(%err, "delete request failed");
                false
            }
        }
    }

    /// Flip a task's completion state via the update path.
    ///
    /// The returned record is the server's, and callers must re-render from it
    /// rather than from a locally mutated copy.
    pub async fn toggle_complete(&self, task: &Task) -> Result<Task> {
        let id = task
            .id
            .as_deref()
            .ok_or_else(|| Error::InvalidArgument("task has no id".to_string()))?;
        let next_status = if is_completed(task) { 0 } else { 1 };
        self.update_task(id, &TaskPatch::status_only(next_status))
            .await
    }
}
