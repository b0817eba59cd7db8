#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use tablero::api::{HttpRequest, HttpResponse, Transport};
use tablero::card::TaskCard;
use tablero::controller::Notifier;
use tablero::error::{Error, Result};
use tablero::render::{ListCounts, ListKind, ViewSink};
use tablero::task::Task;

/// Transport that replays scripted responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport::default()
    }

    pub fn push_response(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Ok(HttpResponse {
                status,
                body: body.to_string(),
            }));
    }

    pub fn push_transport_failure(&self, message: &str) {
        self.responses
            .lock()
            .expect("responses lock")
            .push_back(Err(Error::Transport(message.to_string())));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(Error::Transport(
                    "no scripted response left".to_string(),
                ))
            })
    }
}

/// View sink that records the driven state for assertions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    pub pending: Vec<TaskCard>,
    pub completed: Vec<TaskCard>,
    pub pending_empty: Option<bool>,
    pub completed_empty: Option<bool>,
    pub counts: Option<ListCounts>,
}

impl RecordingSink {
    pub fn pending_titles(&self) -> Vec<String> {
        self.pending.iter().map(|card| card.title.clone()).collect()
    }

    pub fn completed_titles(&self) -> Vec<String> {
        self.completed
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }
}

impl ViewSink for RecordingSink {
    fn clear_list(&mut self, list: ListKind) {
        match list {
            ListKind::Pending => self.pending.clear(),
            ListKind::Completed => self.completed.clear(),
        }
    }

    fn append_card(&mut self, list: ListKind, card: TaskCard) {
        match list {
            ListKind::Pending => self.pending.push(card),
            ListKind::Completed => self.completed.push(card),
        }
    }

    fn set_empty_visible(&mut self, list: ListKind, visible: bool) {
        match list {
            ListKind::Pending => self.pending_empty = Some(visible),
            ListKind::Completed => self.completed_empty = Some(visible),
        }
    }

    fn set_counts(&mut self, counts: ListCounts) {
        self.counts = Some(counts);
    }
}

/// Notifier that records toasts and loading transitions.
#[derive(Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<String>>,
    loading: Mutex<Vec<bool>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        RecordingNotifier::default()
    }

    pub fn toasts(&self) -> Vec<String> {
        self.toasts.lock().expect("toasts lock").clone()
    }

    pub fn loading_transitions(&self) -> Vec<bool> {
        self.loading.lock().expect("loading lock").clone()
    }
}

impl Notifier for RecordingNotifier {
    fn toast(&self, message: &str) {
        self.toasts
            .lock()
            .expect("toasts lock")
            .push(message.to_string());
    }

    fn set_loading(&self, active: bool) {
        self.loading.lock().expect("loading lock").push(active);
    }
}

/// Build a task record with an id, title, and numeric status.
pub fn task(id: &str, title: &str, status: i64) -> Task {
    Task {
        id: Some(id.to_string()),
        status: Some(status),
        ..Task::with_title(title)
    }
}

/// Serialize tasks into the JSON array the backend would return.
pub fn tasks_body(tasks: &[Task]) -> String {
    serde_json::to_string(tasks).expect("encode tasks")
}
