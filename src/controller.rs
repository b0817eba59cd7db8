//! Interaction controller: wires user actions to the API client and re-renders
//!
//! The controller keeps the latest fetched snapshot only so that search can
//! filter client-side; the server stays the source of truth and every mutation
//! re-renders from server-returned records. Network failures are surfaced
//! through the notifier and never propagate out of a controller method.

use std::sync::Arc;

use tracing::debug;

use crate::api::TaskApi;
use crate::config::LabelsConfig;
use crate::render::{render_tasks, ViewSink};
use crate::task::{Task, TaskDraft, TaskPatch};

/// User-facing side channels: toast messages and the loading indicator.
///
/// Injected so tests can record calls instead of capturing stderr.
pub trait Notifier: Send + Sync {
    fn toast(&self, message: &str);
    fn set_loading(&self, active: bool);
}

/// Wires create/edit/toggle/delete/search to the API client and the view sink.
pub struct Controller<S: ViewSink> {
    api: TaskApi,
    sink: S,
    notifier: Arc<dyn Notifier>,
    labels: LabelsConfig,
    tasks: Vec<Task>,
}

impl<S: ViewSink> Controller<S> {
    pub fn new(api: TaskApi, sink: S, notifier: Arc<dyn Notifier>, labels: LabelsConfig) -> Self {
        Controller {
            api,
            sink,
            notifier,
            labels,
            tasks: Vec::new(),
        }
    }

    /// Latest fetched snapshot (for inspection; the view renders from it).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn render_snapshot(&mut self) {
        render_tasks(&mut self.sink, &self.tasks, &self.labels);
    }

    /// Re-fetch the full collection and rebuild both lists.
    ///
    /// On failure the previous render is left untouched.
    pub async fn refresh(&mut self) {
        self.notifier.set_loading(true);
        match self.api.fetch_tasks().await {
            Ok(tasks) => {
                debug!(count = tasks.len(), "tasks fetched");
                self.tasks = tasks;
                self.render_snapshot();
            }
            Err(err) => {
                self.notifier
                    .toast(&format!("No se pudieron cargar las tareas: {err}"));
            }
        }
        self.notifier.set_loading(false);
    }

    /// Create a task from a draft, then re-fetch and re-render.
    pub async fn submit_create(&mut self, draft: TaskDraft) {
        if draft.title.trim().is_empty() {
            self.notifier.toast("El título no puede estar vacío");
            return;
        }
        self.notifier.set_loading(true);
        match self.api.create_task(&draft).await {
            Ok(created) => {
                debug!(id = ?created.id, "task created");
                self.notifier.set_loading(false);
                self.refresh().await;
                return;
            }
            Err(err) => {
                self.notifier
                    .toast(&format!("No se pudo crear la tarea: {err}"));
            }
        }
        self.notifier.set_loading(false);
    }

    /// Apply an edit patch, then re-fetch and re-render.
    pub async fn submit_edit(&mut self, id: &str, patch: TaskPatch) {
        self.notifier.set_loading(true);
        match self.api.update_task(id, &patch).await {
            Ok(updated) => {
                debug!(id = ?updated.id, "task updated");
                self.notifier.set_loading(false);
                self.refresh().await;
                return;
            }
            Err(err) => {
                self.notifier
                    .toast(&format!("No se pudo actualizar la tarea: {err}"));
            }
        }
        self.notifier.set_loading(false);
    }

    /// Flip completion for the snapshot task with this id and re-render.
    ///
    /// The snapshot entry is replaced with the record the server returned,
    /// never with a locally flipped copy.
    pub async fn toggle(&mut self, id: &str) {
        let Some(task) = self
            .tasks
            .iter()
            .find(|task| task.id.as_deref() == Some(id))
            .cloned()
        else {
            self.notifier.toast("Tarea no encontrada");
            return;
        };

        match self.api.toggle_complete(&task).await {
            Ok(updated) => {
                if let Some(slot) = self
                    .tasks
                    .iter_mut()
                    .find(|task| task.id.as_deref() == Some(id))
                {
                    *slot = updated;
                }
                self.render_snapshot();
            }
            Err(err) => {
                self.notifier
                    .toast(&format!("No se pudo cambiar el estado: {err}"));
            }
        }
    }

    /// Delete a task. The list only changes when the backend confirms.
    pub async fn delete(&mut self, id: &str) {
        if self.api.delete_task(id).await {
            self.tasks.retain(|task| task.id.as_deref() != Some(id));
            self.render_snapshot();
        } else {
            self.notifier.toast("No se pudo eliminar la tarea");
        }
    }

    /// Render the subset whose titles contain `query`, case-insensitively.
    ///
    /// Purely client-side: no network call, and the snapshot is not mutated,
    /// so an empty query restores the full view.
    pub fn search(&mut self, query: &str) {
        if query.trim().is_empty() {
            self.render_snapshot();
            return;
        }
        let filtered = self.filtered_tasks(query);
        render_tasks(&mut self.sink, &filtered, &self.labels);
    }

    /// The snapshot tasks matching a title search, in snapshot order.
    pub fn filtered_tasks(&self, query: &str) -> Vec<Task> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.tasks.clone();
        }
        self.tasks
            .iter()
            .filter(|task| task.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}
