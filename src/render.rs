//! List reconciliation over an abstract view sink
//!
//! `render_tasks` rebuilds the pending and completed lists from scratch on
//! every call; there is no incremental diffing. Given the same input sequence
//! it drives the sink to the same final content, so re-renders are idempotent.

use crate::card::{make_task_card, TaskCard};
use crate::config::LabelsConfig;
use crate::task::{is_completed, Task};

/// The two list containers a task can render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Pending,
    Completed,
}

/// Count displays updated on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCounts {
    pub pending: usize,
    pub completed: usize,
    pub total: usize,
}

/// Minimal presentation surface the reconciler drives.
///
/// Implementations own element identity (terminal buffer, widget tree, test
/// recorder); the reconciler only appends, clears, and toggles visibility.
pub trait ViewSink {
    fn clear_list(&mut self, list: ListKind);
    fn append_card(&mut self, list: ListKind, card: TaskCard);
    fn set_empty_visible(&mut self, list: ListKind, visible: bool);
    fn set_counts(&mut self, counts: ListCounts);
}

/// Rebuild both lists from a task sequence.
///
/// Stable partition: tasks keep their relative input order inside each list.
pub fn render_tasks<S: ViewSink>(sink: &mut S, tasks: &[Task], labels: &LabelsConfig) {
    let (pending, completed): (Vec<&Task>, Vec<&Task>) =
        tasks.iter().partition(|task| !is_completed(task));

    sink.clear_list(ListKind::Pending);
    sink.clear_list(ListKind::Completed);

    for task in &pending {
        sink.append_card(ListKind::Pending, make_task_card(task, labels));
    }
    for task in &completed {
        sink.append_card(ListKind::Completed, make_task_card(task, labels));
    }

    sink.set_empty_visible(ListKind::Pending, pending.is_empty());
    sink.set_empty_visible(ListKind::Completed, completed.is_empty());

    sink.set_counts(ListCounts {
        pending: pending.len(),
        completed: completed.len(),
        total: pending.len() + completed.len(),
    });
}
