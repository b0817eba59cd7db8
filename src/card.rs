//! Presentational card construction for a single task
//!
//! A `TaskCard` is a self-contained value the renderer appends to a list and
//! the controller binds actions to. Construction is pure: missing optional
//! fields drop out of the metadata instead of failing.

use chrono::NaiveDate;

use crate::config::LabelsConfig;
use crate::task::{is_completed, Task};

/// Action affordances exposed on every card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Toggle,
    Edit,
    Delete,
}

/// Renderable projection of one task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskCard {
    /// Title region, the task title verbatim.
    pub title: String,
    /// Metadata region: status label, then priority and due date when present.
    pub meta: String,
    pub completed: bool,
    pub actions: Vec<CardAction>,
}

/// Build the card for a task.
pub fn make_task_card(task: &Task, labels: &LabelsConfig) -> TaskCard {
    let completed = is_completed(task);
    let status_label = if completed {
        labels.completed.as_str()
    } else {
        labels.pending.as_str()
    };

    let mut meta_parts = vec![status_label.to_string()];
    if let Some(priority) = task.priority {
        meta_parts.push(priority_text(priority, labels));
    }
    if let Some(due) = task.due_date.as_deref() {
        meta_parts.push(format!("Vence {}", humanize_date(due)));
    }

    TaskCard {
        title: task.title.clone(),
        meta: meta_parts.join(" · "),
        completed,
        actions: vec![CardAction::Toggle, CardAction::Edit, CardAction::Delete],
    }
}

fn priority_text(priority: i64, labels: &LabelsConfig) -> String {
    match labels.priority_name(priority) {
        Some(name) => format!("Prioridad {name}"),
        None => format!("Prioridad {priority}"),
    }
}

/// Render a due date as day/month/year when it parses, raw text otherwise.
fn humanize_date(value: &str) -> String {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        });
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => value.to_string(),
    }
}
