//! Terminal output: a text view sink, the console notifier, and JSON envelopes.

use serde::Serialize;

use crate::card::TaskCard;
use crate::controller::Notifier;
use crate::error::Result;
use crate::render::{ListCounts, ListKind, ViewSink};

pub const SCHEMA_VERSION: &str = "tablero.v1";

/// `ViewSink` that renders both lists into plain text for the terminal.
///
/// Element identity maps onto two line buffers plus the count/empty-state
/// fields; `render` assembles the final screenful.
#[derive(Debug, Default, Clone)]
pub struct TextSink {
    pending: Vec<String>,
    completed: Vec<String>,
    pending_empty: bool,
    completed_empty: bool,
    counts: Option<ListCounts>,
}

impl TextSink {
    pub fn new() -> Self {
        TextSink::default()
    }

    fn format_card(card: &TaskCard) -> String {
        let mark = if card.completed { "[x]" } else { "[ ]" };
        if card.meta.is_empty() {
            format!("{mark} {}", card.title)
        } else {
            format!("{mark} {} ({})", card.title, card.meta)
        }
    }

    /// Assemble the rendered lists into displayable text.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        let (pending_count, completed_count, total) = match self.counts {
            Some(counts) => (counts.pending, counts.completed, counts.total),
            None => (0, 0, 0),
        };

        lines.push(format!("Pendientes ({pending_count})"));
        if self.pending_empty {
            lines.push("  (sin tareas pendientes)".to_string());
        } else {
            for entry in &self.pending {
                lines.push(format!("  {entry}"));
            }
        }

        lines.push(format!("Completadas ({completed_count})"));
        if self.completed_empty {
            lines.push("  (sin tareas completadas)".to_string());
        } else {
            for entry in &self.completed {
                lines.push(format!("  {entry}"));
            }
        }

        lines.push(format!("Total: {total}"));
        lines.join("\n")
    }
}

impl ViewSink for TextSink {
    fn clear_list(&mut self, list: ListKind) {
        match list {
            ListKind::Pending => self.pending.clear(),
            ListKind::Completed => self.completed.clear(),
        }
    }

    fn append_card(&mut self, list: ListKind, card: TaskCard) {
        let line = Self::format_card(&card);
        match list {
            ListKind::Pending => self.pending.push(line),
            ListKind::Completed => self.completed.push(line),
        }
    }

    fn set_empty_visible(&mut self, list: ListKind, visible: bool) {
        match list {
            ListKind::Pending => self.pending_empty = visible,
            ListKind::Completed => self.completed_empty = visible,
        }
    }

    fn set_counts(&mut self, counts: ListCounts) {
        self.counts = Some(counts);
    }
}

/// Notifier for CLI runs: toasts land on stderr, the loading indicator is a
/// trace event.
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    pub fn new(quiet: bool) -> Self {
        ConsoleNotifier { quiet }
    }
}

impl Notifier for ConsoleNotifier {
    fn toast(&self, message: &str) {
        if !self.quiet {
            eprintln!("aviso: {message}");
        }
    }

    fn set_loading(&self, active: bool) {
        tracing::debug!(active, "loading indicator");
    }
}

/// Emit a success payload, JSON envelope or human text.
pub fn emit_success<T: Serialize>(
    json: bool,
    quiet: bool,
    command: &str,
    data: &T,
    human: &str,
) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a, T: Serialize> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            data: &'a T,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "success",
            data,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if !quiet && !human.is_empty() {
        println!("{human}");
    }
    Ok(())
}

/// Emit an error, JSON envelope or plain stderr line.
pub fn emit_error(command: &str, err: &crate::error::Error, json: bool) -> Result<()> {
    if json {
        #[derive(Serialize)]
        struct Envelope<'a> {
            schema_version: &'static str,
            command: &'a str,
            status: &'static str,
            error: crate::error::JsonError,
        }

        let payload = Envelope {
            schema_version: SCHEMA_VERSION,
            command,
            status: "error",
            error: crate::error::JsonError::from(err),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    eprintln!("error: {err}");
    Ok(())
}

/// Best-effort command name for error envelopes, read before clap parses.
pub fn infer_command_name_from_args() -> String {
    std::env::args()
        .nth(1)
        .filter(|arg| !arg.starts_with('-'))
        .unwrap_or_else(|| "tablero".to_string())
}
