//! Command-line interface for tablero
//!
//! This module defines the CLI structure using clap derive macros. Each
//! subcommand maps one user action onto the interaction controller.

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::api::{ReqwestTransport, TaskApi};
use crate::config::Config;
use crate::controller::Controller;
use crate::error::Result;
use crate::output::{emit_success, ConsoleNotifier, TextSink};
use crate::task::{TaskDraft, TaskPatch};

/// tablero - task list client
///
/// Fetches tasks from a REST backend and renders them into pending and
/// completed lists, persisting every change back to the server.
#[derive(Parser, Debug)]
#[command(name = "tablero")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the tasks backend (overrides the config file)
    #[arg(long, global = true, env = "TABLERO_URL")]
    pub url: Option<String>,

    /// Path to a .tablero.toml configuration file
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and render the pending/completed lists
    List {
        /// Filter rendered tasks by title substring (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a task
    Add {
        /// Task title
        title: String,

        /// Free-text description
        #[arg(long)]
        description: Option<String>,

        /// Due date (e.g. "2026-09-15")
        #[arg(long)]
        due: Option<String>,

        /// Priority, 1=low .. 3=high
        #[arg(long)]
        priority: Option<i64>,
    },

    /// Edit a task
    Edit {
        /// Task identifier
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New due date
        #[arg(long)]
        due: Option<String>,

        /// New priority, 1=low .. 3=high
        #[arg(long)]
        priority: Option<i64>,
    },

    /// Toggle a task between pending and completed
    Done {
        /// Task identifier
        id: String,
    },

    /// Delete a task
    Rm {
        /// Task identifier
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = match self.config.as_deref() {
            Some(path) => Config::load(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                Config::load_from_dir(&cwd)
            }
        };
        if let Some(url) = self.url.as_deref() {
            config.server.base_url = url.to_string();
        }

        let api = TaskApi::new(Arc::new(ReqwestTransport::new()), config.server.base_url.clone());
        let notifier = Arc::new(ConsoleNotifier::new(self.quiet));
        let mut controller = Controller::new(api, TextSink::new(), notifier, config.labels);

        match self.command {
            Commands::List { search } => {
                controller.refresh().await;
                let query = search.as_deref().unwrap_or("");
                controller.search(query);
                let data = controller.filtered_tasks(query);
                let human = controller.sink().render();
                emit_success(self.json, self.quiet, "list", &data, &human)?;
            }
            Commands::Add {
                title,
                description,
                due,
                priority,
            } => {
                let draft = TaskDraft {
                    title,
                    description,
                    due_date: due,
                    priority,
                    status: None,
                };
                controller.submit_create(draft).await;
                let human = controller.sink().render();
                emit_success(self.json, self.quiet, "add", &controller.tasks(), &human)?;
            }
            Commands::Edit {
                id,
                title,
                description,
                due,
                priority,
            } => {
                let patch = TaskPatch {
                    title,
                    description,
                    due_date: due,
                    priority,
                    status: None,
                };
                controller.submit_edit(&id, patch).await;
                let human = controller.sink().render();
                emit_success(self.json, self.quiet, "edit", &controller.tasks(), &human)?;
            }
            Commands::Done { id } => {
                controller.refresh().await;
                controller.toggle(&id).await;
                let human = controller.sink().render();
                emit_success(self.json, self.quiet, "done", &controller.tasks(), &human)?;
            }
            Commands::Rm { id } => {
                controller.refresh().await;
                controller.delete(&id).await;
                let human = controller.sink().render();
                emit_success(self.json, self.quiet, "rm", &controller.tasks(), &human)?;
            }
        }

        Ok(())
    }
}
