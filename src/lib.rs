//! tablero - Task List Client Library
//!
//! This library provides the core functionality for the tablero CLI,
//! synchronizing a task list with a REST backend and rendering it into
//! pending/completed lists.
//!
//! # Core Concepts
//!
//! - **Tasks**: records with a dual legacy/current completion representation,
//!   normalized by a single function
//! - **API Client**: typed CRUD wrapper over `/tasks`, network injected as a
//!   transport capability
//! - **Cards**: pure presentational projections of a task
//! - **Reconciliation**: each render rebuilds both lists fresh from the latest
//!   server-derived task set
//! - **Controller**: wires user actions to the client and re-renders
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `.tablero.toml`
//! - `error`: error types and result aliases
//! - `task`: task records and status normalization
//! - `api`: transport capability and REST client
//! - `card`: task view-card construction
//! - `render`: view sink and list reconciler
//! - `controller`: interaction wiring and notifier capability
//! - `output`: terminal sink, console notifier, JSON envelopes

pub mod api;
pub mod card;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod output;
pub mod render;
pub mod task;

pub use error::{Error, Result};
