//! # mspcat Architecture
//!
//! mspcat is a **UI-agnostic service catalog library** for managed service
//! providers. The command-line client in `cli/` is one front end over it; the
//! same core could sit behind a web page or a desktop app.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalog and the RecordStore                     │
//! │  - Loads once, saves a full snapshot after each mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation over &Catalog/&mut Catalog  │
//! │  - Returns CmdResult, no I/O except export file writes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (catalog.rs, model.rs, store/)             │
//! │  - Catalog: ordered Vec<Service>, unique ids                │
//! │  - RecordStore: load/save of a serialized snapshot          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Filtering ([`filter`]) and statistics ([`commands::stats`]) are pure
//! functions recomputed from the current catalog on every call.
//!
//! ## Forms
//!
//! Editing goes through [`form::ServiceForm`], a flat all-text DTO. A UI
//! fills one in (blank for new services, [`form::to_form`] for edits) and
//! submits it; [`form::from_form`] turns it back into a
//! [`model::Service`], recomputing the pricing display text.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and root controller
//! - [`commands`]: Business logic for each operation, including export
//! - [`catalog`]: The in-memory catalog model
//! - [`filter`]: Search and category filtering
//! - [`form`]: Form DTO and its two-way mapping
//! - [`store`]: Snapshot storage abstraction and implementations
//! - [`model`]: Core data types (`Service`, `Pricing`, `Category`, ...)
//! - [`config`]: Configuration management
//! - [`init`]: Builds the file-backed API for the binary
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
