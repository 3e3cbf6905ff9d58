//! # Phonebook Architecture
//!
//! Phonebook keeps contact records in a single CSV file and is driven by an
//! interactive menu. The library holds everything except the terminal loop, which
//! lives in the binary's `cli` module.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, rendering                            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per menu operation                            │
//! │  - Returns `CmdResult` (records + messages), never prints   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `Phonebook<B>`: ordered records, synced on every change  │
//! │  - `RecordBackend`: CsvBackend (production), MemBackend     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Strategy
//!
//! Store and command logic are unit tested against `MemBackend`; the CSV
//! backend is tested against temp dirs; the binary is exercised end to end
//! in `tests/` by feeding scripted stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Logic for each menu operation
//! - [`store`]: Record store and backends
//! - [`model`]: `Record` and `Field`
//! - [`config`]: User preferences
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
