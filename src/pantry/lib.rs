//! # Pantry Architecture
//!
//! Pantry is a **UI-agnostic inventory library**. It tracks named pantry items, each
//! with a category and a quantity, in a keyed-document collection. The command-line
//! client is one presentation of it; a web page or a TUI would call the same service.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (api.rs)                                     │
//! │  - Owns the store and the in-memory snapshot                │
//! │  - Refreshes the snapshot after every mutation              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Increment/decrement rules, search filter, counts         │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract InventoryStore trait                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Item Rules
//!
//! - The item name is the document key; two items never share a name.
//! - Adding an absent name creates it with quantity 1. Adding an existing name
//!   bumps its quantity and leaves its category alone.
//! - Removing the last unit deletes the item. A stored quantity is never 0.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (service, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The inventory service, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`InventoryItem`, `Document`, `Category`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
