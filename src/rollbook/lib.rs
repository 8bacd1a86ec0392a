//! # Rollbook Architecture
//!
//! Rollbook is a **UI-agnostic student-records library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
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
//! │  API Layer (api.rs)                                         │
//! │  - Facade owning the stores and the dashboard state         │
//! │  - Wires page-reset-on-filter-change and clamp-after-delete │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model, search, pagination, validation, seeder)       │
//! │  - Pure functions over domain types                         │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend over string keys                 │
//! │  - FsBackend (production), MemBackend (testing)             │
//! │  - StudentStore / AuthStore entity stores on top            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! The [`store::StudentStore`] owns the canonical list and mirrors it to
//! storage on every mutation (whole-list overwrite). The search engine and
//! paginator are pure derived views: they read a snapshot, never mutate,
//! and are recomputed from the new state after each change.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! This means the same core could serve a TUI, a web front-end, or any
//! other UI.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`model`]: Core data types (`Student`, `Credential`, `Course`)
//! - [`search`]: Text normalization and the filter engine
//! - [`pagination`]: Page slicing and page-number state
//! - [`validation`]: Per-field form validation
//! - [`seeder`]: Demo-data generation
//! - [`store`]: Storage abstraction, backends, and entity stores
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of
//!   the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod search;
pub mod seeder;
pub mod store;
pub mod validation;
