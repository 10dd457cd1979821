//! Events, users and attendance REST API.
//!
//! `cargo test` runs the unit and router tests without a database. The
//! Postgres-backed scenarios in `tests/scenarios.rs` are ignored by default;
//! run everything with `DATABASE_URL=postgres://... cargo test -- --include-ignored`.

pub mod app;
pub mod attendees;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod events;
pub mod extract;
pub mod state;
pub mod utils;
