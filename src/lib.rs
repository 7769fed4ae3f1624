//! MedAssyst v0.3.0 - Terminal Medical Assistant Client
//!
//! A Rust terminal client for the MedAssyst symptom-consultation service:
//! chat-style diagnosis requests, consultation history, a doctor directory,
//! and local severity/specialist heuristics layered on top of a retrying
//! HTTP client.

pub mod errors;
pub mod config;
pub mod api;
pub mod analysis;
pub mod auth;
pub mod store;
pub mod directory;
pub mod analytics;
pub mod cli;
pub mod chat;

// Re-export commonly used types
pub use errors::{AssistError, Result};
