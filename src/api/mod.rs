//! HTTP layer: wire types, retry policy, and the backend client

pub mod client;
pub mod retry;
pub mod types;

pub use client::ApiClient;
pub use retry::RetryPolicy;
pub use types::{Consultation, DiagnosisResponse, ServiceStatus};
