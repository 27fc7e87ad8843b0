//! Jargon API client
//!
//! A thin typed wrapper over the slang dictionary HTTP service:
//! - [`ApiConfig`]: injected base URL, uniform 10 s default timeout
//! - [`ApiClient`]: one async operation per endpoint, sharing a single
//!   connection pool; safe to call concurrently through `&self`
//! - [`ApiError`]: every transport failure is classified exactly once at
//!   the client boundary, logged, and propagated unchanged
//!
//! The one exception to error propagation is [`ApiClient::health_check`],
//! a liveness probe that absorbs every failure into `false`.
//!
//! Dropping an operation's future cancels the underlying request.

mod client;
mod config;
mod error;

pub use client::ApiClient;
pub use config::{ApiConfig, DEFAULT_TIMEOUT, ENV_BASE_URL, ENV_TIMEOUT_MS};
pub use error::ApiError;
