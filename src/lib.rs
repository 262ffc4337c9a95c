//! MultiCloud info service.
//!
//! A small HTTP service that reports deployment metadata (environment,
//! version, cloud platform, cluster) read from environment variables at
//! startup. Three GET endpoints plus JSON 404/500 handling:
//!
//! ```text
//! GET /          -> welcome banner with environment/version/platform
//! GET /health    -> liveness probe
//! GET /api/info  -> full deployment metadata
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Error types and the HTTP error boundary
//! - [`api`]: Handlers, router, and middleware

pub mod api;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ApiError, Result, ServerError};
