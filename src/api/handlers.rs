//! HTTP API handlers.

use std::sync::Arc;

use axum::extract::{OriginalUri, State};
use axum::Json;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::Config;
use crate::error::{ApiError, Result};

/// Application name reported by `/api/info`.
pub const APP_NAME: &str = "multicloud-nodejs-app";

/// Welcome banner returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to MultiCloud Node.js Application!";

/// Application state shared with handlers.
///
/// Holds the configuration snapshot behind an `Arc`; nothing here is mutated
/// after startup, so handlers share it freely.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration snapshot taken at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Create app state from a configuration snapshot.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Root endpoint response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    /// Welcome banner.
    pub message: &'static str,
    /// Time the body was built, RFC 3339.
    pub timestamp: String,
    /// Deployment environment.
    pub environment: String,
    /// Application version.
    pub version: String,
    /// Cloud platform.
    pub platform: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Time the body was built, RFC 3339.
    pub timestamp: String,
    /// Deployment environment.
    pub environment: String,
    /// Application version.
    pub version: String,
}

/// Deployment metadata response.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Application name.
    pub app: &'static str,
    /// Application version.
    pub version: String,
    /// Deployment environment.
    pub environment: String,
    /// Cloud platform.
    pub platform: String,
    /// Cluster region.
    pub region: String,
    /// Cluster name.
    pub cluster: String,
}

/// Current instant as an RFC 3339 string, evaluated at body-construction time.
fn timestamp_now() -> Result<String> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}

/// Root handler - welcome banner plus environment summary.
pub async fn root(State(state): State<AppState>) -> Result<Json<RootResponse>> {
    let config = &state.config;

    Ok(Json(RootResponse {
        message: WELCOME_MESSAGE,
        timestamp: timestamp_now()?,
        environment: config.node_env.clone(),
        version: config.app_version.clone(),
        platform: config.cloud_platform.clone(),
    }))
}

/// Health check handler - always reports healthy while the process is up.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let config = &state.config;

    Ok(Json(HealthResponse {
        status: "healthy",
        timestamp: timestamp_now()?,
        environment: config.node_env.clone(),
        version: config.app_version.clone(),
    }))
}

/// Info handler - full deployment metadata.
pub async fn api_info(State(state): State<AppState>) -> Result<Json<InfoResponse>> {
    let config = &state.config;

    Ok(Json(InfoResponse {
        app: APP_NAME,
        version: config.app_version.clone(),
        environment: config.node_env.clone(),
        platform: config.cloud_platform.clone(),
        region: config.cluster_region.clone(),
        cluster: config.cluster_name.clone(),
    }))
}

/// Fallback handler - echoes the unmatched path, query string included.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    ApiError::NotFound { path }
}
