//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Immutable configuration snapshot, read once at process start.
///
/// Field names match the environment variables they are loaded from
/// (`PORT`, `NODE_ENV`, `APP_VERSION`, `CLOUD_PLATFORM`, `CLUSTER_REGION`,
/// `CLUSTER_NAME`). Every variable is optional and falls back to a default.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listen port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Deployment environment (development, staging, production, ...).
    #[serde(default = "default_environment")]
    pub node_env: String,

    /// Application version string reported to clients.
    #[serde(default = "default_version")]
    pub app_version: String,

    /// Cloud platform the service is deployed on (aws, gcp, azure, ...).
    #[serde(default = "default_unknown")]
    pub cloud_platform: String,

    /// Region of the hosting cluster.
    #[serde(default = "default_unknown")]
    pub cluster_region: String,

    /// Name of the hosting cluster.
    #[serde(default = "default_unknown")]
    pub cluster_name: String,
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

fn default_unknown() -> String {
    "unknown".to_string()
}

impl Config {
    /// Load configuration from environment, reading a .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            node_env: default_environment(),
            app_version: default_version(),
            cloud_platform: default_unknown(),
            cluster_region: default_unknown(),
            cluster_name: default_unknown(),
        }
    }
}
