//! HTTP server configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Server configuration with serde defaults, so a partial config
/// file or payload fills in the rest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path of the document log (default: "./books.log")
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// CORS allowed origins; empty means every origin is allowed
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_path() -> PathBuf {
    PathBuf::from("./books.log")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_path: default_data_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Socket address string for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
