//! CLI command implementations

use std::sync::Arc;

use crate::catalog::FileCatalog;
use crate::http::{HttpServer, ServerConfig};
use crate::observability::Logger;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed CLI invocation
pub fn run_command(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Serve {
            host,
            port,
            data,
            cors_origins,
        } => serve(ServerConfig {
            host,
            port,
            data_path: data,
            cors_origins,
        }),
    }
}

/// Open the catalog, then serve until stopped.
///
/// The catalog open is the single connect step of the process; if it
/// fails there is nothing to serve and boot aborts.
fn serve(config: ServerConfig) -> CliResult<()> {
    let data_path = config.data_path.display().to_string();
    Logger::info("BOOT_STARTED", &[("data_path", data_path.as_str())]);

    let catalog = FileCatalog::open(&config.data_path).inspect_err(|e| {
        Logger::fatal(
            "CATALOG_OPEN_FAILED",
            &[("cause", &e.to_string()), ("data_path", data_path.as_str())],
        );
    })?;

    Logger::info(
        "CATALOG_OPENED",
        &[
            ("books", &catalog.len().to_string()),
            ("data_path", data_path.as_str()),
        ],
    );

    let server = HttpServer::with_config(config, Arc::new(catalog));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("server error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Command;
    use std::path::PathBuf;

    #[test]
    fn test_serve_args_map_onto_config() {
        let command = Command::Serve {
            host: "127.0.0.1".to_string(),
            port: 4000,
            data: PathBuf::from("/tmp/books.log"),
            cors_origins: vec!["http://localhost:5173".to_string()],
        };

        let Command::Serve {
            host,
            port,
            data,
            cors_origins,
        } = command;
        let config = ServerConfig {
            host,
            port,
            data_path: data,
            cors_origins,
        };

        assert_eq!(config.socket_addr(), "127.0.0.1:4000");
        assert_eq!(config.cors_origins.len(), 1);
    }
}
