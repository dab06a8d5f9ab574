use std::process::ExitCode;
use std::sync::Arc;

use library_api::{handlers, logging, microsvc, Config, JsonFileStore};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init_logging(&config);

    let store = JsonFileStore::new(config.data_file.clone());
    info!(data_file = %store.path().display(), "using book document");
    let service = Arc::new(handlers::service(store));

    let listener = match TcpListener::bind(config.listen_addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr(), error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Library Management System API is running on http://localhost:{}",
        config.port
    );

    if let Err(e) = microsvc::serve(service, listener).await {
        error!(error = %e, "server error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
