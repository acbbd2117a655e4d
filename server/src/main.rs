use std::process::ExitCode;

use metrodocs::ServerConfig;
use metrodocs_server::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("metrodocs-server: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config: ServerConfig = metrodocs::resolve_config()?;
    metrodocs::logging::init(&config.log_level, config.log_json)?;

    log::info!(
        "Starting metrodocs-server v{} on {}",
        env!("CARGO_PKG_VERSION"),
        config.socket_addr()
    );

    metrodocs_server::serve(&config).await
}
