// src/main.rs
use boardgame_gateway::cli::Args;
use boardgame_gateway::config::Config;
use boardgame_gateway::error::AppError;
use boardgame_gateway::logging::setup_logging;
use boardgame_gateway::server::{self, AppState};
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(Config::get_config_path);
    let mut config = Config::load_with_file(&config_path).await?;

    // CLI flags win over the file and the environment
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config.validate()?;

    if args.list_config {
        config.display(&config_path);
        return Ok(());
    }

    // Kept alive until main returns so buffered log lines are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    info!(
        "Starting {} v{} (logs: {log_file_path})",
        boardgame_gateway::NAME,
        boardgame_gateway::VERSION
    );

    let state = AppState::from_config(&config)?;
    server::serve(state, config.port).await
}
