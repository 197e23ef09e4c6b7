use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use yaga_application::ExerciseSessionUseCase;
use yaga_infrastructure::{ConfigService, InMemorySessionRepository};
use yaga_server::ExerciseServer;

#[derive(Parser, Debug)]
#[command(name = "yaga-server")]
#[command(about = "Serve the YAGA front end and chord practice sessions", long_about = None)]
struct Args {
    /// Path to config.toml (default: ~/.config/yaga/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overrides server.bind_address
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory of front-end assets, overrides server.static_dir
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let mut config_service = ConfigService::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config_service.config_mut().server.bind_address = bind;
    }
    if let Some(static_dir) = args.static_dir {
        config_service.config_mut().server.static_dir = static_dir;
    }
    config_service.validate()?;
    tracing::info!("Configuration source: {:?}", config_service.source());
    let config = config_service.into_config();

    let repository = Arc::new(InMemorySessionRepository::new());
    let usecase = Arc::new(ExerciseSessionUseCase::new(repository, config.session));
    let server = ExerciseServer::bind(&config.server, usecase)?;

    match server.local_addr() {
        Some(addr) => tracing::info!("Listening on http://{}", addr),
        None => tracing::info!("Listening on {}", config.server.bind_address),
    }
    tracing::info!("Serving static files from {}", config.server.static_dir.display());

    let shutdown = server.shutdown_handle();
    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutting down");
            shutdown.shutdown();
        }
    }

    Ok(())
}
