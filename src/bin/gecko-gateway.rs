use clap::Parser;
use std::fs::OpenOptions;
use std::future::IntoFuture;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use gecko_gateway::config::LogFormat;
use gecko_gateway::{GatewayConfig, GeckoError, gateway};

#[derive(Parser)]
#[command(
    name = "gecko-gateway",
    version,
    about = "Aggregating HTTP gateway over the CoinGecko API"
)]
struct Cli {
    /// Path to the YAML config
    #[arg(short = 'c', long = "config")]
    config: PathBuf,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cfg = match GatewayConfig::from_file(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("can't load config from {}: {e}", cli.config.display());
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&cfg) {
        eprintln!("can't initialise logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cfg).await {
        tracing::error!("gateway stopped: {e}");
        std::process::exit(1);
    }
}

fn init_logging(cfg: &GatewayConfig) -> Result<(), std::io::Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.app.log_level));

    let writer = match &cfg.app.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(std::io::stdout.and(Mutex::new(file)))
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);
    match cfg.app.log_format {
        LogFormat::Json => builder.json().with_ansi(false).init(),
        LogFormat::Text => builder.with_ansi(cfg.app.log_file.is_none()).init(),
    }
    Ok(())
}

async fn run(cfg: GatewayConfig) -> Result<(), GeckoError> {
    tracing::debug!("application is setting up");

    let provider = cfg.coingecko.build_provider()?;
    let janitor = provider
        .cache()
        .spawn_janitor(cfg.coingecko.cache_sweep_interval());

    let app = gateway::router(gateway::AppState::with_request_timeout(
        provider,
        cfg.app.request_timeout(),
    ));

    let listener = tokio::net::TcpListener::bind(&cfg.app.address)
        .await
        .map_err(|e| GeckoError::Config(format!("can't bind {}: {e}", cfg.app.address)))?;
    tracing::info!("starting coingecko gateway at {}", cfg.app.address);

    let stop = Arc::new(Notify::new());
    let drain = Arc::clone(&stop);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move { drain.notified().await })
        .into_future();
    let mut server = std::pin::pin!(server);

    let grace = cfg.app.shutdown_timeout();
    let served = tokio::select! {
        res = &mut server => res,
        () = shutdown_signal() => {
            stop.notify_one();
            match tokio::time::timeout(grace, &mut server).await {
                Ok(res) => res,
                Err(_) => {
                    tracing::warn!(?grace, "in-flight requests did not finish, forcing shutdown");
                    Ok(())
                }
            }
        }
    };
    janitor.abort();

    served.map_err(|e| GeckoError::Config(format!("server error: {e}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("can't listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received system interrupt, graceful shutdown...");
}
