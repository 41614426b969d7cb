//! claimcheckd — claim analysis daemon.
//!
//! Serves [`ClaimAnalyzer`](claimcheck::ClaimAnalyzer) over HTTP.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use claimcheck::server::config::{Config, HF_TOKEN_ENV_VAR, Secrets};
use claimcheck::server::{AppState, router};
use claimcheck::{ClaimAnalyzer, ClaimcheckError};

/// claimcheckd — fake news claim analyzer service.
#[derive(clap::Parser)]
#[command(name = "claimcheckd")]
#[command(version = claimcheck::PKG_VERSION)]
#[command(about = "Claim analysis HTTP service")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Address to bind to, overriding the config file.
    #[arg(short, long, env = "CLAIMCHECK_ADDRESS")]
    address: Option<String>,
}

/// CLI definition; `--version` carries the git metadata, `-V` the bare version.
fn command() -> clap::Command {
    Args::command().long_version(claimcheck::version_string())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let matches = command().get_matches();
    let args = Args::from_arg_matches(&matches)?;

    // Load configuration
    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    let token = secrets.huggingface_token().unwrap_or_else(|| {
        warn!(
            env = HF_TOKEN_ENV_VAR,
            "no HuggingFace token configured, model requests will be unauthenticated"
        );
        String::new()
    });

    let client = config.model.build_client(token)?;
    let analyzer = ClaimAnalyzer::new(Arc::new(client));
    let state = AppState::new(analyzer, config.limits);

    // Parse address
    let address = args.address.unwrap_or(config.server.address);
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| ClaimcheckError::Configuration(format!("Invalid address {address:?}: {e}")))?;

    info!(
        version = claimcheck::version_string(),
        %addr,
        endpoint = %config.model.endpoint,
        timeout_secs = config.model.timeout_secs,
        "claimcheckd starting"
    );

    let app = router(state, config.server.cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
