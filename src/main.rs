//! srvdir - a themed directory server.
//!
//! This binary parses the CLI, builds the credential store, and starts
//! the HTTP server.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use srvdir::{
    auth::htpasswd,
    config::{Cli, Command, HtpasswdConfig, ServeConfig},
    server::{create_router, RouterConfig},
    CredentialStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Htpasswd(config) => run_htpasswd(config),
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let root = match config.directory.canonicalize() {
        Ok(root) => root,
        Err(e) => {
            error!("Cannot resolve {}: {}", config.directory.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let credentials = match build_credentials(&config) {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("Credential error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Configuration:");
    info!("  Served root: {}", root.display());
    info!("  Theme: {}", config.theme);
    match &credentials {
        Some(store) => info!("  Auth: enabled ({} user(s))", store.len()),
        None => warn!("  Auth: disabled - the directory is publicly accessible"),
    }

    let mut router_config = RouterConfig::new(&config.theme).with_tracing(!config.no_tracing);
    if let Some(store) = credentials {
        router_config = router_config.with_credentials(store);
    }

    let router = create_router(root.clone(), router_config);

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Serving {} at http://{}", root.display(), addr);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Build the credential store from the CLI options, if any.
fn build_credentials(config: &ServeConfig) -> Result<Option<CredentialStore>, String> {
    if let Some(ref auth) = config.auth {
        return CredentialStore::from_inline(auth).map(Some);
    }

    if let Some(ref path) = config.auth_file {
        let store = htpasswd::load(path).map_err(|e| format!("reading auth file: {e}"))?;
        if store.is_empty() {
            return Err(format!(
                "auth file {} contains no usable credentials",
                path.display()
            ));
        }
        return Ok(Some(store));
    }

    Ok(None)
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "srvdir=debug,tower_http=debug"
    } else {
        "srvdir=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// =============================================================================
// Htpasswd Command
// =============================================================================

fn run_htpasswd(config: HtpasswdConfig) -> ExitCode {
    match htpasswd::run(&config.file, &config.username) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
