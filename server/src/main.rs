//! canvaslift-server binary, a thin CLI shell over the [`canvaslift_server`] library crate.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use canvaslift_core::{load_lift_config, LiftConfig, LiftError};
use canvaslift_server::client::GenerationClient;
use canvaslift_server::{router, AppContext};

// ---------------------------------------------------------------------------
// CLI definition (clap derive)
// ---------------------------------------------------------------------------

/// Generation service that lifts canvas elements into shared components.
#[derive(Parser)]
#[command(name = "canvaslift-server", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root directory (default: current directory)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Port to listen on (default: PORT, then .canvaslift.toml)
    #[arg(long)]
    port: Option<u16>,

    /// Bind to 0.0.0.0 instead of 127.0.0.1 (localhost)
    #[arg(long)]
    bind_all: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a running service to generate a component
    Request {
        /// Element type id
        component_id: String,

        /// Service URL (default: service_url from .canvaslift.toml)
        #[arg(long)]
        url: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn resolve_config(root: Option<PathBuf>) -> LiftConfig {
    let root = match root {
        Some(r) => r,
        None => std::env::current_dir().unwrap_or_else(|e| {
            eprintln!("Error: Could not determine current directory: {e}");
            std::process::exit(1);
        }),
    };
    let root = root.canonicalize().unwrap_or_else(|e| {
        eprintln!("Error: Path '{}' not found: {}", root.display(), e);
        std::process::exit(1);
    });
    load_lift_config(&root)
}

/// `--port` wins, then `PORT`, then the project config.
fn resolve_port(flag: Option<u16>, config: &LiftConfig) -> u16 {
    flag.or_else(|| std::env::var("PORT").ok().and_then(|p| p.trim().parse().ok()))
        .unwrap_or(config.port)
}

// ---------------------------------------------------------------------------
// Graceful shutdown signal
// ---------------------------------------------------------------------------

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT, shutting down..."),
                    _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
                }
            }
            Err(e) => {
                error!(error = %e, "Failed to register SIGTERM handler");
                let _ = ctrl_c.await;
                info!("Received SIGINT, shutting down...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        info!("Received Ctrl+C, shutting down...");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("canvaslift=info".parse().expect("static directive")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Request { component_id, url } => {
                let config = resolve_config(cli.root);
                let client = GenerationClient::new(url.unwrap_or(config.service_url));
                match client.generate(&component_id).await {
                    Ok(manifest) => match serde_json::to_string_pretty(&manifest) {
                        Ok(json) => println!("{json}"),
                        Err(e) => {
                            eprintln!("Error: {e}");
                            std::process::exit(1);
                        }
                    },
                    Err(e @ LiftError::ServiceUnavailable { .. }) => {
                        eprintln!("Error: {e}");
                        eprintln!("  Start it with `canvaslift-server` in the project root.");
                        std::process::exit(2);
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
            Commands::Completions { shell } => {
                clap_complete::generate(
                    shell,
                    &mut Cli::command(),
                    "canvaslift-server",
                    &mut std::io::stdout(),
                );
            }
        }
        return;
    }

    let config = resolve_config(cli.root);
    let port = resolve_port(cli.port, &config);
    let bind_addr = if cli.bind_all { "0.0.0.0" } else { "127.0.0.1" };

    info!(
        root = %config.root.display(),
        canvas_page = %config.canvas_page,
        components_dir = %config.components_dir,
        "Serving project"
    );

    let app = router(AppContext::new(config));

    let listener = match tokio::net::TcpListener::bind(format!("{bind_addr}:{port}")).await {
        Ok(l) => l,
        Err(e) => {
            error!(port = port, error = %e, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(port = port, "http://{bind_addr}:{port}");

    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
