#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Binary that serves the Torus Life board over HTTP.

use anyhow::Context as _;
use clap::Parser;
use torus_life_http::{app, config::Args, AppState};
use torus_life_rendering::PageTemplate;
use torus_life_world::World;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let config = args
        .world_config()
        .context("invalid board configuration")?;
    let page = PageTemplate::load(&args.template)
        .with_context(|| format!("failed to prepare {}", args.template.display()))?;

    info!(
        width = config.size().width(),
        height = config.size().height(),
        density = config.seeding().density().get(),
        "board ready"
    );
    let state = AppState::new(World::new(config), page, args.static_dir.clone());

    let address = args.socket_addr();
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "server listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
