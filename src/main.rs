mod catalog;
mod config;
mod render;
mod upstream;
mod web;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use render::TemplateDir;
use upstream::CatalogClient;
use web::{AppState, DetailsPage};

#[derive(Parser)]
#[command(name = "unifront")]
#[command(
    about = "A web gateway for unified model catalogs",
    version = "0.1.0"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Address to listen on, overriding the configuration
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unifront=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::read_config(cli.config);

    let api_base = config
        .upstream
        .api_base
        .as_deref()
        .unwrap_or(config::DEFAULT_API_BASE);

    let catalog = match CatalogClient::with_api_base(api_base) {
        Ok(client) => client,
        Err(err) => die::die!("{}", err),
    };

    info!("using model catalog at {}", api_base);

    let templates = config
        .pages
        .templates
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_TEMPLATES_DIR));

    let state = AppState {
        catalog: Arc::new(catalog),
        renderer: Arc::new(TemplateDir::new(templates)),
        details: Arc::new(DetailsPage {
            title: config
                .pages
                .model_details
                .title
                .clone()
                .unwrap_or_else(|| config::DEFAULT_DETAILS_TITLE.to_string()),
            template: config
                .pages
                .model_details
                .template
                .clone()
                .unwrap_or_else(|| config::DEFAULT_DETAILS_TEMPLATE.to_string()),
        }),
    };

    let app = web::create_router(state);

    let listen = cli
        .listen
        .or(config.listen)
        .unwrap_or_else(|| config::DEFAULT_LISTEN.to_string());

    let listener = match tokio::net::TcpListener::bind(&listen).await {
        Ok(listener) => listener,
        Err(err) => die::die!("failed to bind {}: {}", listen, err),
    };

    info!("listening on http://{}", listen);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    if let Err(err) = server.await {
        die::die!("server error: {}", err);
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("received SIGTERM, shutting down");
        },
    }
}
