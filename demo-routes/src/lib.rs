//! Demo Routes
//!
//! A small web application with a handful of independent demo pages.
//!
//! # Routes
//! - `/compliments`: validated form that samples compliments without replacement
//! - `/animal_facts`: fixed lookup of five animal facts
//! - `/image_filter`: upload an image, bound it to 500x500 and apply one filter
//! - `/gif_search`: proxy to the Tenor search API
//!
//! # Architecture
//! - Configuration is loaded once at startup and moved into the router state
//! - Handlers keep no state between requests; the image directory is the
//!   only thing shared, and uploads with the same stored name overwrite
//!   each other

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::get,
};
use log::{info, warn};
use tokio::{net::TcpListener, signal};
use tower_http::services::ServeDir;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod storage;

use config::Config;
use routes::{
    animal_facts_handler, compliments_form_handler, compliments_results_handler,
    gif_search_form_handler, gif_search_handler, home_handler, image_filter_form_handler,
    image_filter_handler,
};
use state::State;

const UPLOAD_LIMIT: usize = 16 * 1024 * 1024;

/// Sets up the logger with timestamp, level, file name, line number and message.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("hyper", log::LevelFilter::Warn)
        .filter_module("reqwest", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

pub fn router(state: Arc<State>) -> Router {
    let static_dir = ServeDir::new(&state.config.storage.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route("/compliments", get(compliments_form_handler))
        .route("/compliments_results", get(compliments_results_handler))
        .route(
            "/animal_facts",
            get(animal_facts_handler).post(animal_facts_handler),
        )
        .route(
            "/image_filter",
            get(image_filter_form_handler).post(image_filter_handler),
        )
        .route(
            "/gif_search",
            get(gif_search_form_handler).post(gif_search_handler),
        )
        .nest_service("/static", static_dir)
        .layer(DefaultBodyLimit::max(UPLOAD_LIMIT))
        .with_state(state)
}

pub async fn serve(config: Config) -> Result<()> {
    info!("Initializing state...");
    let state = State::new(config)?;
    info!("Images stored in {}", state.images.dir().display());

    let address = state.config.address();
    let app = router(state);

    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("bind {address} failed"))?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .with_context(|| "server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
