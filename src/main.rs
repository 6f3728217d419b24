//! Footprint - monthly carbon footprint estimation service.
//!
//! # API Endpoints
//!
//! - `POST /predict` - Footprint total for a survey profile
//! - `POST /footprint` - Full report: breakdown, comparisons, recommendations
//! - `GET /benchmarks` - Reference footprints
//! - `GET /health` - Health check
//!
//! # Configuration
//!
//! - `FOOTPRINT_PORT` - Listen port (default 3000)
//! - `RUST_LOG` - Log filter (default `footprint=info`)

use std::env;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use footprint::api::{AppState, router};
use footprint::factors::STANDARD;

/// Default port if not specified via environment variable.
const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("footprint=info".parse()?))
        .init();

    let port: u16 = env::var("FOOTPRINT_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    info!(port, "Starting footprint server");

    let state = AppState { factors: STANDARD };
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;

    info!(%addr, "Footprint is listening");

    axum::serve(listener, app).await?;

    Ok(())
}
