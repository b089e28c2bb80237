//! Backend entry-point: migrations, pool, and HTTP server bootstrap.

use actix_web::web;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use docudesk::inbound::http::health::HealthState;
use docudesk::outbound::persistence::{self, DbPool, PoolConfig};
use docudesk::server::{ServerConfig, ServerOptions, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let options = ServerOptions::parse();

    // The migration harness is synchronous.
    let database_url = options.database_url.clone();
    tokio::task::spawn_blocking(move || persistence::run_pending_migrations(&database_url))
        .await
        .map_err(std::io::Error::other)?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(
        PoolConfig::new(&options.database_url).with_max_size(options.pool_size),
    )
    .await
    .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(options.bind_addr, pool),
    )?;
    server.await
}
