//! Server configuration: CLI/environment options and the runtime config.

use std::net::SocketAddr;

use clap::Parser;

use crate::outbound::persistence::DbPool;

/// Command-line and environment options for the API server.
#[derive(Debug, Clone, Parser)]
#[command(name = "docudesk", about = "Document-management dashboard API server")]
pub struct ServerOptions {
    /// PostgreSQL connection string.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Socket address the HTTP listener binds to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// Maximum number of connections in the database pool.
    #[arg(long, env = "DB_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,
}

/// Runtime configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }

    /// The socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
