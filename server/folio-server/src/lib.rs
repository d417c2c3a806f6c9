//! # folio-server
//!
//! Development API server for the Portfolio Analytics Dashboard. Serves the
//! four portfolio categories from sample data.

pub mod mock;
pub mod routes;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use folio_core::PortfolioData;
use thiserror::Error;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Default listen address
pub const DEFAULT_ADDR: &str = "127.0.0.1";

/// Default listen port
pub const DEFAULT_PORT: u16 = 3001;

// ============================================================================
// CONFIGURATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid listen address {0:?}")]
    Addr(String),
    #[error("invalid port {0:?}")]
    Port(String),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `FOLIO_ADDR` and `PORT`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("FOLIO_ADDR").ok(),
            std::env::var("PORT").ok(),
        )
    }

    pub fn from_vars(addr: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr.parse().map_err(|_| ConfigError::Addr(addr))?;

        let port = match port {
            Some(port) => port.parse().map_err(|_| ConfigError::Port(port))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { addr, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

// ============================================================================
// ROUTER
// ============================================================================

/// Shared handler state
#[derive(Clone)]
pub struct ServerState {
    pub portfolio: Arc<PortfolioData>,
}

impl ServerState {
    pub fn new(portfolio: PortfolioData) -> Self {
        Self {
            portfolio: Arc::new(portfolio),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new(PortfolioData::sample())
    }
}

/// All API routes with permissive CORS for local development
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/prices", get(routes::prices))
        .route("/weights", get(routes::weights))
        .route("/risk", get(routes::risk))
        .route("/optimization", get(routes::optimization))
        .route("/portfolio", get(routes::portfolio))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
