use folio_server::{ServerConfig, ServerState, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("folio_server=debug,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let app = router(ServerState::default());

    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    tracing::info!("folio-server listening on http://{}", config.socket_addr());

    axum::serve(listener, app).await?;
    Ok(())
}
