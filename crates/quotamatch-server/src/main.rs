use quotamatch_server::AppConfig;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .init();

    let config = AppConfig::from_env();
    info!("starting server with config: {:?}", config);

    let app = quotamatch_server::app();

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("server listening on {}", addr);
    info!("API endpoints:");
    info!("  GET  /health         - liveness probe");
    info!("  POST /api/reconcile  - statement reconciliation (multipart: file, members)");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
