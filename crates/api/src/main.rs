use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;

use vitrine_infra::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    vitrine_observability::init();

    let config = AppConfig::from_env().context("reading configuration")?;
    let services = vitrine_api::app::services::build_services(&config)
        .await
        .context("wiring services")?;

    let app = vitrine_api::app::build_app(Arc::new(services), &config.allowed_origins());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
