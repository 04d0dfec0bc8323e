use lms_frontend::{
    config::{get_config, init_config},
    router, AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lms_frontend=debug,tower_http=info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let state = AppState::new(config)?;
    let app = router(state);

    let listener = TcpListener::bind(&config.server_address).await?;
    info!(
        address = %listener.local_addr()?,
        backend = %config.backend_url,
        "lms-frontend listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
