use backoffice_gate::{config, routes, state};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::GateConfig::from_env().expect("invalid configuration");
    let port = config.port;
    tracing::info!(
        cookie = %config.cookie.name,
        login = %config.paths.login,
        home = %config.paths.home,
        asset_dir = %config.asset_dir.display(),
        "configuration loaded"
    );

    let state = state::AppState::new(config).expect("invalid guard exclusions");
    tracing::debug!(patterns = ?state.exclusions.patterns(), "guard exclusions compiled");

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "backoffice gate listening");
    axum::serve(listener, app).await.expect("server failed");
}
