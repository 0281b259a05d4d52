mod catalog;
mod config;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to read .env: {e}");
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let jobs = catalog::load_catalog(&config.jobs_file)
        .await
        .expect("job catalog failed to load");
    let state = state::AppState::new(jobs);

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build router");
            std::process::exit(1);
        }
    };
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, jobs_file = %config.jobs_file.display(), "brigade listening");
    axum::serve(listener, app).await.expect("server failed");
}
