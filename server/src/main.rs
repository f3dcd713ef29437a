mod db;
mod routes;
mod services;
mod state;

use services::identity::IdentityConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Identity provider is non-fatal: profile creation is disabled if the
    // URL is missing.
    let identity = IdentityConfig::from_env();
    match &identity {
        Some(config) => tracing::info!(provider = %config.base_url, "identity provider configured"),
        None => {
            tracing::warn!("IDENTITY_PROVIDER_URL not set — profile creation disabled");
        }
    }

    let state = state::AppState::new(pool, identity);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "skillmatch api listening");
    axum::serve(listener, app).await.expect("server failed");
}
