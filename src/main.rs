mod config;
mod error;
mod routes;
mod services;
mod state;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let gotrue = services::gotrue::GoTrueClient::new(&config.gotrue).expect("auth client init failed");
    tracing::info!(
        auth_url = %config.gotrue.url,
        cookie_secure = config.cookie_secure,
        email_redirect = config.gotrue.email_redirect_url.as_deref().unwrap_or("-"),
        "auth backend configured"
    );

    let state = state::AppState::new(gotrue, config.cookie_secure);
    let app = routes::app(state).expect("leptos app init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "mealdash listening");
    axum::serve(listener, app).await.expect("server failed");
}
