use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatekeeper_backend::{
    app,
    config::Config,
    db::connection::create_pool,
    state::AppState,
    utils::email::{Mailer, SmtpMailer},
};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatekeeper_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        database_url = %config.database_url,
        app_url = %config.app_url,
        smtp_host = %config.smtp_host,
        smtp_username = %mask_secret(&config.smtp_username),
        smtp_password = %mask_secret(&config.smtp_password),
        smtp_skip_send = config.smtp_skip_send,
        "Loaded configuration from environment/.env"
    );

    // Initialize database
    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Outbound mail transport, constructed once and injected
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config)?);

    let port = config.port;
    let state = AppState::new(pool, config, mailer);
    let app = app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
