use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt::time::LocalTime, EnvFilter};

mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

pub use app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("crm_api=debug,record_store=debug,tower_http=debug")
            }),
        )
        .with_timer(LocalTime::rfc_3339())
        .init();

    let settings = config::read_config().context("failed to read configuration")?;
    tracing::debug!(?settings, "configuration loaded");

    let store = factory::create_record_store(&settings.record_store)
        .context("failed to build record store client")?;
    let app_state = AppState::new(store, settings.record_store.page_size);
    let app = router::create(app_state, &settings.application);

    let address = settings.application.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    tracing::info!("listening on {}", address);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
