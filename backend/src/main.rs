//! Backend entry-point: loads settings, checks the store, and serves HTTP.

use actix_web::web;
use color_eyre::eyre::{Context, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::inbound::http::health::HealthState;
use users_api::outbound::persistence::DbPool;
use users_api::server::{ServerConfig, create_server};
use users_api::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let pool_config = settings.pool_config()?;

    let db_pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to build database pool")?;
    db_pool
        .probe()
        .await
        .wrap_err("database is unreachable at startup")?;

    let config = ServerConfig::new(bind_addr, db_pool);
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).wrap_err("failed to start server")?;

    info!(%bind_addr, "server listening");
    server.await.wrap_err("server terminated abnormally")
}
