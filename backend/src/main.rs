//! Service entry-point: loads settings, wires the users API and health probes,
//! and serves until shutdown.

use actix_web::web;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_api::inbound::http::health::HealthState;
use users_api::server::{ServerConfig, create_server};
use users_api::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_and_validate(std::env::args_os()).map_err(|e| {
        error!(error = %e, "invalid settings");
        std::io::Error::other(e)
    })?;
    info!(
        bind_addr = %settings.bind_addr(),
        base_path = settings.base_path(),
        json_limit = settings.json_limit(),
        "starting users api"
    );

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, ServerConfig::from_settings(&settings))?.await
}
