#[cfg(test)]
#[macro_use]
extern crate serde_json;

use axum::{extract::FromRef, Router};

use attendance_config::config;
use attendance_database::{Database, DatabaseInfo};
use tokio::net::TcpListener;

use crate::discord::Discord;

mod discord;
mod routes;
mod util;

#[derive(Clone)]
pub struct AppState {
    pub database: Database,
    pub discord: Discord,
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.database.clone()
    }
}

impl FromRef<AppState> for Discord {
    fn from_ref(state: &AppState) -> Self {
        state.discord.clone()
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new().merge(routes::router()).with_state(state)
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Configure logging and environment
    let _sentry = attendance_config::setup_logging().await;

    let config = config().await;

    let database = DatabaseInfo::Auto
        .connect()
        .await
        .map_err(std::io::Error::other)?;

    if database.migrate_database().await.is_err() {
        return Err(std::io::Error::other("failed to migrate the database"));
    }

    let state = AppState {
        database,
        discord: Discord::new(config.discord, &config.api.roles.mentor),
    };

    // Configure TCP listener and bind
    let listener = TcpListener::bind(&config.api.listen).await?;
    log::info!("Listening on {}", config.api.listen);

    axum::serve(listener, app(state).into_make_service()).await
}
