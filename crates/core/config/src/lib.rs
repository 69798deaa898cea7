use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Attendance.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Attendance.toml").exists() {
            builder = builder.add_source(File::new("Attendance.toml", FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATTENDANCE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build().expect("configuration could not be loaded")
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub app: String,
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiSession {
    pub lifetime_days: i64,
}

/// Parameters of the time-boxed event check-in code
#[derive(Deserialize, Debug, Clone)]
pub struct ApiCheckIn {
    /// Length of a single code window
    pub step_seconds: u64,
    /// Decimal digits in an issued code
    pub digits: u32,
    /// Number of previous windows still accepted
    pub skew_steps: u64,
    /// Minutes before the start of an event that check-in opens
    pub early_minutes: i64,
    /// Minutes after the end of an event that check-in closes
    pub late_minutes: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiRoles {
    pub mentor: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub listen: String,
    pub session: ApiSession,
    pub checkin: ApiCheckIn,
    pub roles: ApiRoles,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Discord {
    pub api_base: String,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub bot_token: String,
    pub guild_id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sentry {
    pub dsn: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub api: Api,
    pub discord: Discord,
    pub sentry: Sentry,
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read()
        .await
        .try_deserialize::<Settings>()
        .expect("configuration does not match the expected shape")
}

/// Configure logging and error reporting
#[cfg(feature = "sentry")]
pub async fn setup_logging() -> Option<sentry::ClientInitGuard> {
    init_logger();

    let dsn = config().await.sentry.dsn;
    if dsn.is_empty() {
        return None;
    }

    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

/// Configure logging
#[cfg(not(feature = "sentry"))]
pub async fn setup_logging() {
    init_logger();
}

fn init_logger() {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    pretty_env_logger::try_init().ok();
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[tokio::test]
    async fn loads_embedded_defaults() {
        let settings = config().await;
        assert_eq!(settings.api.session.lifetime_days, 7);
        assert_eq!(settings.api.checkin.step_seconds, 30);
        assert_eq!(settings.api.checkin.digits, 6);
        assert_eq!(settings.api.checkin.skew_steps, 1);
        assert!(settings.discord.api_base.starts_with("https://"));
    }
}
