use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;
use tripsplit_application::model::{DEFAULT_CURRENCY, DEFAULT_TRIP_NAME};

/// Settings read from the environment (and `.env`, when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub currency: String,
    pub trip_name: String,
    /// JSON-lines file that receives payment requests. Stdout when unset.
    pub outbox: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            currency: non_empty("TRIPSPLIT_CURRENCY")
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
            trip_name: non_empty("TRIPSPLIT_TRIP_NAME")
                .unwrap_or_else(|| DEFAULT_TRIP_NAME.to_owned()),
            outbox: non_empty("TRIPSPLIT_OUTBOX").map(PathBuf::from),
        }
    }
}

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
