use std::env;

/// Service configuration, environment-driven with defaults suitable for
/// local runs.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            database_path: env::var("DATABASE_PATH").unwrap_or_else(|_| "./flights.db".to_string()),
        }
    }
}
