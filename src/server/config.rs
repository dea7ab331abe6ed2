use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub port: u16,
    pub database_url: String,

    /// Secret key for the payment provider's merchant API; webhook listing is
    /// disabled when absent.
    pub revolut_secret_api_key: Option<String>,
    /// OpenCage key; reverse geocoding is disabled when absent.
    pub opencage_api_key: Option<String>,

    /// Single allowed CORS origin; the permissive default applies when absent.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            revolut_secret_api_key: std::env::var("REVOLUT_SECRET_API_KEY").ok(),
            opencage_api_key: std::env::var("OPENCAGE_API_KEY").ok(),
            allowed_origin: std::env::var("ALLOWED_ORIGIN").ok(),
        })
    }
}
