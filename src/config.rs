use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub datastore_api_url: String,
    pub debounce_ms: u32,
    pub toast_duration_ms: u32,
    pub enable_logging: bool,
    pub log_level: String,
    pub default_universe_id: String,
    pub default_api_token: String,
    pub default_datastore: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datastore_api_url: "http://localhost:3000".to_string(),
            debounce_ms: 500,
            toast_duration_ms: 3000,
            enable_logging: true,
            log_level: "info".to_string(),
            default_universe_id: String::new(),
            default_api_token: String::new(),
            default_datastore: String::new(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            datastore_api_url: option_env!("DATASTORE_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.datastore_api_url),
            debounce_ms: parse_or(option_env!("DEBOUNCE_MS"), defaults.debounce_ms),
            toast_duration_ms: parse_or(option_env!("TOAST_DURATION_MS"), defaults.toast_duration_ms),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
            default_universe_id: option_env!("DEFAULT_UNIVERSE_ID").unwrap_or("").to_string(),
            default_api_token: option_env!("DEFAULT_API_TOKEN").unwrap_or("").to_string(),
            default_datastore: option_env!("DEFAULT_DATASTORE").unwrap_or("").to_string(),
        }
    }

    /// Nivel efectivo para wasm_logger
    pub fn log_level_filter(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Warn;
        }
        LevelFilter::from_str(&self.log_level)
            .ok()
            .and_then(|filter| filter.to_level())
            .unwrap_or(log::Level::Info)
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
