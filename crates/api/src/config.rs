//! # API Configuration Module
//!
//! Loads server and scheduling configuration from environment variables,
//! with defaults where a value is optional.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: host address to bind (default: "0.0.0.0")
//! - `API_PORT`: port to listen on (default: 3000)
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `API_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: request timeout (default: 30)
//! - `SCHEDULE_OPEN_TIME`: daily opening time, "HH:MM" (default: "17:00")
//! - `SCHEDULE_CLOSE_TIME`: daily closing time, exclusive (default: "22:00")
//! - `SLOT_INTERVAL_MINUTES`: slot width in minutes, > 0 (default: 15)

use std::env;
use std::num::NonZeroU32;

use eyre::{eyre, Result, WrapErr};
use slotbook_core::grid::OperatingWindow;
use slotbook_core::validate;
use tracing::Level;

/// Configuration for the slotbook API server.
///
/// The operating window is process-wide: it is read once at startup and
/// never varies per request.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Daily scheduling window and slot interval
    pub window: OperatingWindow,
}

impl ApiConfig {
    /// Creates an `ApiConfig` from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `API_PORT` is not a valid port number, if either
    /// schedule time is not a canonical "HH:MM" value, or if
    /// `SLOT_INTERVAL_MINUTES` is zero or non-numeric.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "info".to_string())
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS")
            .ok()
            .map(|origins| origins.split(',').map(|s| s.trim().to_string()).collect());

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Scheduling settings
        let window = operating_window_from_env()?;

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            window,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080").
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn operating_window_from_env() -> Result<OperatingWindow> {
    let open = env::var("SCHEDULE_OPEN_TIME").unwrap_or_else(|_| "17:00".to_string());
    let open =
        validate::parse_time(&open).map_err(|err| eyre!("Invalid SCHEDULE_OPEN_TIME: {err}"))?;

    let close = env::var("SCHEDULE_CLOSE_TIME").unwrap_or_else(|_| "22:00".to_string());
    let close =
        validate::parse_time(&close).map_err(|err| eyre!("Invalid SCHEDULE_CLOSE_TIME: {err}"))?;

    let interval: u32 = env::var("SLOT_INTERVAL_MINUTES")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .wrap_err("Invalid SLOT_INTERVAL_MINUTES value")?;
    let interval = NonZeroU32::new(interval)
        .ok_or_else(|| eyre!("SLOT_INTERVAL_MINUTES must be greater than zero"))?;

    Ok(OperatingWindow::new(open, close, interval))
}
