use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "data/cleaned_food_data.csv";
pub const DEFAULT_MEALS_PER_SLOT: usize = 3;
pub const MAX_MEALS_PER_SLOT: usize = 25;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub catalog: CatalogConfig,
    pub planner: PlannerConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let catalog_path = env::var("APP_FOOD_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));

        let per_meal_count = match env::var("APP_MEALS_PER_SLOT") {
            Ok(raw) => parse_meals_per_slot(&raw)?,
            Err(_) => DEFAULT_MEALS_PER_SLOT,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                include_targets: environment == AppEnvironment::Development,
            },
            catalog: CatalogConfig { path: catalog_path },
            planner: PlannerConfig { per_meal_count },
        })
    }
}

fn parse_meals_per_slot(raw: &str) -> Result<usize, ConfigError> {
    let value = raw
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidMealsPerSlot)?;
    if value == 0 || value > MAX_MEALS_PER_SLOT {
        return Err(ConfigError::InvalidMealsPerSlot);
    }
    Ok(value)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub include_targets: bool,
}

/// Location of the food catalog loaded once at startup.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub path: PathBuf,
}

/// Defaults applied when a plan request does not specify its own size.
#[derive(Debug, Clone, Copy)]
pub struct PlannerConfig {
    pub per_meal_count: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            per_meal_count: DEFAULT_MEALS_PER_SLOT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidMealsPerSlot,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMealsPerSlot => write!(
                f,
                "APP_MEALS_PER_SLOT must be an integer between 1 and {}",
                MAX_MEALS_PER_SLOT
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidMealsPerSlot => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("APP_FOOD_CATALOG");
        env::remove_var("APP_MEALS_PER_SLOT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.telemetry.include_targets);
        assert_eq!(config.catalog.path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(config.planner.per_meal_count, 3);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_catalog_and_planner_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("APP_FOOD_CATALOG", "/srv/foods.csv");
        env::set_var("APP_MEALS_PER_SLOT", "5");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!config.telemetry.include_targets);
        assert_eq!(config.catalog.path, PathBuf::from("/srv/foods.csv"));
        assert_eq!(config.planner.per_meal_count, 5);
        reset_env();
    }

    #[test]
    fn rejects_out_of_range_meals_per_slot() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_MEALS_PER_SLOT", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidMealsPerSlot)
        ));
        env::set_var("APP_MEALS_PER_SLOT", "many");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidMealsPerSlot)
        ));
        reset_env();
    }
}
