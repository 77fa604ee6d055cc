use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set when USE_JSON_DB is disabled")]
    MissingDatabaseUrl,
    #[error("invalid APP_PORT {0:?}")]
    InvalidPort(String),
}

/// Where foods come from; chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoodBackend {
    Json { path: PathBuf },
    Postgres { database_url: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub backend: FoodBackend,
}

/// `1`, `true` and `yes` (any case) enable a flag.
fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match var("APP_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let use_json = var("USE_JSON_DB").map(|v| is_truthy(&v)).unwrap_or(true);
        let backend = if use_json {
            FoodBackend::Json {
                path: var("FOOD_DATA_PATH")
                    .unwrap_or_else(|| "usda_foods.json".into())
                    .into(),
            }
        } else {
            FoodBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
            }
        };

        Ok(Self {
            host,
            port,
            backend,
        })
    }
}
