use crate::quiz::QuizSelection;
use actix_web::http::Uri;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Every section and key is optional; anything left out keeps its default.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub quiz: QuizConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct CorsConfig {
    /// `"*"` lets any origin through.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QuizConfig {
    #[serde(default)]
    pub selection: QuizSelection,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: get_default_db_path(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl CorsConfig {
    /// Every origin other than `"*"` must be a bare `scheme://host[:port]`.
    /// `Cors::allowed_origin` panics on anything else.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for origin in self.allowed_origins.iter().filter(|o| o.as_str() != "*") {
            let invalid = |reason: &str| {
                ConfigError::Message(format!("Invalid CORS origin {origin:?}: {reason}"))
            };

            let uri = origin
                .parse::<Uri>()
                .map_err(|e| invalid(&e.to_string()))?;
            match uri.scheme_str() {
                Some("http") | Some("https") => {}
                _ => return Err(invalid("scheme must be http or https")),
            }
            if uri.host().unwrap_or_default().is_empty() {
                return Err(invalid("missing host"));
            }
            if uri.path_and_query().is_some_and(|pq| pq.as_str() != "/")
                || origin.ends_with('/')
            {
                return Err(invalid("must not carry a path, query, or trailing slash"));
            }
        }
        Ok(())
    }
}

impl ApiConfig {
    /// Loads `api.toml` (writing a default one first if missing) and applies
    /// `TRIVIA_API_*` environment overrides, e.g. `TRIVIA_API_SERVER__PORT`.
    pub fn load(explicit_path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_config_path);

        if !config_path.exists() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }

            let default_config = toml::to_string(&ApiConfig::default()).map_err(|e| {
                ConfigError::Message(format!("Failed to serialize default config: {e}"))
            })?;
            std::fs::write(&config_path, default_config).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("TRIVIA_API")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: ApiConfig = builder.try_deserialize()?;
        config.cors.validate()?;
        config.database.path = expand_tilde(&config.database.path);
        if let Some(file) = config.logging.file.take() {
            config.logging.file = Some(expand_tilde(&file));
        }

        Ok((config, config_path))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn expand_tilde(path: &Path) -> PathBuf {
    if path.starts_with("~") {
        if let Some(home) = home::home_dir() {
            let path_str = path.to_string_lossy();
            let expanded = path_str.replacen('~', &home.to_string_lossy(), 1);
            return PathBuf::from(expanded);
        }
    }
    path.to_path_buf()
}

fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("trivia/api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}

fn get_default_db_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("trivia/trivia.db")
    } else {
        PathBuf::from("trivia.db")
    }
}
