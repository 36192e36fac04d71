use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::validation::ValidationLocale;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
    pub swagger: SwaggerConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Which persistence backend serves the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    /// Process-local, non-durable. Development only.
    Memory,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub issuer: String,
    /// Expected `aud` claim. Session tokens of most providers carry none.
    pub audience: Option<String>,
    pub jwks_url: String,
    pub jwks_cache_ttl: Duration,
    pub jwt_leeway: Duration,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ValidationConfig {
    pub locale: ValidationLocale,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                tracing::warn!("Error loading .env file: {}", e);
            }
        }

        let storage = StorageConfig::from_env()?;
        let database = match storage.backend {
            StorageBackend::Postgres => Some(DatabaseConfig::from_env()?),
            StorageBackend::Memory => None,
        };

        Ok(Config {
            app: AppConfig::from_env()?,
            storage,
            database,
            auth: AuthConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
            validation: ValidationConfig::from_env()?,
        })
    }
}

/// Reads `key`, falling back to `default` when unset, and parses it as `T`
fn env_or<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{} must be a valid number", key)),
        _ => Ok(default),
    }
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024;

    pub fn from_env() -> Result<Self, String> {
        let cors_allowed_origins = parse_origins(
            &env_opt("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| "*".to_string()),
        );

        Ok(Self {
            host: env_opt("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: env_or("PORT", 3000u16)?,
            cors_allowed_origins,
            max_request_body_size: env_or(
                "MAX_REQUEST_BODY_SIZE",
                Self::DEFAULT_MAX_REQUEST_BODY_SIZE,
            )?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Comma-separated origin list, blanks dropped
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let raw = env_opt("STORAGE_BACKEND").unwrap_or_else(|| "postgres".to_string());
        Ok(Self {
            backend: StorageBackend::parse(&raw)?,
        })
    }
}

impl StorageBackend {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!(
                "STORAGE_BACKEND must be 'postgres' or 'memory', got '{}'",
                other
            )),
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = env_opt("DATABASE_URL").ok_or_else(|| "DATABASE_URL must be set".to_string())?;

        Ok(Self {
            url,
            max_connections: env_or("DB_MAX_CONNECTIONS", 10)?,
            min_connections: env_or("DB_MIN_CONNECTIONS", 1)?,
            acquire_timeout_secs: env_or("DB_ACQUIRE_TIMEOUT_SECS", 5)?,
            // 10 minutes idle, 30 minutes lifetime
            idle_timeout_secs: env_or("DB_IDLE_TIMEOUT_SECS", 600)?,
            max_lifetime_secs: env_or("DB_MAX_LIFETIME_SECS", 1800)?,
        })
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        let issuer = env_opt("AUTH_ISSUER")
            .ok_or_else(|| "AUTH_ISSUER environment variable is required".to_string())?
            .trim_end_matches('/')
            .to_string();
        let jwks_url = env_opt("AUTH_JWKS_URL")
            .unwrap_or_else(|| format!("{}/.well-known/jwks.json", issuer));

        Ok(Self {
            audience: env_opt("AUTH_AUDIENCE"),
            jwks_url,
            jwks_cache_ttl: Duration::from_secs(env_or("JWKS_CACHE_TTL", 3600)?),
            jwt_leeway: Duration::from_secs(env_or("JWT_LEEWAY", 60)?),
            issuer,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env_opt("SWAGGER_USERNAME");
        let password = env_opt("SWAGGER_PASSWORD");
        let title = env_opt("SWAGGER_TITLE").unwrap_or_else(|| "Store Admin API".to_string());
        let version = env_opt("SWAGGER_VERSION").unwrap_or_else(|| "0.1.0".to_string());
        let description = env_opt("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|| "Multi-tenant store administration API".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}

impl ValidationConfig {
    pub fn from_env() -> Result<Self, String> {
        let locale = match env_opt("VALIDATION_LOCALE") {
            Some(raw) => ValidationLocale::parse(&raw)?,
            None => ValidationLocale::default(),
        };
        Ok(Self { locale })
    }
}
