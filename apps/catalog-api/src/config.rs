//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. `main` loads an optional `.env` file first, so the same keys can
//! live there.
//!
//! The database is addressed either by `DATABASE_URL` or by the individual
//! `DB_*` parts (`DB_USER`, `DB_PASSWORD`, `DB_SERVER`, `DB_PORT`,
//! `DB_DATABASE`, `DB_ENCRYPT`), which are set on a `PgConnectOptions`
//! directly so hosts and credentials never pass through a URL.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

use catalog_core::DEFAULT_CODE_ATTEMPTS;
use catalog_db::{DbConfig, ProcedureSet};

/// Catalog API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP bind host
    pub http_host: String,

    /// HTTP bind port
    pub http_port: u16,

    /// PostgreSQL connection settings
    pub database: PgConnectOptions,

    /// Maximum pooled connections
    pub db_max_connections: u32,

    /// How long a request waits for a pooled connection
    pub db_acquire_timeout: Duration,

    /// Apply bundled migrations at startup
    pub db_run_migrations: bool,

    /// Random draws before code generation gives up
    pub code_generation_attempts: u32,

    /// Stored procedure names
    pub procedures: ProcedureSet,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ProcedureSet::default();

        let config = ApiConfig {
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            http_port: parse_or(&lookup, "HTTP_PORT", 3000)?,

            database: connect_options(&lookup)?,

            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,

            db_acquire_timeout: Duration::from_secs(parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                30,
            )?),

            db_run_migrations: parse_or(&lookup, "DB_RUN_MIGRATIONS", true)?,

            code_generation_attempts: parse_or(
                &lookup,
                "CODE_GENERATION_ATTEMPTS",
                DEFAULT_CODE_ATTEMPTS,
            )?,

            procedures: ProcedureSet {
                fetch_by_code: lookup("PROC_FETCH_BY_CODE").unwrap_or(defaults.fetch_by_code),
                search_by_description: lookup("PROC_SEARCH_BY_DESCRIPTION")
                    .unwrap_or(defaults.search_by_description),
                save: lookup("PROC_SAVE").unwrap_or(defaults.save),
                delete: lookup("PROC_DELETE").unwrap_or(defaults.delete),
            },
        };

        if config.code_generation_attempts == 0 {
            return Err(ConfigError::InvalidValue(
                "CODE_GENERATION_ATTEMPTS".to_string(),
            ));
        }

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http_host, self.http_port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_HOST".to_string()))
    }

    /// Database settings for [`catalog_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database.clone())
            .max_connections(self.db_max_connections)
            .acquire_timeout(self.db_acquire_timeout)
            .run_migrations(self.db_run_migrations)
            .procedures(self.procedures.clone())
    }
}

/// Parses `key` when present, otherwise returns `default`.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Options from `DATABASE_URL`, or built from the `DB_*` parts.
fn connect_options<F>(lookup: &F) -> Result<PgConnectOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return url
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DATABASE_URL".to_string()));
    }

    let server = lookup("DB_SERVER")
        .ok_or_else(|| ConfigError::MissingRequired("DATABASE_URL or DB_SERVER".to_string()))?;
    let database = lookup("DB_DATABASE")
        .ok_or_else(|| ConfigError::MissingRequired("DB_DATABASE".to_string()))?;
    let port: u16 = parse_or(lookup, "DB_PORT", 5432)?;
    let encrypt: bool = parse_or(lookup, "DB_ENCRYPT", false)?;

    let mut options = PgConnectOptions::new()
        .host(&server)
        .port(port)
        .database(&database);

    if let Some(user) = lookup("DB_USER") {
        options = options.username(&user);
    }
    if let Some(password) = lookup("DB_PASSWORD") {
        options = options.password(&password);
    }
    if encrypt {
        options = options.ssl_mode(PgSslMode::Require);
    }

    Ok(options)
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/catalog")]).unwrap();

        assert_eq!(config.http_port, 3000);
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.code_generation_attempts, 10);
        assert!(config.db_run_migrations);
        assert_eq!(config.procedures, ProcedureSet::default());
        assert_eq!(config.bind_address().unwrap().port(), 3000);
    }

    #[test]
    fn test_options_from_parts() {
        let config = config_from(&[
            ("DB_USER", "sa"),
            ("DB_PASSWORD", "p@ss:word"),
            ("DB_SERVER", "db.local"),
            ("DB_PORT", "6543"),
            ("DB_DATABASE", "loja"),
            ("DB_ENCRYPT", "true"),
        ])
        .unwrap();

        let options = &config.database;
        assert_eq!(options.get_host(), "db.local");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "sa");
        assert_eq!(options.get_database(), Some("loja"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_ipv6_server_is_kept_verbatim() {
        let config = config_from(&[("DB_SERVER", "::1"), ("DB_DATABASE", "loja")]).unwrap();

        let db = config.db_config();
        assert_eq!(db.connect_options.get_host(), "::1");
        assert_eq!(db.connect_options.get_port(), 5432);
        assert_eq!(db.connect_options.get_database(), Some("loja"));
    }

    #[test]
    fn test_database_url_is_parsed() {
        let config = config_from(&[("DATABASE_URL", "postgres://app@[::1]:6000/catalog")]).unwrap();
        assert_eq!(config.database.get_port(), 6000);
        assert_eq!(config.database.get_database(), Some("catalog"));

        let err = config_from(&[("DATABASE_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "DATABASE_URL"));
    }

    #[test]
    fn test_missing_database_is_an_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("HTTP_PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "HTTP_PORT"));

        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("CODE_GENERATION_ATTEMPTS", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_procedure_overrides_reach_db_config() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/catalog"),
            ("PROC_SAVE", "dbo.SpGrProduto"),
            ("DB_RUN_MIGRATIONS", "false"),
        ])
        .unwrap();

        let db = config.db_config();
        assert_eq!(db.procedures.save, "dbo.SpGrProduto");
        assert_eq!(db.procedures.delete, "sp_ex_produto");
        assert!(!db.run_migrations);
    }
}
