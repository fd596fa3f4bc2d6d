//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env` is
//! loaded). Only `JWT_SECRET` and a database location are required.

use std::str::FromStr;

use anyhow::{Context, bail};
use sqlx::postgres::PgConnectOptions;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_STATIC_DIR: &str = "public";

/// Where the database lives: a full URL, or the discrete `DB_*` variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    Url(String),
    Parts {
        user: String,
        password: Option<String>,
        host: String,
        port: u16,
        name: String,
    },
}

impl DatabaseLocation {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseLocation::Url(url) => {
                PgConnectOptions::from_str(url).context("DATABASE_URL is not a valid Postgres URL")
            }
            DatabaseLocation::Parts {
                user,
                password,
                host,
                port,
                name,
            } => {
                let options = PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .database(name);
                Ok(match password {
                    Some(password) => options.password(password),
                    None => options,
                })
            }
        }
    }
}

#[derive(Clone)]
pub struct ServerConfig {
    pub database: DatabaseLocation,
    pub max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub password_pepper: Option<String>,
    pub static_dir: String,
    /// CORS allow-list; empty means any origin
    pub frontend_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = match var("DATABASE_URL") {
            Some(url) => DatabaseLocation::Url(url),
            None => DatabaseLocation::Parts {
                user: var("DB_USER").context("DATABASE_URL or DB_USER must be set")?,
                password: var("DB_PASSWORD"),
                host: var("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(var("DB_PORT"), "DB_PORT", 5432)?,
                name: var("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?,
            },
        };

        let Some(jwt_secret) = var("JWT_SECRET") else {
            bail!("JWT_SECRET must be set");
        };

        Ok(Self {
            database,
            max_connections: parse_or(
                var("DB_MAX_CONNECTIONS"),
                "DB_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            port: parse_or(var("PORT"), "PORT", DEFAULT_PORT)?,
            jwt_secret,
            password_pepper: var("PASSWORD_PEPPER"),
            static_dir: var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            frontend_origins: var("FRONTEND_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|o| !o.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    pub fn auth_config(&self) -> auth::AuthConfig {
        let config = auth::AuthConfig::new(self.jwt_secret.as_bytes());
        match &self.password_pepper {
            Some(pepper) => config.with_pepper(pepper.as_bytes()),
            None => config,
        }
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("max_connections", &self.max_connections)
            .field("port", &self.port)
            .field("jwt_secret", &"[REDACTED]")
            .field("static_dir", &self.static_dir)
            .field("frontend_origins", &self.frontend_origins)
            .finish_non_exhaustive()
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[
            ("DATABASE_URL", "postgres://app@localhost/shop"),
            ("JWT_SECRET", "s"),
        ])
        .unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.static_dir, "public");
        assert!(config.frontend_origins.is_empty());
        assert!(config.password_pepper.is_none());
        assert!(config.database.connect_options().is_ok());
    }

    #[test]
    fn test_discrete_database_variables() {
        let config = config(&[
            ("DB_USER", "app"),
            ("DB_PASSWORD", "p@ss:word"),
            ("DB_NAME", "shop"),
            ("DB_PORT", "6543"),
            ("JWT_SECRET", "s"),
        ])
        .unwrap();

        assert_eq!(
            config.database,
            DatabaseLocation::Parts {
                user: "app".to_string(),
                password: Some("p@ss:word".to_string()),
                host: "localhost".to_string(),
                port: 6543,
                name: "shop".to_string(),
            }
        );
        assert!(config.database.connect_options().is_ok());
    }

    #[test]
    fn test_jwt_secret_required() {
        let err = config(&[("DATABASE_URL", "postgres://localhost/shop")]).unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));

        assert!(config(&[("DATABASE_URL", "postgres://localhost/shop"), ("JWT_SECRET", " ")]).is_err());
    }

    #[test]
    fn test_database_location_required() {
        assert!(config(&[("JWT_SECRET", "s")]).is_err());
    }

    #[test]
    fn test_invalid_port() {
        let err = config(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", "s"),
            ("PORT", "http"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_origins_and_pepper() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/shop"),
            ("JWT_SECRET", "s"),
            ("PASSWORD_PEPPER", "pep"),
            ("FRONTEND_ORIGINS", "http://localhost:3000, https://shop.example ,"),
        ])
        .unwrap();

        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:3000", "https://shop.example"]
        );
        assert_eq!(config.auth_config().pepper(), Some(&b"pep"[..]));
        assert!(!format!("{:?}", config).contains("\"s\""));
    }
}
