use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use error_stack::{Report, ResultExt};
use kernel::KernelError;

static SERVER_BIND: &str = "SERVER_BIND";
static PUBLIC_BASE_URL: &str = "PUBLIC_BASE_URL";
static CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
static DATABASE_BACKEND: &str = "DATABASE_BACKEND";
static LOG_DIR: &str = "LOG_DIR";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum DatabaseBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for DatabaseBackend {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown database backend {other}"))),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub enum CorsOrigins {
    #[default]
    Any,
    List(Vec<HeaderValue>),
}

impl FromStr for CorsOrigins {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.split(',').any(|origin| origin.trim() == "*") {
            return Ok(Self::Any);
        }
        s.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .change_context_lazy(|| KernelError::Internal)
                    .attach_printable_lazy(|| format!("Invalid origin {origin}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub base_url: String,
    pub cors_origins: CorsOrigins,
    pub database: DatabaseBackend,
    pub log_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8080)),
            base_url: String::new(),
            cors_origins: CorsOrigins::Any,
            database: DatabaseBackend::Postgres,
            log_dir: PathBuf::from("./logs/"),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        Self::from_lookup(|key| match dotenvy::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
            Err(error) => Err(Report::new(error)
                .change_context(KernelError::Internal)
                .attach_printable(format!("Failed to read env {key}"))),
        })
    }

    pub fn from_lookup<F>(lookup: F) -> error_stack::Result<Self, KernelError>
    where
        F: Fn(&str) -> error_stack::Result<Option<String>, KernelError>,
    {
        let mut config = Self::default();
        if let Some(bind) = lookup(SERVER_BIND)? {
            config.bind = bind
                .parse::<SocketAddr>()
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{SERVER_BIND} is not an address: {bind}"))?;
        }
        if let Some(base_url) = lookup(PUBLIC_BASE_URL)? {
            HeaderValue::from_str(&base_url)
                .change_context_lazy(|| KernelError::Internal)
                .attach_printable_lazy(|| format!("{PUBLIC_BASE_URL} is not a valid uri"))?;
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(origins) = lookup(CORS_ALLOWED_ORIGINS)? {
            config.cors_origins = origins
                .parse::<CorsOrigins>()
                .attach_printable_lazy(|| format!("Invalid {CORS_ALLOWED_ORIGINS}"))?;
        }
        if let Some(database) = lookup(DATABASE_BACKEND)? {
            config.database = database
                .parse::<DatabaseBackend>()
                .attach_printable_lazy(|| format!("Invalid {DATABASE_BACKEND}"))?;
        }
        if let Some(log_dir) = lookup(LOG_DIR)? {
            config.log_dir = PathBuf::from(log_dir);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use axum::http::HeaderValue;
    use kernel::KernelError;

    use super::{CorsOrigins, DatabaseBackend, ServerConfig};

    fn config(vars: &[(&str, &str)]) -> error_stack::Result<ServerConfig, KernelError> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        ServerConfig::from_lookup(|key| Ok(vars.get(key).cloned()))
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.base_url, "");
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.database, DatabaseBackend::Postgres);
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("SERVER_BIND", "127.0.0.1:3000"),
            ("PUBLIC_BASE_URL", "https://winkels.example/"),
            ("CORS_ALLOWED_ORIGINS", "http://a.example, http://b.example"),
            ("DATABASE_BACKEND", "Memory"),
        ])
        .unwrap();
        assert_eq!(config.bind.to_string(), "127.0.0.1:3000");
        assert_eq!(config.base_url, "https://winkels.example");
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://a.example"),
                HeaderValue::from_static("http://b.example"),
            ])
        );
        assert_eq!(config.database, DatabaseBackend::Memory);
    }

    #[test]
    fn star_means_any_origin() {
        let config = config(&[("CORS_ALLOWED_ORIGINS", "*")]).unwrap();
        assert_eq!(config.cors_origins, CorsOrigins::Any);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(config(&[("SERVER_BIND", "nowhere")]).is_err());
        assert!(config(&[("DATABASE_BACKEND", "sqlite")]).is_err());
    }
}
