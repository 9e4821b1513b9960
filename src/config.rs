// src/config.rs

use crate::errors::ServerError;
use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub db_path: String,
    pub max_workers: usize,
    /// `None` serves the listings compiled into the binary.
    pub listings_path: Option<PathBuf>,
    /// When off, every sign-in related route is hidden.
    pub auth_enabled: bool,
    /// Endpoint that exchanges a sign-in credential for a user profile.
    pub auth_endpoint: String,
    pub google_client_id: String,
    pub session_ttl_secs: i64,
    pub map_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "homefinder.sqlite3".to_string(),
            max_workers: 8,
            listings_path: None,
            auth_enabled: true,
            auth_endpoint: "http://127.0.0.1:8080/api/auth/google".to_string(),
            google_client_id: String::new(),
            session_ttl_secs: 60 * 60 * 24 * 7,
            map_seed: 42,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            addr: try_load(&lookup, "HOMEFINDER_ADDR", defaults.addr)?,
            db_path: try_load(&lookup, "HOMEFINDER_DB_PATH", defaults.db_path)?,
            max_workers: try_load(&lookup, "HOMEFINDER_MAX_WORKERS", defaults.max_workers)?,
            listings_path: lookup("HOMEFINDER_LISTINGS_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            auth_enabled: try_load(&lookup, "HOMEFINDER_AUTH_ENABLED", defaults.auth_enabled)?,
            auth_endpoint: try_load(&lookup, "HOMEFINDER_AUTH_ENDPOINT", defaults.auth_endpoint)?,
            google_client_id: try_load(
                &lookup,
                "HOMEFINDER_GOOGLE_CLIENT_ID",
                defaults.google_client_id,
            )?,
            session_ttl_secs: try_load(
                &lookup,
                "HOMEFINDER_SESSION_TTL_SECS",
                defaults.session_ttl_secs,
            )?,
            map_seed: try_load(&lookup, "HOMEFINDER_MAP_SEED", defaults.map_seed)?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ServerError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e| {
            warn!("Invalid {key} value: {e}");
            ServerError::Config(format!("invalid {key}={raw:?}: {e}"))
        }),
    }
}
