use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct Config {
    pub database_url: String,
    pub server_addr: SocketAddr,
    /// Page size used when a listing request omits `size`.
    pub default_page_size: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let server_addr = std::env::var("SERVER_ADDR")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "SERVER_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let default_page_size = match std::env::var("DEFAULT_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            database_url,
            server_addr,
            default_page_size,
        })
    }
}

fn parse_page_size(raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(|size| size.clamp(1, MAX_PAGE_SIZE))
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "DEFAULT_PAGE_SIZE".to_string(),
            reason: e.to_string(),
        })
}
