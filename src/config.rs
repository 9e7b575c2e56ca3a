// src/config.rs

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use dotenvy::dotenv;

use crate::error::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    /// Admin token lifetime in seconds.
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub server_addr: SocketAddr,
    /// Directory uploaded media (photos, resumes, images) lives in.
    pub media_dir: PathBuf,
    /// Public URL prefix for files under `media_dir`.
    pub media_url: String,
    pub static_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub admin_username: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://portfolio.db".to_string());

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        let jwt_expiration = match env::var("JWT_EXPIRATION") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "JWT_EXPIRATION",
                value: raw,
            })?,
            Err(_) => 86_400,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let server_addr = match env::var("SERVER_ADDR") {
            Ok(raw) => raw.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
                key: "SERVER_ADDR",
                value: raw,
            })?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let media_dir = env::var("MEDIA_DIR").unwrap_or_else(|_| "media".to_string());
        let media_url = env::var("MEDIA_URL").unwrap_or_else(|_| "/media/".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        let admin_username = env::var("ADMIN_USERNAME").ok().filter(|s| !s.is_empty());
        let admin_password = env::var("ADMIN_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            server_addr,
            media_dir: PathBuf::from(media_dir),
            media_url: normalize_media_url(media_url),
            static_dir: PathBuf::from(static_dir),
            allowed_origins,
            admin_username,
            admin_password,
        })
    }

    /// Public URL for a stored media path, e.g. `profile_pics/me.png`
    /// becomes `/media/profile_pics/me.png`.
    pub fn media_path_url(&self, path: &str) -> String {
        format!("{}{}", self.media_url, path.trim_start_matches('/'))
    }
}

fn normalize_media_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
