use dotenvy::dotenv;
use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5055";
pub const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    /// Base URL of the HR backend, without trailing slash
    pub backend_url: String,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: non_empty_var("SERVER_ADDR")
                .unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            backend_url: resolve_backend_url(non_empty_var("BACKEND_URL")),
            log_dir: non_empty_var("LOG_DIR").unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        }
    }
}

/// Falls back to the local backend when nothing is configured.
pub fn resolve_backend_url(value: Option<String>) -> String {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
