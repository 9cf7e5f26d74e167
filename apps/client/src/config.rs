use anyhow::Result;

/// Fixed address of the career guidance backend.
pub const BASE_URL: &str = "http://localhost:8080/api/career";

/// Client configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            base_url: BASE_URL.to_string(),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
