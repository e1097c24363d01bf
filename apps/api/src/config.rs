use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid numeric values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the static student roster JSON file.
    pub roster_path: String,
    pub port: u16,
    /// Default page size for paginated `/students` responses.
    pub page_size: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            roster_path: std::env::var("ROSTER_PATH")
                .unwrap_or_else(|_| "data/students.json".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            page_size: std::env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("PAGE_SIZE must be a positive integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
