use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::resume::HeaderRule;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub port: u16,
    pub rust_log: String,
    /// How strictly resume headers must look like headers.
    pub resume_header_rule: HeaderRule,
    pub max_upload_bytes: usize,
    /// Lifetime of presigned resource download links.
    pub presign_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_max_connections: parse_pool_size(&optional_env(
                "DATABASE_MAX_CONNECTIONS",
                "10",
            ))?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            port: optional_env("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            resume_header_rule: optional_env("RESUME_HEADER_RULE", "own_line")
                .parse::<HeaderRule>()
                .map_err(|e| anyhow!(e))
                .context("RESUME_HEADER_RULE is invalid")?,
            max_upload_bytes: optional_env("MAX_UPLOAD_BYTES", "20971520")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            presign_ttl: Duration::from_secs(
                optional_env("PRESIGN_TTL_SECS", "900")
                    .parse::<u64>()
                    .context("PRESIGN_TTL_SECS must be a number of seconds")?,
            ),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_pool_size(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got '{raw}'"))
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_parsing() {
        assert_eq!(parse_pool_size("10").unwrap(), 10);
        assert_eq!(parse_pool_size(" 4 ").unwrap(), 4);
        assert!(parse_pool_size("0").is_err());
        assert!(parse_pool_size("many").is_err());
    }
}
