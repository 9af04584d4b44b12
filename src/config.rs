use chrono::NaiveDate;
use std::env;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_UPSTREAM_API_URL: &str = "https://data.taipei/api/v1/dataset/964e936d-d971-4567-a467-aa67b930f98e?scope=resourceAquire&offset=1316&limit=1000";

#[derive(Clone, Debug)]
pub struct Config {
    pub upstream_api_url: String,
    pub upstream_timeout_secs: u64,
    pub cache_dir: PathBuf,
    pub cache_key: String,
    pub fallback_data_path: PathBuf,
    pub output_dir: PathBuf,
    pub generation_start_date: NaiveDate,
    pub years_to_generate: u32,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let upstream_api_url =
            lookup("UPSTREAM_API_URL").unwrap_or_else(|| DEFAULT_UPSTREAM_API_URL.to_string());
        if !(upstream_api_url.starts_with("https://") || upstream_api_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUpstreamUrl(upstream_api_url));
        }

        let upstream_timeout_secs = lookup("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let cache_dir = lookup("CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);

        let cache_key = lookup("CACHE_KEY").unwrap_or_else(|| "holiday-2024.json".to_string());

        let fallback_data_path = PathBuf::from(
            lookup("FALLBACK_DATA_PATH").unwrap_or_else(|| "test-data.json".to_string()),
        );

        let output_dir = PathBuf::from(lookup("OUTPUT_DIR").unwrap_or_else(|| "docs".to_string()));
        // The generator wipes this directory, so it must name an actual subdirectory
        if !names_directory(&output_dir) {
            return Err(ConfigError::UnsafeOutputDir(output_dir));
        }

        let start_raw =
            lookup("GENERATION_START_DATE").unwrap_or_else(|| "2024-01-01".to_string());
        let generation_start_date = NaiveDate::parse_from_str(&start_raw, "%Y-%m-%d")
            .map_err(|_| ConfigError::InvalidStartDate(start_raw))?;

        let years_to_generate: u32 = lookup("YEARS_TO_GENERATE")
            .unwrap_or_else(|| "2".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidYears)?;
        if years_to_generate > 100 {
            return Err(ConfigError::InvalidYears);
        }

        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "7071".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Config {
            upstream_api_url,
            upstream_timeout_secs,
            cache_dir,
            cache_key,
            fallback_data_path,
            output_dir,
            generation_start_date,
            years_to_generate,
            server_host,
            server_port,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// True when the last path component is a plain name, so `""`, `.`, `..`, `/`
/// and `dir/..` are all refused.
fn names_directory(path: &Path) -> bool {
    matches!(path.components().next_back(), Some(Component::Normal(_)))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("UPSTREAM_API_URL must be an http(s) URL, got {0:?}")]
    InvalidUpstreamUrl(String),

    #[error("Invalid UPSTREAM_TIMEOUT_SECS")]
    InvalidTimeout,

    #[error("GENERATION_START_DATE must be YYYY-MM-DD, got {0:?}")]
    InvalidStartDate(String),

    #[error("YEARS_TO_GENERATE must be an integer between 0 and 100")]
    InvalidYears,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("OUTPUT_DIR must name a subdirectory, got {0:?}")]
    UnsafeOutputDir(PathBuf),
}
