use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://emil-demic-sketchscape.hf.space/predict";
pub const DEFAULT_CDN_URL: &str = "https://d2f5e6rx1vgqv1.cloudfront.net/CDN_images/";
pub const DEFAULT_REFERENCE_TOTAL: usize = 3000;
pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Retrieval endpoint receiving the sketch
    pub api_url: String,

    /// Base URL images are served from; an id maps to `{cdn_url}{id}.jpg`
    pub cdn_url: String,

    /// Number of images in the reference catalog
    pub reference_total: usize,

    /// Tiles per gallery page, shared by both galleries
    pub page_size: usize,

    /// Timeout for the retrieval request
    pub request_timeout_secs: u64,

    /// Directory for the interactive-mode log file
    pub data_dir: PathBuf,
}

/// Partial configuration as read from a JSON file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    api_url: Option<String>,
    cdn_url: Option<String>,
    reference_total: Option<usize>,
    page_size: Option<usize>,
    request_timeout_secs: Option<u64>,
    data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cdn_url: DEFAULT_CDN_URL.to_string(),
            reference_total: DEFAULT_REFERENCE_TOTAL,
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            data_dir: dirs::data_local_dir()
                .map(|dir| dir.join("sketchscape"))
                .unwrap_or_else(|| PathBuf::from("./data")),
        }
    }
}

impl Config {
    /// Initialize configuration from defaults, environment and config file.
    ///
    /// An explicit `path` must exist; otherwise the first file found in the
    /// standard locations is used, if any.
    pub async fn init(path: Option<&Path>) -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();
        config.load_from_env();

        let file = match path {
            Some(path) => Some(Self::read_file(path).await?),
            None => Self::load_from_file().await?,
        };
        if let Some(file) = file {
            config.merge_with(file);
        }

        config.validate()?;
        Ok(config)
    }

    /// Log file used by interactive sessions
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("sketchscape.log")
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        self.apply_env(|key| std::env::var(key).ok());
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("SKETCHSCAPE_API_URL") {
            self.api_url = url;
        }

        if let Some(url) = lookup("SKETCHSCAPE_CDN_URL") {
            self.cdn_url = url;
        }

        if let Some(total) = lookup("SKETCHSCAPE_REFERENCE_TOTAL").and_then(|v| v.parse().ok()) {
            self.reference_total = total;
        }

        if let Some(size) = lookup("SKETCHSCAPE_PAGE_SIZE").and_then(|v| v.parse().ok()) {
            self.page_size = size;
        }

        if let Some(secs) = lookup("SKETCHSCAPE_TIMEOUT_SECS").and_then(|v| v.parse().ok()) {
            self.request_timeout_secs = secs;
        }

        if let Some(dir) = lookup("SKETCHSCAPE_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
    }

    /// Candidate configuration files, highest priority first
    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.sketchscape.json"),
            PathBuf::from("./sketchscape.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("sketchscape").join("sketchscape.json"));
        }

        paths
    }

    /// Load the first configuration file found, if any
    async fn load_from_file() -> Result<Option<FileConfig>> {
        for path in Self::config_paths() {
            if path.exists() {
                return Self::read_file(&path).await.map(Some);
            }
        }

        Ok(None)
    }

    async fn read_file(path: &Path) -> Result<FileConfig> {
        debug!("Loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// File values override environment and defaults
    fn merge_with(&mut self, other: FileConfig) {
        if let Some(url) = other.api_url {
            self.api_url = url;
        }
        if let Some(url) = other.cdn_url {
            self.cdn_url = url;
        }
        if let Some(total) = other.reference_total {
            self.reference_total = total;
        }
        if let Some(size) = other.page_size {
            self.page_size = size;
        }
        if let Some(secs) = other.request_timeout_secs {
            self.request_timeout_secs = secs;
        }
        if let Some(dir) = other.data_dir {
            self.data_dir = dir;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("api_url", &self.api_url), ("cdn_url", &self.cdn_url)] {
            if url.is_empty() {
                return Err(anyhow!("{} is required", name));
            }
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("{} must be an http(s) URL, got '{}'", name, url));
            }
        }

        if self.page_size == 0 {
            return Err(anyhow!("page_size must be greater than 0"));
        }

        if self.request_timeout_secs == 0 {
            return Err(anyhow!("request_timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}
