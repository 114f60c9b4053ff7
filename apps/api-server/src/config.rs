//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageConfig,
    /// Upper bound for a single request body (JSON or multipart).
    pub max_upload_bytes: usize,
}

/// Where posts and images live on disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// The JSON document holding every post.
    pub posts_file: PathBuf,
    /// Directory served publicly.
    pub public_dir: PathBuf,
    /// Sub-directory of `public_dir` holding per-post image directories.
    pub asset_root: String,
}

impl StorageConfig {
    /// Filesystem directory of the asset root.
    pub fn asset_dir(&self) -> PathBuf {
        self.public_dir.join(&self.asset_root)
    }

    /// Public mount path of the asset root, e.g. `/images`.
    pub fn url_prefix(&self) -> String {
        format!("/{}", self.asset_root)
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let storage = StorageConfig {
            posts_file: var("POSTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("posts.json")),
            public_dir: var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("public")),
            asset_root: var("ASSET_ROOT")
                .map(|root| root.trim_matches('/').to_string())
                .filter(|root| !root.is_empty())
                .unwrap_or_else(|| "images".to_string()),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            storage,
            max_upload_bytes: var("MAX_UPLOAD_BYTES")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        }
    }
}
