//! Filesystem-backed object store

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{info, instrument};

use super::{object_key, ObjectStore};
use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

/// Writes uploads below a directory and serves them from a base URL
#[derive(Debug, Clone)]
pub struct LocalObjectStore {
    root: PathBuf,
    public_base_url: String,
    max_bytes: usize,
}

impl LocalObjectStore {
    /// Create a store from configuration
    ///
    /// # Errors
    /// Returns a configuration error when no upload directory is set
    pub fn from_config(config: &StorageConfig) -> AppResult<Self> {
        if config.upload_dir.trim().is_empty() {
            return Err(AppError::Config("UPLOAD_DIR is empty".to_string()));
        }

        Ok(Self {
            root: PathBuf::from(&config.upload_dir),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
            max_bytes: config.max_file_size_bytes(),
        })
    }

    /// Maximum accepted payload size in bytes
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }
}

fn sanitize(name: &str) -> AppResult<&str> {
    let name = name.trim();
    if name.is_empty() || name.contains(|c| c == '/' || c == '\\') || name == "." || name == ".." {
        return Err(AppError::validation("invalid file name"));
    }
    Ok(name)
}

#[async_trait]
impl ObjectStore for LocalObjectStore {
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    async fn upload(&self, bytes: &[u8], desired_name: &str) -> AppResult<String> {
        if bytes.len() > self.max_bytes {
            return Err(AppError::validation(format!(
                "file exceeds {} bytes",
                self.max_bytes
            )));
        }

        let key = object_key(sanitize(desired_name)?, Utc::now());

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::ExternalService(format!("create upload dir: {e}")))?;
        tokio::fs::write(self.root.join(&key), bytes)
            .await
            .map_err(|e| AppError::ExternalService(format!("write upload: {e}")))?;

        info!(key = %key, "Stored upload");
        Ok(format!("{}/{key}", self.public_base_url))
    }
}
