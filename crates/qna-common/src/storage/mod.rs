//! Object storage for user uploads
//!
//! Uploaded files are stored under a dated key and served from a public
//! base URL. The trait keeps handlers independent of where bytes end up.

mod local;

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};

use crate::error::AppResult;

pub use local::LocalObjectStore;

/// Destination for uploaded files
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` under a key derived from `desired_name` and return its public URL
    async fn upload(&self, bytes: &[u8], desired_name: &str) -> AppResult<String>;
}

/// Offset used for key dates (UTC+9)
const KEY_OFFSET_SECS: i32 = 9 * 3600;

/// Build the object key for `desired_name` uploaded at `now`
///
/// `photo.png` becomes `photo-2024-03-01.png`; a name without an extension
/// gets `.bin`.
pub fn object_key(desired_name: &str, now: DateTime<Utc>) -> String {
    let date = FixedOffset::east_opt(KEY_OFFSET_SECS)
        .map_or_else(|| now.date_naive(), |tz| now.with_timezone(&tz).date_naive())
        .format("%Y-%m-%d");

    match desired_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => {
            format!("{stem}-{date}.{ext}")
        }
        _ => format!("{desired_name}-{date}.bin"),
    }
}
