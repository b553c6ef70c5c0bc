//! Object storage access
//!
//! Storage is the sole persistence layer of the pipeline: audio goes in,
//! transcript JSON and the summary come out. Backends sit behind the
//! [`ObjectStore`] trait so handlers never know which one they talk to.

mod fs;
mod s3;

pub use fs::FsStore;
pub use s3::S3Store;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use crate::config::Settings;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full content of an object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes>;

    /// Write an object in a single put, replacing any previous content at
    /// the key.
    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()>;
}

/// Build an object store from runtime settings.
pub fn build_object_store(settings: &Settings) -> Result<Arc<dyn ObjectStore>> {
    match settings.storage.backend.to_lowercase().as_str() {
        "s3" => Ok(Arc::new(S3Store::from_settings(settings))),
        "fs" => Ok(Arc::new(FsStore::from_settings(settings))),
        other => anyhow::bail!(
            "Unsupported storage.backend '{}'. Supported backends: s3, fs",
            other
        ),
    }
}
