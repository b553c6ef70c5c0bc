//! Local filesystem storage backend
//!
//! Maps each bucket to a subdirectory of a configured root so the whole
//! pipeline can be exercised locally without remote storage. Content types
//! are not persisted by this backend.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use opendal::{services::Fs, Operator};

use crate::config::Settings;
use crate::storage::ObjectStore;

pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            root: settings.storage.fs_root.clone(),
        }
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn operator(&self, bucket: &str) -> Result<Operator> {
        let bucket_dir = self.root.join(bucket);
        std::fs::create_dir_all(&bucket_dir)
            .with_context(|| format!("Failed to create bucket directory {}", bucket_dir.display()))?;

        let mut builder = Fs::default();
        builder.root(&bucket_dir.to_string_lossy());

        let op = Operator::new(builder)
            .with_context(|| format!("Failed to configure fs operator for bucket {bucket}"))?
            .finish();
        Ok(op)
    }
}

#[async_trait]
impl ObjectStore for FsStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let buffer = self
            .operator(bucket)?
            .read(key)
            .await
            .with_context(|| format!("Failed to read {bucket}/{key}"))?;
        Ok(buffer.to_bytes())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        _content_type: &str,
    ) -> Result<()> {
        self.operator(bucket)?
            .write(key, body)
            .await
            .with_context(|| format!("Failed to write {bucket}/{key}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FsStore::new(dir.path());

        store
            .put_object("calls", "results.txt", Bytes::from("summary text"), "text/plain")
            .await
            .expect("put should succeed");

        let body = store
            .get_object("calls", "results.txt")
            .await
            .expect("get should succeed");
        assert_eq!(body, Bytes::from("summary text"));
    }

    #[tokio::test]
    async fn put_overwrites_previous_object() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FsStore::new(dir.path());

        store
            .put_object("calls", "results.txt", Bytes::from("first"), "text/plain")
            .await
            .expect("first put should succeed");
        store
            .put_object("calls", "results.txt", Bytes::from("second"), "text/plain")
            .await
            .expect("second put should succeed");

        let body = store
            .get_object("calls", "results.txt")
            .await
            .expect("get should succeed");
        assert_eq!(body, Bytes::from("second"));
    }

    #[tokio::test]
    async fn missing_object_is_an_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = FsStore::new(dir.path());

        assert!(store.get_object("calls", "nope.json").await.is_err());
    }
}
