//! S3-compatible object storage backend

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use opendal::{services::S3, Operator};

use crate::config::Settings;
use crate::storage::ObjectStore;

/// S3-compatible backend.
///
/// Buckets are addressed per call, so the operator for a bucket is built on
/// demand; construction is configuration-only and performs no IO.
pub struct S3Store {
    endpoint: String,
    region: String,
    access_key_id: String,
    secret_access_key: String,
}

impl S3Store {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings.storage.endpoint.clone(),
            region: settings.storage.region.clone(),
            access_key_id: settings.storage.access_key_id.clone(),
            secret_access_key: settings.storage.secret_access_key.clone(),
        }
    }

    fn operator(&self, bucket: &str) -> Result<Operator> {
        let mut builder = S3::default();
        builder.root("/");
        builder.bucket(bucket);
        if !self.region.is_empty() {
            builder.region(&self.region);
        }
        if !self.endpoint.is_empty() {
            builder.endpoint(&self.endpoint);
        }
        if !self.access_key_id.is_empty() {
            builder.access_key_id(&self.access_key_id);
            builder.secret_access_key(&self.secret_access_key);
        }

        let op = Operator::new(builder)
            .with_context(|| format!("Failed to configure S3 operator for bucket {bucket}"))?
            .finish();
        Ok(op)
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Bytes> {
        let buffer = self
            .operator(bucket)?
            .read(key)
            .await
            .with_context(|| format!("Failed to read s3://{bucket}/{key}"))?;
        Ok(buffer.to_bytes())
    }

    async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        content_type: &str,
    ) -> Result<()> {
        self.operator(bucket)?
            .write_with(key, body)
            .content_type(content_type)
            .await
            .with_context(|| format!("Failed to write s3://{bucket}/{key}"))?;
        Ok(())
    }
}
