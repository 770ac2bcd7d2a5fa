//! Object storage behind a trait so handlers do not depend on S3 directly.
//!
//! `AppState` holds an `Arc<dyn ResourceStore>`; production wires `S3ResourceStore`.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::resources::ResourceError;

/// One object as reported by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub size_bytes: u64,
    pub last_modified: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// All objects whose key starts with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, ResourceError>;

    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), ResourceError>;

    async fn exists(&self, key: &str) -> Result<bool, ResourceError>;

    /// Time-limited GET link for `key`.
    async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, ResourceError>;
}

pub struct S3ResourceStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ResourceStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ResourceStore for S3ResourceStore {
    async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, ResourceError> {
        let mut pages = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix)
            .into_paginator()
            .send();

        let mut objects = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| ResourceError::Storage(format!("S3 list failed: {e}")))?;
            for object in page.contents() {
                let Some(key) = object.key() else { continue };
                objects.push(StoredObject {
                    key: key.to_string(),
                    size_bytes: object.size().unwrap_or(0).max(0) as u64,
                    last_modified: object.last_modified().and_then(|t| {
                        DateTime::<Utc>::from_timestamp(t.secs(), t.subsec_nanos())
                    }),
                });
            }
        }
        Ok(objects)
    }

    async fn put(&self, key: &str, body: Bytes, content_type: &str) -> Result<(), ResourceError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| ResourceError::Storage(format!("S3 upload failed: {e}")))?;

        info!("Uploaded {size} bytes to s3://{}/{}", self.bucket, key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, ResourceError> {
        match self
            .client
            .head_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(e) if e.as_service_error().is_some_and(|se| se.is_not_found()) => Ok(false),
            Err(e) => Err(ResourceError::Storage(format!("S3 head failed: {e}"))),
        }
    }

    async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, ResourceError> {
        let config = PresigningConfig::expires_in(ttl)
            .map_err(|e| ResourceError::Storage(format!("Invalid presign TTL: {e}")))?;
        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(config)
            .await
            .map_err(|e| ResourceError::Storage(format!("S3 presign failed: {e}")))?;
        Ok(request.uri().to_string())
    }
}

#[cfg(test)]
pub mod memory {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use super::*;

    /// In-process store for tests.
    #[derive(Default)]
    pub struct InMemoryStore {
        objects: Mutex<BTreeMap<String, Bytes>>,
    }

    #[async_trait]
    impl ResourceStore for InMemoryStore {
        async fn list(&self, prefix: &str) -> Result<Vec<StoredObject>, ResourceError> {
            let objects = self.objects.lock().unwrap();
            Ok(objects
                .iter()
                .filter(|(key, _)| key.starts_with(prefix))
                .map(|(key, body)| StoredObject {
                    key: key.clone(),
                    size_bytes: body.len() as u64,
                    last_modified: None,
                })
                .collect())
        }

        async fn put(&self, key: &str, body: Bytes, _content_type: &str) -> Result<(), ResourceError> {
            self.objects.lock().unwrap().insert(key.to_string(), body);
            Ok(())
        }

        async fn exists(&self, key: &str) -> Result<bool, ResourceError> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        async fn presign_get(&self, key: &str, ttl: Duration) -> Result<String, ResourceError> {
            Ok(format!("memory://{key}?expires={}", ttl.as_secs()))
        }
    }
}
