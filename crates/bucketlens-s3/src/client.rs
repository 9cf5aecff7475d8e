//! Storage client abstraction.
//!
//! [`StorageClient`] is the narrow surface the listing and download
//! operations need from an object store. It is object-safe so front ends can
//! hold an `Arc<dyn StorageClient>`.

use std::fmt;

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use bucketlens_core::{Bucket, LensError, ObjectPage};

/// Failure reported by a [`StorageClient`] call, before classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ClientError {
    /// Service error code (e.g. `NoSuchBucket`) or transport failure kind.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Region the bucket actually lives in, when the service reported it.
    pub bucket_region: Option<String>,
}

impl ClientError {
    /// Error code S3 uses when a bucket must be addressed through another endpoint.
    pub const PERMANENT_REDIRECT: &str = "PermanentRedirect";

    /// Create an error with a code and message.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            bucket_region: None,
        }
    }

    /// Attach the region reported for the bucket.
    #[must_use]
    pub fn with_bucket_region(mut self, region: impl Into<String>) -> Self {
        self.bucket_region = Some(region.into());
        self
    }

    /// Whether this is a permanent redirect to the bucket's own region.
    #[must_use]
    pub fn is_permanent_redirect(&self) -> bool {
        self.code == Self::PERMANENT_REDIRECT
    }

    /// Convert into an opaque [`LensError::Service`], keeping code and message.
    #[must_use]
    pub fn into_service_error(self) -> LensError {
        LensError::Service {
            name: self.code,
            message: self.message,
        }
    }
}

/// The object-store operations Bucketlens depends on.
#[async_trait]
pub trait StorageClient: Send + Sync + fmt::Debug {
    /// List every bucket visible to the active credentials, in service order.
    async fn list_buckets(&self) -> Result<Vec<Bucket>, ClientError>;

    /// Fetch one page of objects in `bucket`.
    ///
    /// `marker` is `None` for the first page and the previous page's
    /// `next_marker` afterwards.
    async fn list_objects(
        &self,
        bucket: &str,
        marker: Option<&str>,
    ) -> Result<ObjectPage, ClientError>;

    /// Open the body of a single object.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, ClientError>;

    /// Region this client sends requests to, if known.
    fn region(&self) -> Option<&str>;
}
