//! Front-end facade over a storage client and the listing cache.
//!
//! [`BucketLens`] serves listings from the [`ListingCache`] when it can and
//! goes to the storage client otherwise. `refresh_*` methods always refetch;
//! a failed refresh leaves the previous snapshot in place so a front end can
//! keep showing it next to the error.

use std::path::PathBuf;
use std::sync::Arc;

use bucketlens_core::{
    Bucket, LensConfig, LensResult, Listing, ListingCache, ListingKey, ObjectSummary,
};
use tracing::debug;

use crate::client::StorageClient;
use crate::console::{bucket_console_url, object_console_url};
use crate::ops::{bucket, download, list};
use crate::sdk::SdkStorageClient;

/// Storage client, listing cache, and configuration bundled for a front end.
///
/// All fields are `Arc`-wrapped so the facade can be shared across tasks.
#[derive(Debug, Clone)]
pub struct BucketLens {
    client: Arc<dyn StorageClient>,
    cache: Arc<ListingCache>,
    config: Arc<LensConfig>,
}

impl BucketLens {
    /// Create a facade over an existing client.
    #[must_use]
    pub fn new(client: Arc<dyn StorageClient>, config: LensConfig) -> Self {
        Self {
            client,
            cache: Arc::new(ListingCache::new()),
            config: Arc::new(config),
        }
    }

    /// Validate `config` and build an AWS SDK backed facade from it.
    pub async fn from_config(config: LensConfig) -> LensResult<Self> {
        config.validate()?;
        let client = SdkStorageClient::from_config(&config).await;
        Ok(Self::new(Arc::new(client), config))
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Returns a reference to the listing cache.
    #[must_use]
    pub fn cache(&self) -> &ListingCache {
        &self.cache
    }

    /// Region the client queries, if known.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.client.region()
    }

    /// Bucket list, from the cache when present.
    pub async fn buckets(&self) -> LensResult<Arc<[Bucket]>> {
        if let Some(buckets) = self.cache.buckets() {
            debug!(count = buckets.len(), "serving cached bucket list");
            return Ok(buckets);
        }
        self.refresh_buckets().await
    }

    /// Refetch the bucket list and replace the cached snapshot.
    pub async fn refresh_buckets(&self) -> LensResult<Arc<[Bucket]>> {
        let buckets: Arc<[Bucket]> = bucket::list_buckets(self.client.as_ref()).await?.into();
        self.cache
            .insert(ListingKey::Buckets, Listing::Buckets(Arc::clone(&buckets)));
        Ok(buckets)
    }

    /// Every object in `bucket`, from the cache when present.
    pub async fn objects(&self, bucket: &str) -> LensResult<Arc<[ObjectSummary]>> {
        if let Some(objects) = self.cache.objects(bucket) {
            debug!(bucket = %bucket, count = objects.len(), "serving cached object list");
            return Ok(objects);
        }
        self.refresh_objects(bucket).await
    }

    /// Refetch every object in `bucket` and replace the cached snapshot.
    pub async fn refresh_objects(&self, bucket: &str) -> LensResult<Arc<[ObjectSummary]>> {
        let objects: Arc<[ObjectSummary]> =
            list::list_all_objects(self.client.as_ref(), bucket).await?.into();
        self.cache.insert(
            ListingKey::objects(bucket),
            Listing::Objects(Arc::clone(&objects)),
        );
        Ok(objects)
    }

    /// Drop the cached listing for `key`.
    pub fn invalidate(&self, key: &ListingKey) {
        self.cache.invalidate(key);
    }

    /// Download one object into the configured download directory.
    pub async fn download(&self, bucket: &str, key: &str) -> LensResult<PathBuf> {
        download::download_object(self.client.as_ref(), bucket, key, &self.config.download_dir)
            .await
    }

    /// Console link for `bucket` in the client's region.
    #[must_use]
    pub fn bucket_url(&self, bucket: &str) -> String {
        bucket_console_url(bucket, self.region())
    }

    /// Console link for `bucket/key` in the client's region.
    #[must_use]
    pub fn object_url(&self, bucket: &str, key: &str) -> String {
        object_console_url(bucket, key, self.region())
    }
}
