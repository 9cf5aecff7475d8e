//! Listing cache keyed by operation and parameters.
//!
//! Provides [`ListingCache`], a thread-safe map from a [`ListingKey`] to the
//! last successful [`Listing`] for that key. Entries never expire on their
//! own; callers invalidate or replace them explicitly, which lets a front end
//! keep showing a stale snapshot while it revalidates.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::trace;

use crate::types::{Bucket, ObjectSummary};

/// Which listing a cache entry holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListingKey {
    /// The account's bucket list.
    Buckets,
    /// All objects of one bucket.
    Objects {
        /// Bucket name.
        bucket: String,
    },
}

impl ListingKey {
    /// Key for the object listing of `bucket`.
    #[must_use]
    pub fn objects(bucket: impl Into<String>) -> Self {
        Self::Objects {
            bucket: bucket.into(),
        }
    }
}

/// A cached listing snapshot.
///
/// Snapshots are shared, so handing one out is a reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Result of a bucket listing.
    Buckets(Arc<[Bucket]>),
    /// Result of a full object listing.
    Objects(Arc<[ObjectSummary]>),
}

/// Thread-safe cache of listing snapshots.
///
/// # Examples
///
/// ```
/// use bucketlens_core::{Bucket, Listing, ListingCache, ListingKey};
///
/// let cache = ListingCache::new();
/// cache.insert(ListingKey::Buckets, Listing::Buckets(vec![Bucket::new("logs", None)].into()));
/// assert!(cache.get(&ListingKey::Buckets).is_some());
///
/// cache.invalidate(&ListingKey::Buckets);
/// assert!(cache.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ListingCache {
    inner: DashMap<ListingKey, Listing>,
}

impl ListingCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    /// Get the cached listing for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &ListingKey) -> Option<Listing> {
        self.inner.get(key).map(|entry| entry.value().clone())
    }

    /// Cached bucket list, if present.
    #[must_use]
    pub fn buckets(&self) -> Option<Arc<[Bucket]>> {
        match self.get(&ListingKey::Buckets)? {
            Listing::Buckets(buckets) => Some(buckets),
            Listing::Objects(_) => None,
        }
    }

    /// Cached object list for `bucket`, if present.
    #[must_use]
    pub fn objects(&self, bucket: &str) -> Option<Arc<[ObjectSummary]>> {
        match self.get(&ListingKey::objects(bucket))? {
            Listing::Objects(objects) => Some(objects),
            Listing::Buckets(_) => None,
        }
    }

    /// Store `listing` under `key`, returning the snapshot it replaced.
    pub fn insert(&self, key: ListingKey, listing: Listing) -> Option<Listing> {
        trace!(?key, "caching listing");
        self.inner.insert(key, listing)
    }

    /// Drop the entry for `key`, returning it if present.
    pub fn invalidate(&self, key: &ListingKey) -> Option<Listing> {
        self.inner.remove(key).map(|(_, v)| v)
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.inner.clear();
    }

    /// Number of cached listings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
