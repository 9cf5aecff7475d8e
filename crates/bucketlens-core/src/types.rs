//! Bucket and object snapshots returned by listings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::human_readable_size;

/// A bucket visible to the active credentials.
///
/// Identity is the name, which is unique within an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bucket {
    /// Bucket name.
    pub name: String,
    /// When the bucket was created, if the service reported it.
    pub creation_date: Option<DateTime<Utc>>,
}

impl Bucket {
    /// Create a bucket snapshot.
    #[must_use]
    pub fn new(name: impl Into<String>, creation_date: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            creation_date,
        }
    }
}

/// A single object in a bucket listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectSummary {
    /// Object key, a `/`-delimited path.
    pub key: String,
    /// Object size in bytes.
    pub size: u64,
}

impl ObjectSummary {
    /// Create an object snapshot.
    #[must_use]
    pub fn new(key: impl Into<String>, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }

    /// The last `/`-separated segment of the key.
    ///
    /// Returns `None` for keys ending in `/` (folder placeholders) and for
    /// the empty key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bucketlens_core::ObjectSummary;
    ///
    /// let obj = ObjectSummary::new("photos/2024/img1.jpg", 10);
    /// assert_eq!(obj.file_name(), Some("img1.jpg"));
    /// assert_eq!(ObjectSummary::new("photos/", 0).file_name(), None);
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        key_file_name(&self.key)
    }

    /// Size rendered for display, e.g. `"2 MB"`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn display_size(&self) -> String {
        human_readable_size(self.size as f64)
    }
}

/// One page of a paginated object listing.
///
/// A page with `next_marker == None` is the last one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPage {
    /// Objects on this page, in service order.
    pub objects: Vec<ObjectSummary>,
    /// Continuation marker for the next page.
    pub next_marker: Option<String>,
}

impl ObjectPage {
    /// Create a page.
    #[must_use]
    pub fn new(objects: Vec<ObjectSummary>, next_marker: Option<String>) -> Self {
        Self {
            objects,
            next_marker,
        }
    }

    /// Whether another page follows this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.next_marker.is_some()
    }
}

/// Last `/` segment of an object key, or `None` if the key ends in `/`.
///
/// Downloads use this as the local file name.
#[must_use]
pub fn key_file_name(key: &str) -> Option<&str> {
    key.rsplit('/').next().filter(|name| !name.is_empty())
}
