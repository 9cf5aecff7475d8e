//! Error types for Bucketlens operations.

/// Error returned by listing, download, and configuration operations.
///
/// Only [`LensError::RegionMismatch`] is ever produced by local
/// classification; every other storage failure is passed through as an
/// opaque [`LensError::Service`] carrying the original name and message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LensError {
    /// The bucket lives in a different region than the client queried.
    #[error("bucket {bucket} must be addressed through a different endpoint{}", endpoint_suffix(.endpoint.as_deref()))]
    RegionMismatch {
        /// The bucket that was requested.
        bucket: String,
        /// The endpoint the service asked us to use, when it told us.
        endpoint: Option<String>,
    },

    /// Any other failure reported by the storage service or its transport.
    #[error("{name}: {message}")]
    Service {
        /// Error code or failure kind (e.g. `AccessDenied`, `DispatchFailure`).
        name: String,
        /// Human-readable message.
        message: String,
    },

    /// A single-object download could not be fetched or written.
    #[error("failed to download {key}: {message}")]
    Download {
        /// Key of the object being downloaded.
        key: String,
        /// Human-readable reason.
        message: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LensError {
    /// Build a [`LensError::Service`] from a name and a message.
    #[must_use]
    pub fn service(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Build a [`LensError::Download`] for the given key.
    #[must_use]
    pub fn download(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Download {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Whether the caller can recover by sending the user to the bucket's own region.
    #[must_use]
    pub fn is_region_mismatch(&self) -> bool {
        matches!(self, Self::RegionMismatch { .. })
    }
}

fn endpoint_suffix(endpoint: Option<&str>) -> String {
    endpoint.map_or_else(String::new, |e| format!(" ({e})"))
}

/// Convenience result type for Bucketlens operations.
pub type LensResult<T> = Result<T, LensError>;
