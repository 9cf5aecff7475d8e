//! Bucket listing.

use bucketlens_core::{Bucket, LensResult};
use tracing::debug;

use crate::client::{ClientError, StorageClient};

/// List every bucket visible to the client's credentials.
///
/// Buckets come back in service order. Failures are passed through as
/// [`bucketlens_core::LensError::Service`] without retrying.
pub async fn list_buckets<C>(client: &C) -> LensResult<Vec<Bucket>>
where
    C: StorageClient + ?Sized,
{
    let buckets = client
        .list_buckets()
        .await
        .map_err(ClientError::into_service_error)?;

    debug!(count = buckets.len(), "list_buckets completed");
    Ok(buckets)
}
