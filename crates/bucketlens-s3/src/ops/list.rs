//! Paginated object listing.
//!
//! [`list_all_objects`] follows continuation markers until the service stops
//! handing them out and returns the concatenation of every page in arrival
//! order.

use bucketlens_core::{LensError, LensResult, ObjectSummary};
use tracing::{debug, trace};

use crate::client::{ClientError, StorageClient};
use crate::console::regional_endpoint;

/// List every object in `bucket`.
///
/// Pages are requested one after another, each with the marker returned by
/// the previous one; there is no page cap. Objects are neither sorted nor
/// deduplicated. An empty bucket yields an empty list after a single call.
///
/// A permanent redirect is reported as [`LensError::RegionMismatch`] so the
/// caller can offer a link to the bucket instead. Any other failure becomes
/// [`LensError::Service`]. Nothing gathered before a failure is returned.
pub async fn list_all_objects<C>(client: &C, bucket: &str) -> LensResult<Vec<ObjectSummary>>
where
    C: StorageClient + ?Sized,
{
    let mut objects = Vec::new();
    let mut marker: Option<String> = None;
    let mut pages = 0_usize;

    loop {
        let page = client
            .list_objects(bucket, marker.as_deref())
            .await
            .map_err(|e| classify(bucket, e))?;
        pages += 1;

        trace!(
            bucket = %bucket,
            page = pages,
            count = page.objects.len(),
            "received object page"
        );

        objects.extend(page.objects);
        match page.next_marker {
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    debug!(
        bucket = %bucket,
        pages,
        count = objects.len(),
        "list_all_objects completed"
    );
    Ok(objects)
}

/// Separate region mismatches from every other listing failure.
fn classify(bucket: &str, err: ClientError) -> LensError {
    if err.is_permanent_redirect() {
        debug!(bucket = %bucket, region = ?err.bucket_region, "bucket lives in another region");
        LensError::RegionMismatch {
            bucket: bucket.to_owned(),
            endpoint: err
                .bucket_region
                .as_deref()
                .map(|region| regional_endpoint(bucket, region)),
        }
    } else {
        err.into_service_error()
    }
}
