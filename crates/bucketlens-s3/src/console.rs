//! Links for opening buckets and objects outside the tool.
//!
//! Listing failures caused by a region mismatch are recovered by sending the
//! user to the bucket in the AWS console, which resolves the region itself.

use bucketlens_core::LensError;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Base URL of the S3 console.
pub const CONSOLE_BASE: &str = "https://s3.console.aws.amazon.com/s3";

/// Characters escaped in query values: everything except RFC 3986 unreserved.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Console page for a bucket.
///
/// # Examples
///
/// ```
/// use bucketlens_s3::console::bucket_console_url;
///
/// assert_eq!(
///     bucket_console_url("logs", Some("eu-west-1")),
///     "https://s3.console.aws.amazon.com/s3/buckets/logs?region=eu-west-1"
/// );
/// assert_eq!(
///     bucket_console_url("logs", None),
///     "https://s3.console.aws.amazon.com/s3/buckets/logs"
/// );
/// ```
#[must_use]
pub fn bucket_console_url(bucket: &str, region: Option<&str>) -> String {
    match region {
        Some(region) => format!(
            "{CONSOLE_BASE}/buckets/{bucket}?region={}",
            utf8_percent_encode(region, QUERY_VALUE)
        ),
        None => format!("{CONSOLE_BASE}/buckets/{bucket}"),
    }
}

/// Console page for a single object.
#[must_use]
pub fn object_console_url(bucket: &str, key: &str, region: Option<&str>) -> String {
    let prefix = utf8_percent_encode(key, QUERY_VALUE);
    match region {
        Some(region) => format!(
            "{CONSOLE_BASE}/object/{bucket}?region={}&prefix={prefix}",
            utf8_percent_encode(region, QUERY_VALUE)
        ),
        None => format!("{CONSOLE_BASE}/object/{bucket}?prefix={prefix}"),
    }
}

/// `s3://` URI of an object.
#[must_use]
pub fn object_uri(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

/// Virtual-hosted endpoint of `bucket` in `region`.
#[must_use]
pub fn regional_endpoint(bucket: &str, region: &str) -> String {
    format!("{bucket}.s3.{region}.amazonaws.com")
}

/// Recovery link for a [`LensError::RegionMismatch`], `None` for other errors.
#[must_use]
pub fn region_mismatch_url(err: &LensError) -> Option<String> {
    match err {
        LensError::RegionMismatch { bucket, .. } => Some(bucket_console_url(bucket, None)),
        _ => None,
    }
}
