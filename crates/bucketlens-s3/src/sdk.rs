//! [`StorageClient`] implementation on top of `aws-sdk-s3`.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::primitives::{ByteStream, DateTime};
use bucketlens_core::{Bucket, LensConfig, ObjectPage, ObjectSummary};
use chrono::Utc;
use tracing::{debug, trace};

use crate::client::{ClientError, StorageClient};

/// Response header S3 uses to report the region a bucket lives in.
const BUCKET_REGION_HEADER: &str = "x-amz-bucket-region";

/// HTTP status S3 answers with when a bucket is queried in the wrong region.
const MOVED_PERMANENTLY: u16 = 301;

/// Storage client backed by an [`aws_sdk_s3::Client`].
///
/// Objects are listed with `ListObjectsV2`; its continuation token is the
/// page marker.
#[derive(Debug, Clone)]
pub struct SdkStorageClient {
    client: aws_sdk_s3::Client,
    region: Option<String>,
}

impl SdkStorageClient {
    /// Wrap an already configured SDK client.
    #[must_use]
    pub fn new(client: aws_sdk_s3::Client) -> Self {
        let region = client.config().region().map(ToString::to_string);
        Self { client, region }
    }

    /// Build a client from the default AWS provider chain, narrowed by `config`.
    pub async fn from_config(config: &LensConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        let client = Self::new(aws_sdk_s3::Client::from_conf(builder.build()));
        debug!(
            region = client.region.as_deref().unwrap_or("<unset>"),
            profile = config.profile.as_deref().unwrap_or("<default>"),
            endpoint_url = config.endpoint_url.as_deref().unwrap_or("<default>"),
            "created S3 client"
        );
        client
    }

    /// The wrapped SDK client.
    #[must_use]
    pub fn inner(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

#[async_trait]
impl StorageClient for SdkStorageClient {
    async fn list_buckets(&self) -> Result<Vec<Bucket>, ClientError> {
        let mut buckets = Vec::new();
        let mut token: Option<String> = None;

        // Without `max_buckets` S3 answers in one page, but S3-compatible
        // servers may still hand back a continuation token.
        loop {
            let output = self
                .client
                .list_buckets()
                .set_continuation_token(token.take())
                .send()
                .await
                .map_err(client_error)?;

            buckets.extend(output.buckets().iter().filter_map(|b| {
                b.name()
                    .map(|name| Bucket::new(name, b.creation_date().and_then(to_chrono)))
            }));

            match output.continuation_token() {
                Some(next) if !next.is_empty() => token = Some(next.to_owned()),
                _ => break,
            }
        }

        Ok(buckets)
    }

    async fn list_objects(
        &self,
        bucket: &str,
        marker: Option<&str>,
    ) -> Result<ObjectPage, ClientError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(bucket)
            .set_continuation_token(marker.map(ToOwned::to_owned))
            .send()
            .await
            .map_err(client_error)?;

        let objects: Vec<ObjectSummary> = output
            .contents()
            .iter()
            .map(|obj| {
                let size = obj.size().and_then(|s| u64::try_from(s).ok()).unwrap_or(0);
                ObjectSummary::new(obj.key().unwrap_or_default(), size)
            })
            .collect();

        let next_marker = if output.is_truncated() == Some(true) {
            output.next_continuation_token().map(ToOwned::to_owned)
        } else {
            None
        };

        trace!(
            bucket = %bucket,
            count = objects.len(),
            truncated = next_marker.is_some(),
            "list_objects_v2 page received"
        );

        Ok(ObjectPage::new(objects, next_marker))
    }

    async fn get_object(&self, bucket: &str, key: &str) -> Result<ByteStream, ClientError> {
        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(client_error)?;
        Ok(output.body)
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Flatten an SDK error into a [`ClientError`].
///
/// Service errors keep their S3 error code and message. Transport failures
/// are named after the [`SdkError`] variant. A bare 301 without an error body
/// (as returned for `HEAD` requests) is reported as a permanent redirect.
fn client_error<E>(err: SdkError<E>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    let raw = err.raw_response();
    let status = raw.map(|r| r.status().as_u16());
    let bucket_region = raw
        .and_then(|r| r.headers().get(BUCKET_REGION_HEADER))
        .map(ToOwned::to_owned);

    let service = err.as_service_error();
    let code = match service.and_then(ProvideErrorMetadata::code) {
        Some(code) => code.to_owned(),
        None if status == Some(MOVED_PERMANENTLY) => ClientError::PERMANENT_REDIRECT.to_owned(),
        None => failure_kind(&err).to_owned(),
    };
    let message = service
        .and_then(ProvideErrorMetadata::message)
        .map_or_else(|| DisplayErrorContext(&err).to_string(), ToOwned::to_owned);

    ClientError {
        code,
        message,
        bucket_region,
    }
}

fn failure_kind<E, R>(err: &SdkError<E, R>) -> &'static str {
    match err {
        SdkError::ConstructionFailure(_) => "ConstructionFailure",
        SdkError::TimeoutError(_) => "TimeoutError",
        SdkError::DispatchFailure(_) => "DispatchFailure",
        SdkError::ResponseError(_) => "ResponseError",
        SdkError::ServiceError(_) => "ServiceError",
        _ => "SdkError",
    }
}

fn to_chrono(dt: &DateTime) -> Option<chrono::DateTime<Utc>> {
    chrono::DateTime::from_timestamp(dt.secs(), dt.subsec_nanos())
}
