//! Error classification integration tests.

#[cfg(test)]
mod tests {
    use bucketlens_core::LensError;
    use bucketlens_s3::{SdkStorageClient, list_all_objects};

    use crate::{s3_client, test_bucket_name};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_missing_bucket_as_service_error() {
        let client = s3_client();
        let bucket = test_bucket_name("ghost");

        let storage = SdkStorageClient::new(client);
        let err = list_all_objects(&storage, &bucket)
            .await
            .expect_err("list on nonexistent bucket should fail");

        match err {
            LensError::Service { name, message } => {
                assert_eq!(name, "NoSuchBucket");
                assert!(!message.is_empty());
            }
            other => panic!("expected a service error, got {other:?}"),
        }
    }
}
