//! Download integration tests.

#[cfg(test)]
mod tests {
    use bucketlens_core::LensError;

    use crate::{cleanup_bucket, create_test_bucket, lens, put_object, s3_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_download_object_to_directory() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "download").await;
        let body = b"hello, bucketlens!";
        put_object(&client, &bucket, "nested/dir/hello.txt", body).await;

        let dir = tempfile::tempdir().expect("tempdir");
        let path = lens(&client, dir.path())
            .download(&bucket, "nested/dir/hello.txt")
            .await
            .expect("download");

        assert_eq!(path, dir.path().join("hello.txt"));
        assert_eq!(std::fs::read(&path).expect("read back"), body);

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_missing_key_as_download_error() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "nokey").await;

        let dir = tempfile::tempdir().expect("tempdir");
        let err = lens(&client, dir.path())
            .download(&bucket, "missing.txt")
            .await
            .expect_err("should fail");

        assert!(matches!(err, LensError::Download { ref key, .. } if key == "missing.txt"));
        assert!(!dir.path().join("missing.txt").exists());

        cleanup_bucket(&client, &bucket).await;
    }
}
