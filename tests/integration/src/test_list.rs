//! Object listing integration tests.

#[cfg(test)]
mod tests {
    use bucketlens_s3::{SdkStorageClient, list_all_objects};

    use crate::{cleanup_bucket, create_test_bucket, lens, put_object, s3_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_all_objects_with_sizes() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "listall").await;
        put_object(&client, &bucket, "documents/readme.txt", b"hello").await;
        put_object(&client, &bucket, "photos/2024/img1.jpg", &[0u8; 2048]).await;
        put_object(&client, &bucket, "root.txt", b"").await;

        let storage = SdkStorageClient::new(client.clone());
        let objects = list_all_objects(&storage, &bucket).await.expect("list");

        let mut listed: Vec<(&str, u64)> =
            objects.iter().map(|o| (o.key.as_str(), o.size)).collect();
        listed.sort_unstable();
        assert_eq!(
            listed,
            vec![
                ("documents/readme.txt", 5),
                ("photos/2024/img1.jpg", 2048),
                ("root.txt", 0),
            ]
        );

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_follow_continuation_tokens_past_first_page() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "paginate").await;

        // The default page holds 1000 keys, so 1005 objects need two pages.
        for i in 0..1005 {
            put_object(&client, &bucket, &format!("key-{i:04}"), b"x").await;
        }

        let storage = SdkStorageClient::new(client.clone());
        let objects = list_all_objects(&storage, &bucket).await.expect("list");

        assert_eq!(objects.len(), 1005);
        assert_eq!(objects[0].key, "key-0000");
        assert_eq!(objects[1004].key, "key-1004");

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_empty_bucket() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "empty").await;

        let storage = SdkStorageClient::new(client.clone());
        let objects = list_all_objects(&storage, &bucket).await.expect("list empty");

        assert!(objects.is_empty());

        cleanup_bucket(&client, &bucket).await;
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_serve_cached_listing_until_refreshed() {
        let client = s3_client();
        let bucket = create_test_bucket(&client, "cache").await;
        let dir = tempfile::tempdir().expect("tempdir");
        let lens = lens(&client, dir.path());

        put_object(&client, &bucket, "first.txt", b"1").await;
        assert_eq!(lens.objects(&bucket).await.expect("list").len(), 1);

        put_object(&client, &bucket, "second.txt", b"2").await;
        assert_eq!(lens.objects(&bucket).await.expect("cached").len(), 1);
        assert_eq!(lens.refresh_objects(&bucket).await.expect("refresh").len(), 2);

        cleanup_bucket(&client, &bucket).await;
    }
}
