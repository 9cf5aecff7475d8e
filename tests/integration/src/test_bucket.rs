//! Bucket listing integration tests.

#[cfg(test)]
mod tests {
    use bucketlens_s3::{SdkStorageClient, list_buckets};

    use crate::{cleanup_bucket, create_test_bucket, s3_client};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_list_created_buckets() {
        let client = s3_client();
        let b1 = create_test_bucket(&client, "list1").await;
        let b2 = create_test_bucket(&client, "list2").await;

        let storage = SdkStorageClient::new(client.clone());
        let buckets = list_buckets(&storage).await.expect("list_buckets");
        let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();

        assert!(names.contains(&b1.as_str()), "should contain {b1}");
        assert!(names.contains(&b2.as_str()), "should contain {b2}");

        let created = buckets.iter().find(|b| b.name == b1).expect("b1 listed");
        assert!(created.creation_date.is_some());

        cleanup_bucket(&client, &b1).await;
        cleanup_bucket(&client, &b2).await;
    }
}
