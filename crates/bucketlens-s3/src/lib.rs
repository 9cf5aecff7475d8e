//! S3 listing, download, and console links for Bucketlens.
//!
//! Operations are written against the [`StorageClient`] trait so they can be
//! exercised without a network. [`SdkStorageClient`] is the production
//! implementation on top of `aws-sdk-s3`, and [`BucketLens`] ties a client to
//! the listing cache and configuration for front ends.
//!
//! # Architecture
//!
//! ```text
//! front end (CLI)
//!        |
//!        v
//!   BucketLens (cache + config)
//!        |
//!        v
//!   ops::{bucket, list, download}
//!        |
//!        v
//!   StorageClient (SdkStorageClient -> aws-sdk-s3)
//! ```

pub mod client;
pub mod console;
pub mod ops;
pub mod provider;
pub mod sdk;


pub use client::{ClientError, StorageClient};
pub use ops::bucket::list_buckets;
pub use ops::download::download_object;
pub use ops::list::list_all_objects;
pub use provider::BucketLens;
pub use sdk::SdkStorageClient;
