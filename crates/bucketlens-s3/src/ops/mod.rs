//! Listing and download operations.
//!
//! Each operation is a free async function generic over [`crate::StorageClient`],
//! so it can run against the SDK client or an in-memory fake.

pub mod bucket;
pub mod download;
pub mod list;
