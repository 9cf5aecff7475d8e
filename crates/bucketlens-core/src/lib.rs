//! Core types, configuration, and formatting for Bucketlens.
//!
//! This crate holds the pieces of Bucketlens that do not talk to the network:
//! the bucket and object snapshots returned by listings, the error taxonomy
//! shared by every operation, environment-driven configuration, the
//! human-readable size formatter, and the listing cache used by front ends.

mod cache;
mod config;
mod error;
mod format;
mod types;

pub use cache::{Listing, ListingCache, ListingKey};
pub use config::LensConfig;
pub use error::{LensError, LensResult};
pub use format::{SIZE_UNITS, human_readable_size};
pub use types::{Bucket, ObjectPage, ObjectSummary, key_file_name};
