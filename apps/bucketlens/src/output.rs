//! Plain-text and JSON rendering of listings.

use anyhow::Result;
use bucketlens_core::{Bucket, ObjectSummary};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line per bucket: creation date and name.
pub fn render_buckets(buckets: &[Bucket], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(buckets)? + "\n");
    }

    let mut out = String::new();
    for bucket in buckets {
        let created = bucket.creation_date.map_or_else(
            || "-".to_owned(),
            |date| date.format(DATE_FORMAT).to_string(),
        );
        out.push_str(&format!("{created:<19}  {}\n", bucket.name));
    }
    Ok(out)
}

/// One line per object: formatted size and key.
pub fn render_objects(objects: &[ObjectSummary], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(objects)? + "\n");
    }

    let mut out = String::new();
    for object in objects {
        out.push_str(&format!("{:>8}  {}\n", object.display_size(), object.key));
    }
    Ok(out)
}
