//! Single-object download.

use std::path::{Path, PathBuf};

use aws_sdk_s3::error::DisplayErrorContext;
use bucketlens_core::{LensError, LensResult, key_file_name};
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use crate::client::StorageClient;

/// Download `bucket/key` into `dir`, named after the last segment of the key.
///
/// `dir` is created if missing and an existing file of the same name is
/// replaced. Any failure to fetch, stream, or write the object is reported
/// as [`LensError::Download`]; a partially written file is removed.
pub async fn download_object<C>(
    client: &C,
    bucket: &str,
    key: &str,
    dir: &Path,
) -> LensResult<PathBuf>
where
    C: StorageClient + ?Sized,
{
    let file_name =
        key_file_name(key).ok_or_else(|| LensError::download(key, "object key has no file name"))?;

    let mut body = client
        .get_object(bucket, key)
        .await
        .map_err(|e| LensError::download(key, e.to_string()))?;

    fs::create_dir_all(dir)
        .await
        .map_err(|e| LensError::download(key, format!("cannot create {}: {e}", dir.display())))?;

    let path = dir.join(file_name);
    let mut file = File::create(&path)
        .await
        .map_err(|e| LensError::download(key, format!("cannot create {}: {e}", path.display())))?;

    let mut written: u64 = 0;
    let copied: Result<(), String> = async {
        while let Some(chunk) = body
            .try_next()
            .await
            .map_err(|e| DisplayErrorContext(&e).to_string())?
        {
            file.write_all(&chunk).await.map_err(|e| e.to_string())?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|e| e.to_string())
    }
    .await;

    if let Err(message) = copied {
        drop(file);
        if let Err(e) = fs::remove_file(&path).await {
            warn!(path = %path.display(), error = %e, "failed to remove partial download");
        }
        return Err(LensError::download(key, message));
    }

    info!(
        bucket = %bucket,
        key = %key,
        path = %path.display(),
        bytes = written,
        "download completed"
    );
    Ok(path)
}
