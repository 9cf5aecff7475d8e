//! Bucketlens configuration.
//!
//! Provides [`LensConfig`], loaded from environment variables and then
//! overridden by command-line flags in the front end.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{LensError, LensResult};

/// Client and download configuration.
///
/// Region, profile, and endpoint are optional: when unset, the AWS SDK's
/// default provider chain decides.
///
/// # Examples
///
/// ```
/// use bucketlens_core::LensConfig;
///
/// let config = LensConfig::builder()
///     .region(Some("eu-west-1".to_owned()))
///     .build();
/// assert_eq!(config.region.as_deref(), Some("eu-west-1"));
/// assert!(!config.force_path_style);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct LensConfig {
    /// Region the client queries.
    #[builder(default)]
    pub region: Option<String>,

    /// Named profile from the shared AWS config files.
    #[builder(default)]
    pub profile: Option<String>,

    /// Custom endpoint URL (e.g. a local S3-compatible server).
    #[builder(default)]
    pub endpoint_url: Option<String>,

    /// Whether to use path-style addressing instead of virtual-hosted style.
    #[builder(default = false)]
    pub force_path_style: bool,

    /// Directory downloaded objects are written to.
    #[builder(default = default_download_dir())]
    pub download_dir: PathBuf,

    /// Log level filter string (e.g. `"warn"`, `"debug"`).
    #[builder(default = String::from("warn"))]
    pub log_level: String,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            force_path_style: false,
            download_dir: default_download_dir(),
            log_level: String::from("warn"),
        }
    }
}

impl LensConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION`, then `AWS_DEFAULT_REGION` | *(unset)* |
    /// | `AWS_PROFILE` | *(unset)* |
    /// | `S3_ENDPOINT_URL` | *(unset)* |
    /// | `S3_FORCE_PATH_STYLE` | `false` |
    /// | `DOWNLOAD_DIR` | `$HOME/Downloads` |
    /// | `LOG_LEVEL` | `warn` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(v) = non_empty_var("AWS_REGION").or_else(|| non_empty_var("AWS_DEFAULT_REGION"))
        {
            config.region = Some(v);
        }
        if let Some(v) = non_empty_var("AWS_PROFILE") {
            config.profile = Some(v);
        }
        if let Some(v) = non_empty_var("S3_ENDPOINT_URL") {
            config.endpoint_url = Some(v);
        }
        if let Some(v) = non_empty_var("S3_FORCE_PATH_STYLE") {
            config.force_path_style = parse_bool(&v);
        }
        if let Some(v) = non_empty_var("DOWNLOAD_DIR") {
            config.download_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty_var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Check the values that cannot be deferred to the SDK.
    pub fn validate(&self) -> LensResult<()> {
        if let Some(endpoint) = &self.endpoint_url {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(LensError::Config(format!(
                    "endpoint URL must start with http:// or https://: {endpoint}"
                )));
            }
        }
        if self.download_dir.as_os_str().is_empty() {
            return Err(LensError::Config("download directory is empty".to_owned()));
        }
        Ok(())
    }
}

/// `$HOME/Downloads`, or `./Downloads` when `HOME` is not set.
fn default_download_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join("Downloads")
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}
