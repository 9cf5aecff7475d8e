//! Bucketlens - browse S3 buckets and objects from the command line.
//!
//! Lists buckets and their objects, downloads a single object, and prints
//! console links for opening buckets and objects in a browser.
//!
//! # Usage
//!
//! ```text
//! bucketlens buckets
//! bucketlens objects my-bucket
//! bucketlens download my-bucket reports/2024/q1.pdf
//! bucketlens open my-bucket reports/2024/q1.pdf
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | *(SDK chain)* | Region to query |
//! | `AWS_PROFILE` | *(SDK chain)* | Named credentials profile |
//! | `S3_ENDPOINT_URL` | *(unset)* | Custom S3-compatible endpoint |
//! | `S3_FORCE_PATH_STYLE` | `false` | Path-style addressing |
//! | `DOWNLOAD_DIR` | `$HOME/Downloads` | Where downloads are written |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bucketlens_core::{LensConfig, LensError};
use bucketlens_s3::BucketLens;
use bucketlens_s3::console::{object_uri, region_mismatch_url};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Exit code used when a bucket must be opened in another region.
const EXIT_REGION_MISMATCH: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "bucketlens")]
#[command(about = "Browse S3 buckets and objects")]
#[command(version)]
struct Args {
    /// Region to query (overrides AWS_REGION)
    #[arg(long)]
    region: Option<String>,

    /// Credentials profile (overrides AWS_PROFILE)
    #[arg(long)]
    profile: Option<String>,

    /// Custom S3-compatible endpoint (overrides S3_ENDPOINT_URL)
    #[arg(long)]
    endpoint_url: Option<String>,

    /// Use path-style addressing
    #[arg(long)]
    path_style: bool,

    /// Directory downloads are written to (overrides DOWNLOAD_DIR)
    #[arg(long)]
    download_dir: Option<PathBuf>,

    /// Log level (overrides LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    /// Print listings as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all buckets
    Buckets,
    /// List every object in a bucket
    Objects {
        /// Bucket name
        bucket: String,
    },
    /// Download a single object into the download directory
    Download {
        /// Bucket name
        bucket: String,
        /// Object key
        key: String,
    },
    /// Print the console link for a bucket or object
    Open {
        /// Bucket name
        bucket: String,
        /// Object key
        key: Option<String>,
    },
    /// Print the s3:// URI of an object
    Uri {
        /// Bucket name
        bucket: String,
        /// Object key
        key: String,
    },
}

impl Args {
    /// Apply command-line overrides on top of the environment configuration.
    fn into_config(self, mut config: LensConfig) -> (LensConfig, Command, bool) {
        if let Some(region) = self.region {
            config.region = Some(region);
        }
        if let Some(profile) = self.profile {
            config.profile = Some(profile);
        }
        if let Some(endpoint) = self.endpoint_url {
            config.endpoint_url = Some(endpoint);
        }
        if self.path_style {
            config.force_path_style = true;
        }
        if let Some(dir) = self.download_dir {
            config.download_dir = dir;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        (config, self.command, self.json)
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
/// Logs go to stderr so listings stay pipeable.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn run(lens: &BucketLens, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Buckets => {
            let buckets = lens.buckets().await?;
            print!("{}", output::render_buckets(&buckets, json)?);
        }
        Command::Objects { bucket } => {
            let objects = lens.objects(&bucket).await?;
            print!("{}", output::render_objects(&objects, json)?);
        }
        Command::Download { bucket, key } => {
            let path = lens.download(&bucket, &key).await?;
            println!("{}", path.display());
        }
        Command::Open { bucket, key } => {
            let url = match key {
                Some(key) => lens.object_url(&bucket, &key),
                None => lens.bucket_url(&bucket),
            };
            println!("{url}");
        }
        Command::Uri { bucket, key } => println!("{}", object_uri(&bucket, &key)),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let (config, command, json) = Args::parse().into_config(LensConfig::from_env());

    init_tracing(&config.log_level)?;

    info!(
        region = config.region.as_deref().unwrap_or("<default>"),
        profile = config.profile.as_deref().unwrap_or("<default>"),
        command = ?command,
        "starting bucketlens"
    );

    let lens = BucketLens::from_config(config).await?;

    match run(&lens, command, json).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {err:#}");
            if let Some(url) = err.downcast_ref::<LensError>().and_then(region_mismatch_url) {
                eprintln!("open the bucket in its own region instead: {url}");
                return Ok(ExitCode::from(EXIT_REGION_MISMATCH));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
