//! Chunshua CLI - resolve and probe encrypted media references.
//!
//! Prints the URL behind a vocabulary, example or video reference, and checks
//! whether a URL currently serves audio. Useful when a pronunciation button
//! stays silent and the data needs inspecting.

mod config;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chunshua_core::{
    create_http_client, ChunshuaError, ErrorCode, HttpProber, MediaKind, ReferenceCodec,
};
use clap::{Parser, Subcommand};

use crate::config::CliConfig;

/// Chunshua - encrypted media reference tool.
#[derive(Parser, Debug)]
#[command(name = "chunshua")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file (YAML).
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(
        short,
        long,
        default_value = "warn",
        env = "CHUNSHUA_LOG_LEVEL",
        global = true
    )]
    log_level: log::LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decrypt a reference and print the embedded URL.
    Decrypt {
        reference: String,
    },
    /// Print the word pronunciation URL.
    Word {
        reference: String,
    },
    /// Print the URL of the example sentence at INDEX.
    Example {
        reference: String,
        #[arg(short, long)]
        index: u32,
    },
    /// Print the video URL.
    Video {
        reference: String,
    },
    /// Check whether a URL (or the URL behind a reference) serves audio.
    Probe {
        #[arg(required_unless_present = "reference")]
        url: Option<String>,

        /// Probe the word URL behind this reference instead.
        #[arg(long, conflicts_with = "url")]
        reference: Option<String>,

        /// With --reference, probe the example URL at this index.
        #[arg(short, long, requires = "reference")]
        index: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(args.log_level)
        .format_timestamp_millis()
        .init();

    log::debug!("Chunshua CLI v{}", env!("CARGO_PKG_VERSION"));

    let config = CliConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let core_config = config.to_core_config();
    core_config
        .validate()
        .map_err(ChunshuaError::Configuration)
        .context("Invalid configuration")?;

    let codec = ReferenceCodec::default();

    match args.command {
        Command::Decrypt { reference } | Command::Word { reference } => {
            println!("{}", resolve(&codec, &reference, MediaKind::Word)?);
        }
        Command::Example { reference, index } => {
            println!("{}", resolve(&codec, &reference, MediaKind::Example(index))?);
        }
        Command::Video { reference } => {
            println!("{}", resolve(&codec, &reference, MediaKind::Video)?);
        }
        Command::Probe {
            url,
            reference,
            index,
        } => {
            let url = match (url, reference) {
                (Some(url), _) => url,
                (None, Some(reference)) => {
                    let kind = index.map_or(MediaKind::Word, MediaKind::Example);
                    resolve(&codec, &reference, kind)?
                }
                (None, None) => bail!("Either a URL or --reference is required"),
            };

            let client = create_http_client(&core_config).context("Failed to build HTTP client")?;
            let prober = HttpProber::new(client);
            match prober.probe_detailed(&url).await {
                Ok(()) => println!("accessible: {}", url),
                Err(e) => bail!("not accessible ({}): {} - {}", e.code(), e, url),
            }
        }
    }

    Ok(())
}

/// Resolves a reference, reporting the precise failure when it does not.
fn resolve(codec: &ReferenceCodec, reference: &str, kind: MediaKind) -> Result<String> {
    if let Some(url) = codec.resolve(reference, kind) {
        return Ok(url);
    }

    let err = match codec.try_decrypt(reference) {
        Err(e) => ChunshuaError::from(e),
        Ok(_) => ChunshuaError::Unresolvable("derivation failed".to_string()),
    };
    Err(err).context("Failed to resolve reference")
}
