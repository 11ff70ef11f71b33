//! `ferrite encrypt` — seal a payload for a configured cluster.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::Config;

#[derive(Args)]
pub struct EncryptArgs {
    /// Cluster id to encrypt for (default: first configured cluster)
    #[arg(long)]
    pub cluster: Option<String>,

    /// Read the payload from this file instead of stdin
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Write the encoded blob to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: EncryptArgs, config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let cluster = config.cluster(args.cluster.as_deref())?;

    let plaintext = match &args.input {
        Some(path) => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read payload from stdin")?;
            buf
        }
    };

    debug!(cluster = %cluster.id, bytes = plaintext.len(), "encrypting payload");
    let encoded = sealer::encrypt_payload(cluster.public_key.as_bytes(), &plaintext)
        .with_context(|| format!("failed to encrypt payload for cluster '{}'", cluster.id))?;

    match &args.output {
        Some(path) => fs::write(path, encoded)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{encoded}"),
    }
    Ok(())
}
