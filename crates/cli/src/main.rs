//! `ferrite` — encrypt worker payloads for a cluster's RSA public key.
//!
//! Subcommands:
//! - `env2payload`: pipe `env(1)` output in, get a JSON payload out.
//! - `encrypt`: seal a payload for a configured cluster, print one base64 blob.
//! - `doctor`: check the local configuration, including an encryption probe.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "ferrite")]
#[command(about = "Encrypts worker payloads for a cluster's RSA public key")]
#[command(version)]
struct Cli {
    /// Path to the cluster configuration file
    #[arg(long, global = true, env = "FERRITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a payload for a cluster
    Encrypt(commands::encrypt::EncryptArgs),
    /// Convert env output to a JSON payload
    Env2payload(commands::env2payload::Env2PayloadArgs),
    /// Check the local configuration
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout stays clean for piping.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::Config::default_path()?,
    };

    match cli.command {
        Commands::Encrypt(args) => commands::encrypt::run(args, &config_path),
        Commands::Env2payload(args) => commands::env2payload::run(args),
        Commands::Doctor => commands::doctor::run(&config_path),
    }
}
