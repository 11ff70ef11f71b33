//! Per-user cluster configuration.
//!
//! A JSON file listing the clusters a user can encrypt for, each with an
//! identifier, a display name and the cluster's RSA public key PEM. Default
//! location is the platform config directory; `--config` / `FERRITE_CONFIG`
//! override it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

/// Parsed cluster configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Clusters available to encrypt for.
    #[serde(default)]
    pub clusters: Vec<Cluster>,
}

/// One target cluster.
#[derive(Debug, Clone, Deserialize)]
pub struct Cluster {
    /// Stable identifier, used with `--cluster`.
    pub id: String,

    /// Human-readable display name.
    #[serde(default)]
    pub name: String,

    /// PEM-encoded RSA public key. May have had its newlines collapsed to
    /// spaces; the sealer repairs that on parse.
    #[serde(default)]
    pub public_key: String,
}

impl Config {
    /// Load the configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or not valid
    /// JSON for this shape.
    pub fn load(path: &Path) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from(path.to_path_buf()).format(config::FileFormat::Json))
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        cfg.try_deserialize()
            .context("failed to deserialise configuration")
    }

    /// Default per-user configuration file location.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "ferrite")
            .context("could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }

    /// Select a cluster by id, or the first configured one.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown, or if no clusters are
    /// configured at all.
    pub fn cluster(&self, id: Option<&str>) -> Result<&Cluster> {
        match id {
            Some(id) => self
                .clusters
                .iter()
                .find(|c| c.id == id)
                .with_context(|| format!("cluster '{id}' not found in configuration")),
            None => self
                .clusters
                .first()
                .context("no clusters found in configuration"),
        }
    }
}
