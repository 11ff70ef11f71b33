//! `ferrite doctor` — check that this machine can encrypt for its clusters.
//!
//! Prints one marked line per check; a failed probe reports the underlying
//! error and the command exits non-zero. No automatic remediation.

use std::path::Path;

use anyhow::{anyhow, Result};

use crate::config::{Cluster, Config};
use crate::output::{pass, problem, warn};

pub fn run(config_path: &Path) -> Result<()> {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(err) => {
            println!("{} configuration file issue: {err:#}", problem());
            return Err(err);
        }
    };
    println!("{} configuration file ({})", pass(), config_path.display());

    if config.clusters.is_empty() {
        println!("{} no clusters found in configuration", problem());
        return Err(anyhow!("no clusters found in configuration"));
    }

    let mut first_failure = None;
    for cluster in &config.clusters {
        if let Err(err) = check_cluster(cluster) {
            first_failure.get_or_insert(err);
        }
    }

    match first_failure {
        None => Ok(()),
        Some(err) => {
            println!("{} some problems were detected", problem());
            Err(err)
        }
    }
}

/// Check one cluster: key present, and usable for a probe encryption.
fn check_cluster(cluster: &Cluster) -> Result<()> {
    println!("{} cluster found ({})", pass(), cluster.id);
    if cluster.name.is_empty() {
        println!("{} cluster {} has no display name", warn(), cluster.id);
    } else {
        println!("{} cluster name ({})", pass(), cluster.name);
    }

    if cluster.public_key.trim().is_empty() {
        println!("{} missing public key for cluster: {}", problem(), cluster.id);
        return Err(anyhow!("missing public key for cluster '{}'", cluster.id));
    }
    println!("{} public key for cluster found ({})", pass(), cluster.id);

    // Probe with a throwaway payload: proves the key parses and is usable
    // for encryption. The output is discarded.
    match sealer::encrypt_payload(cluster.public_key.as_bytes(), b"foo") {
        Ok(_) => {
            println!("{} public key is usable ({})", pass(), cluster.id);
            Ok(())
        }
        Err(err) => {
            println!("{} failed to use public key: {err}", problem());
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSA_PUBKEY_PEM: &str = "\
-----BEGIN PUBLIC KEY-----
MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEAskvjdoHpwl45QhMPcYg9
6UpPh+7cq5GwDNhVv13EQSEFcsfvitGWnz5E1pFNwPoNDkTGM4IkCwB6jQh6QqPx
1JBBkeMUX3JXpf4sbcwo145rWKp+oEKXkvf5XkuqXYh8CeENysTQMrimJfKCLPrR
VgYYP4atbr30BXCIu3dabBrtDnOn5JryVB+cF011tCLGzFDauXtKJ3N4dHtapsO5
W4yWs55BlO4OUmZpMUwB6zrCjVdRDqWiEAoI9UWXkSLdwRXPmRXbT0bD/JPR6sSq
Yosb8wk6NopQ7hv4h8y5Q47hAdlaH5kPIvGixZDkxj5TdCpan7NHnlbuGEoRXfvF
mwIDAQAB
-----END PUBLIC KEY-----
";

    fn cluster(public_key: &str) -> Cluster {
        Cluster {
            id: "eu1".into(),
            name: "Europe".into(),
            public_key: public_key.into(),
        }
    }

    #[test]
    fn valid_key_probe_passes() {
        assert!(check_cluster(&cluster(RSA_PUBKEY_PEM)).is_ok());
    }

    #[test]
    fn collapsed_key_probe_passes() {
        let collapsed = RSA_PUBKEY_PEM.replace('\n', " ");
        assert!(check_cluster(&cluster(&collapsed)).is_ok());
    }

    #[test]
    fn missing_key_fails() {
        assert!(check_cluster(&cluster("")).is_err());
    }

    #[test]
    fn unusable_key_fails() {
        assert!(check_cluster(&cluster("-----BEGIN PUBLIC KEY-----")).is_err());
    }

    #[test]
    fn missing_config_file_fails() {
        assert!(run(Path::new("/nonexistent/ferrite.json")).is_err());
    }
}
