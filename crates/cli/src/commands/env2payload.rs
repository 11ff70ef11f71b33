//! `ferrite env2payload` — turn `env(1)` output into a JSON payload.
//!
//! Pipe the output of `env` in; get a worker [`Payload`] out, with proper
//! JSON escaping. A line without `=` is treated as the continuation of the
//! previous variable's value (multi-line values).

use std::collections::HashSet;
use std::io::Read;

use anyhow::{bail, Context, Result};
use clap::Args;

use common::Payload;

#[derive(Args)]
pub struct Env2PayloadArgs {
    /// Comma separated list of variables to include
    #[arg(short, long)]
    pub include: Option<String>,

    /// Comma separated list of variables to exclude
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Add an environment variable (KEY=VALUE)
    #[arg(short, long = "env")]
    pub env: Vec<String>,

    /// Command to include
    #[arg(short, long = "cmd")]
    pub cmd: Vec<String>,

    /// Skip reading from stdin
    #[arg(short = 'n', long)]
    pub no_stdin: bool,
}

pub fn run(args: Env2PayloadArgs) -> Result<()> {
    let input = if args.no_stdin {
        String::new()
    } else {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read env output from stdin")?;
        buf
    };

    let payload = build_payload(&args, &input)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn build_payload(args: &Env2PayloadArgs, input: &str) -> Result<Payload> {
    let include = split_list(args.include.as_deref());
    let exclude = split_list(args.exclude.as_deref());
    if !include.is_empty() && !exclude.is_empty() {
        bail!("can't use include and exclude simultaneously");
    }

    let mut payload = Payload::new();
    let mut current: Option<String> = None;

    for line in input.trim_end_matches('\n').split('\n') {
        match line.split_once('=') {
            Some((key, value)) => {
                if exclude.contains(key) || (!include.is_empty() && !include.contains(key)) {
                    current = None;
                    continue;
                }
                payload.env.insert(key.to_string(), value.to_string());
                current = Some(key.to_string());
            }
            // Most likely part of the previous variable's value.
            None => {
                if let Some(key) = &current {
                    if let Some(value) = payload.env.get_mut(key) {
                        value.push_str(line);
                    }
                }
            }
        }
    }

    for extra in &args.env {
        if let Some((key, value)) = extra.split_once('=') {
            payload.env.insert(key.to_string(), value.to_string());
        }
    }
    payload.cmd.clone_from(&args.cmd);

    Ok(payload)
}

fn split_list(list: Option<&str>) -> HashSet<&str> {
    list.map(|l| l.split(',').filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> Env2PayloadArgs {
        Env2PayloadArgs {
            include: None,
            exclude: None,
            env: Vec::new(),
            cmd: Vec::new(),
            no_stdin: true,
        }
    }

    #[test]
    fn parses_simple_env_lines() {
        let payload = build_payload(&args(), "FOO=bar\nBAZ=qux\n").unwrap();
        assert_eq!(payload.env["FOO"], "bar");
        assert_eq!(payload.env["BAZ"], "qux");
        assert_eq!(payload.version, "1");
    }

    #[test]
    fn value_keeps_everything_after_first_equals() {
        let payload = build_payload(&args(), "URL=postgres://u:p@h/db?a=b\n").unwrap();
        assert_eq!(payload.env["URL"], "postgres://u:p@h/db?a=b");
    }

    #[test]
    fn continuation_lines_append_to_previous_variable() {
        let payload = build_payload(&args(), "CERT=line1\nline2\nline3\n").unwrap();
        assert_eq!(payload.env["CERT"], "line1line2line3");
    }

    #[test]
    fn exclude_drops_variable_and_its_continuations() {
        let mut a = args();
        a.exclude = Some("SECRET".into());
        let payload = build_payload(&a, "SECRET=hidden\nmore\nKEEP=yes\n").unwrap();
        assert!(!payload.env.contains_key("SECRET"));
        assert_eq!(payload.env["KEEP"], "yes");
    }

    #[test]
    fn include_keeps_only_listed_variables() {
        let mut a = args();
        a.include = Some("A,B".into());
        let payload = build_payload(&a, "A=1\nB=2\nC=3\n").unwrap();
        assert_eq!(payload.env.len(), 2);
        assert!(!payload.env.contains_key("C"));
    }

    #[test]
    fn include_and_exclude_conflict() {
        let mut a = args();
        a.include = Some("A".into());
        a.exclude = Some("B".into());
        assert!(build_payload(&a, "").is_err());
    }

    #[test]
    fn extra_env_and_cmd_are_applied() {
        let mut a = args();
        a.env = vec!["EXTRA=1".into(), "malformed".into()];
        a.cmd = vec!["run".into(), "--fast".into()];
        let payload = build_payload(&a, "").unwrap();
        assert_eq!(payload.env["EXTRA"], "1");
        assert_eq!(payload.env.len(), 1);
        assert_eq!(payload.cmd, vec!["run", "--fast"]);
    }

    #[test]
    fn empty_input_yields_empty_payload() {
        let payload = build_payload(&args(), "").unwrap();
        assert!(payload.env.is_empty());
    }
}
