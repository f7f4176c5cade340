//! Command line parsing and challenge input

use std::path::PathBuf;

use anyhow::{Context, bail};
use dns01_active24_core::{ChallengeAction, ChallengeRequest};
use tokio::io::AsyncReadExt;

pub const USAGE: &str = "\
Usage: dns01-active24 <present|cleanup> <challenge.json|->

Reads a challenge request (JSON, camelCase fields resolvedFQDN, resolvedZone,
key, resourceNamespace, config) from the file or from stdin when '-' is given.

Environment:
  DNS01_SECRETS_DIR  secrets root, <root>/<namespace>/<name>/{apiKey,apiSecret,serviceId}
  RUST_LOG           log filter (default: info)";

/// Where the challenge request is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: ChallengeAction,
    pub input: Input,
}

impl Command {
    /// Parse the arguments following the program name.
    pub fn parse<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_string()).collect();
        let [action, input] = args.as_slice() else {
            bail!("expected exactly two arguments, got {}", args.len());
        };

        let action = match action.as_str() {
            "present" => ChallengeAction::Present,
            "cleanup" | "clean-up" => ChallengeAction::CleanUp,
            other => bail!("unknown action '{other}', expected 'present' or 'cleanup'"),
        };
        let input = match input.as_str() {
            "-" => Input::Stdin,
            path => Input::File(PathBuf::from(path)),
        };

        Ok(Self { action, input })
    }
}

pub async fn read_challenge(input: &Input) -> anyhow::Result<ChallengeRequest> {
    let (raw, source) = match input {
        Input::Stdin => {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("failed to read challenge from stdin")?;
            (raw, "stdin".to_string())
        }
        Input::File(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read challenge file '{}'", path.display()))?;
            (raw, path.display().to_string())
        }
    };

    serde_json::from_str(&raw).with_context(|| format!("invalid challenge request in {source}"))
}
