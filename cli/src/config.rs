//! CLI settings: a JSON config file, overridden by command-line flags.

use std::path::Path;

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

use chainstatus_http::RpcConfig;
use chainstatus_pivx::EnrichmentMode;

use crate::logging::LogConfig;

/// Contents of `--config <file.json>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    pub rpc: RpcConfig,
    #[serde(default)]
    pub enrichment: EnrichmentMode,
    /// Deadline for one status request, in milliseconds.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Build from `--config` if given, then apply flag overrides.
    pub fn from_args(args: &[String]) -> anyhow::Result<Self> {
        let mut cfg = match parse_flag(args, "--config") {
            Some(path) => Self::load(Path::new(&path))?,
            None => match parse_flag(args, "--url") {
                Some(url) => Self {
                    rpc: RpcConfig::for_url(url),
                    enrichment: EnrichmentMode::default(),
                    timeout_ms: None,
                    log: LogConfig::default(),
                },
                None => bail!("either --config or --url is required"),
            },
        };

        if let Some(url) = parse_flag(args, "--url") {
            cfg.rpc.rpc_url = url;
        }
        if let Some(user) = parse_flag(args, "--user") {
            cfg.rpc.rpc_user = user;
        }
        if let Some(pass) = parse_flag(args, "--pass") {
            cfg.rpc.rpc_pass = pass;
        }
        if let Some(ms) = parse_flag(args, "--timeout-ms") {
            cfg.timeout_ms = Some(ms.parse().context("--timeout-ms must be an integer")?);
        }
        if has_flag(args, "--concurrent") {
            cfg.enrichment = EnrichmentMode::Concurrent;
        }
        if let Some(level) = parse_flag(args, "--log-level") {
            cfg.log.level = level;
        }
        if has_flag(args, "--log-json") {
            cfg.log.json = true;
        }
        Ok(cfg)
    }
}

pub fn parse_flag(args: &[String], flag: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == flag)?;
    args.get(pos + 1).cloned()
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
