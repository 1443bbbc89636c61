//! pivx-status: inspect a PIVX node from the terminal.
//!
//! Usage:
//! ```bash
//! # Enriched chain status as JSON
//! pivx-status status --url http://127.0.0.1:51473 --user rpc --pass secret
//!
//! # Same, from a config file, issuing the enrichment calls concurrently
//! pivx-status status --config pivx.json --concurrent
//!
//! # Detected network mode and fee-estimation support
//! pivx-status network --url http://127.0.0.1:51473
//!
//! # Encode a HASH160 as an address of the node's network
//! pivx-status address --url http://127.0.0.1:51473 --hash160 <40 hex chars>
//! ```

mod config;
mod logging;

use std::env;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context};
use serde_json::json;

use chainstatus_bitcoind::BitcoindRpc;
use chainstatus_core::StatusProvider;
use chainstatus_http::HttpRpcClient;
use chainstatus_pivx::{AddressKind, PivxRpc};

use crate::config::{has_flag, parse_flag, CliConfig};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "status" => cmd_status(&args[2..]).await,
        "network" => cmd_network(&args[2..]).await,
        "address" => cmd_address(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("pivx-status {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn print_usage() {
    println!("pivx-status {}", env!("CARGO_PKG_VERSION"));
    println!("Inspect a PIVX node's enriched chain status\n");
    println!("USAGE:");
    println!("    pivx-status <COMMAND> [FLAGS]\n");
    println!("COMMANDS:");
    println!("    status     Print base + PIVX status (supply, masternodes, superblock)");
    println!("    network    Print detected network mode and fee-estimation support");
    println!("    address    Encode a HASH160 as an address of the node's network");
    println!("    version    Print version");
    println!("    help       Print this help\n");
    println!("FLAGS:");
    println!("    --config <FILE>     JSON config ({{\"rpc\": {{...}}, \"enrichment\", \"log\"}})");
    println!("    --url <URL>         RPC endpoint URL");
    println!("    --user <USER>       RPC user");
    println!("    --pass <PASS>       RPC password");
    println!("    --concurrent        Issue enrichment calls concurrently");
    println!("    --timeout-ms <MS>   Deadline for the status request");
    println!("    --log-level <LVL>   Log filter (default: warn)");
    println!("    --log-json          JSON logs on stderr");
    println!("    --hash160 <HEX>     (address) 20-byte hash, hex-encoded");
    println!("    --p2sh              (address) encode as pay-to-script-hash");
}

/// Build the transport, discover the network and wrap the base client.
async fn connect(cfg: &CliConfig) -> anyhow::Result<PivxRpc<BitcoindRpc>> {
    let transport = HttpRpcClient::from_config(&cfg.rpc)
        .with_context(|| format!("creating client for {}", cfg.rpc.rpc_url))?;
    let base = BitcoindRpc::new(Arc::new(transport), cfg.rpc.coin_name.clone());
    tracing::debug!(url = %cfg.rpc.rpc_url, coin = %cfg.rpc.coin_name, "connecting");
    let pivx = PivxRpc::connect(base)
        .await
        .with_context(|| format!("initializing against {}", cfg.rpc.rpc_url))?;
    tracing::debug!(
        network = pivx.network().mode.label,
        enrichment = ?cfg.enrichment,
        "connected"
    );
    Ok(pivx.with_enrichment(cfg.enrichment))
}

fn setup(args: &[String]) -> anyhow::Result<CliConfig> {
    let cfg = CliConfig::from_args(args)?;
    logging::init_tracing(&cfg.log);
    Ok(cfg)
}

async fn cmd_status(args: &[String]) -> anyhow::Result<()> {
    let cfg = setup(args)?;
    let pivx = connect(&cfg).await?;

    let status = match cfg.timeout_ms {
        Some(ms) => pivx.chain_status_within(Duration::from_millis(ms)).await?,
        None => pivx.chain_status().await?,
    };

    println!("{}", serde_json::to_string_pretty(&status)?);
    Ok(())
}

async fn cmd_network(args: &[String]) -> anyhow::Result<()> {
    let cfg = setup(args)?;
    let pivx = connect(&cfg).await?;
    let net = pivx.network();

    let out = json!({
        "chain": net.params.name,
        "magic": format!("{:#010x}", net.params.net),
        "testnet": net.mode.testnet,
        "network": net.mode.label,
        "fees": pivx.chain_config().fees,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

async fn cmd_address(args: &[String]) -> anyhow::Result<()> {
    let raw = parse_flag(args, "--hash160").ok_or_else(|| anyhow!("--hash160 is required"))?;
    let bytes = hex::decode(raw.trim_start_matches("0x")).context("--hash160 is not hex")?;
    let hash: [u8; 20] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow!("--hash160 must be 20 bytes, got {}", bytes.len()))?;
    let kind = if has_flag(args, "--p2sh") {
        AddressKind::ScriptHash
    } else {
        AddressKind::PubKeyHash
    };

    let cfg = setup(args)?;
    let pivx = connect(&cfg).await?;
    let net = pivx.network();

    println!("{} ({})", net.codec.encode_address(kind, &hash), net.mode.label);
    Ok(())
}
