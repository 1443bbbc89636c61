//! End-to-end behaviour of the PIVX adapter over a scripted node.
//!
//! The node is a `BitcoindRpc` on top of an in-memory transport that records
//! every method it receives, so tests can assert which calls were issued.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use chainstatus_bitcoind::BitcoindRpc;
use chainstatus_core::error::TransportError;
use chainstatus_core::request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use chainstatus_core::{RpcTransport, StatusError, StatusProvider};
use chainstatus_pivx::params::{MAINNET_PARAMS, TESTNET_PARAMS};
use chainstatus_pivx::{
    initialize, initialize_with, ChainParams, Denomination, EnrichmentMode, NetworkContext,
    NetworkMode, PivxRpc,
};

// ─── Scripted node ────────────────────────────────────────────────────────────

#[derive(Clone)]
enum Reply {
    Ok(Value),
    Rpc(i64, &'static str),
    Down,
    Slow(Duration, Box<Reply>),
}

#[derive(Default)]
struct ScriptedNode {
    replies: HashMap<&'static str, Reply>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedNode {
    fn with(mut self, method: &'static str, reply: Reply) -> Self {
        self.replies.insert(method, reply);
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RpcTransport for ScriptedNode {
    async fn send(&self, req: JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        self.calls.lock().unwrap().push(req.method.clone());
        let mut reply = self
            .replies
            .get(req.method.as_str())
            .cloned()
            .unwrap_or(Reply::Down);
        loop {
            match reply {
                Reply::Ok(v) => return Ok(JsonRpcResponse::success(req.id, v)),
                Reply::Rpc(code, message) => {
                    return Ok(JsonRpcResponse::failure(
                        req.id,
                        JsonRpcError { code, message: message.into(), data: None },
                    ))
                }
                Reply::Down => return Err(TransportError::Http("connection refused".into())),
                Reply::Slow(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
            }
        }
    }

    fn url(&self) -> &str {
        "mock://pivxd"
    }
}

const EXTENSION_CALLS: [&str; 3] = ["getinfo", "getmasternodecount", "getnextsuperblock"];

fn blockchain_info(chain: &str, height: u32) -> Value {
    json!({
        "chain": chain,
        "blocks": height,
        "headers": height,
        "bestblockhash": "000000000000b1b2c3d4e5f6",
        "difficulty": 12345.6789,
        "warnings": "",
    })
}

fn network_info() -> Value {
    json!({
        "version": 5050000,
        "subversion": "/PIVX Core:5.5.0/",
        "protocolversion": 70926,
        "timeoffset": 0,
        "warnings": "",
    })
}

/// A healthy mainnet node at height 100.
fn healthy_node() -> ScriptedNode {
    ScriptedNode::default()
        .with("getblockchaininfo", Reply::Ok(blockchain_info("main", 100)))
        .with("getnetworkinfo", Reply::Ok(network_info()))
        .with(
            "getinfo",
            Reply::Ok(serde_json::from_str(
                r#"{"version": 5050000, "blocks": 100, "moneysupply": 21000000.5,
                    "zPIVsupply": {"1": 10, "5": 5, "10": 0, "50": 0, "100": 2,
                                   "500": 0, "1000": 0, "5000": 0, "total": 235}}"#,
            )
            .unwrap()),
        )
        .with(
            "getmasternodecount",
            Reply::Ok(json!({"total": 50, "stable": 45, "enabled": 42, "inqueue": 3})),
        )
        .with("getnextsuperblock", Reply::Ok(json!(150)))
}

async fn connect(node: ScriptedNode) -> (Arc<ScriptedNode>, PivxRpc<BitcoindRpc>) {
    let node = Arc::new(node);
    let base = BitcoindRpc::new(node.clone(), "PIVX");
    let pivx = PivxRpc::connect(base).await.expect("initialization");
    node.calls.lock().unwrap().clear();
    (node, pivx)
}

fn extension_calls(node: &ScriptedNode) -> usize {
    node.calls()
        .iter()
        .filter(|m| EXTENSION_CALLS.contains(&m.as_str()))
        .count()
}

// ─── Aggregation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn composite_status_has_every_field() {
    let (node, pivx) = connect(healthy_node()).await;

    let status = pivx.chain_status().await.unwrap();

    assert_eq!(status.info.blocks, 100);
    assert_eq!(status.money_supply.to_string(), "21000000.5");
    assert_eq!(status.active_masternodes, 42);
    assert_eq!(status.next_superblock, 150);
    assert_eq!(status.shielded_supply.len(), Denomination::ALL.len());
    assert_eq!(status.shielded_supply.total().unwrap().to_string(), "235");

    assert_eq!(
        node.calls(),
        vec![
            "getblockchaininfo",
            "getnetworkinfo",
            "getinfo",
            "getmasternodecount",
            "getnextsuperblock"
        ]
    );
}

#[tokio::test]
async fn money_supply_keeps_full_precision() {
    let node = healthy_node().with(
        "getinfo",
        Reply::Ok(serde_json::from_str(r#"{"moneysupply": 98765432109876543.123456789012}"#).unwrap()),
    );
    let (_, pivx) = connect(node).await;

    let status = pivx.chain_status().await.unwrap();
    assert_eq!(status.money_supply.to_string(), "98765432109876543.123456789012");
    assert!(status.shielded_supply.is_empty());

    let rendered = serde_json::to_string(&status).unwrap();
    assert!(rendered.contains(r#""money_supply":98765432109876543.123456789012"#));
    assert!(rendered.contains(r#""blocks":100"#));
}

#[tokio::test]
async fn null_zpiv_supply_reads_as_empty() {
    let node = healthy_node().with(
        "getinfo",
        Reply::Ok(serde_json::from_str(r#"{"moneysupply": 21000000.5, "zPIVsupply": null}"#).unwrap()),
    );
    let (_, pivx) = connect(node).await;

    let status = pivx.chain_status().await.unwrap();
    assert_eq!(status.money_supply.to_string(), "21000000.5");
    assert!(status.shielded_supply.is_empty());
    assert_eq!(status.active_masternodes, 42);
}

/// Wrap `node` with a mainnet context, skipping discovery.
fn mainnet_adapter(node: Arc<ScriptedNode>) -> PivxRpc<BitcoindRpc> {
    let ctx = Arc::new(NetworkContext::new(&MAINNET_PARAMS));
    PivxRpc::new(BitcoindRpc::new(node, "PIVX"), ctx)
}

#[tokio::test]
async fn base_failure_issues_no_extension_call() {
    let node = Arc::new(healthy_node().with("getblockchaininfo", Reply::Down));
    let pivx = mainnet_adapter(node.clone());

    let err = pivx.chain_status().await.unwrap_err();

    assert!(matches!(err, StatusError::Transport(TransportError::Http(_))));
    assert_eq!(extension_calls(&node), 0);
}

#[tokio::test]
async fn base_rpc_error_issues_no_extension_call() {
    let node = Arc::new(healthy_node().with("getnetworkinfo", Reply::Rpc(-28, "Verifying blocks...")));
    let pivx = mainnet_adapter(node.clone());

    let err = pivx.chain_status().await.unwrap_err();

    assert_eq!(err.rpc_error().unwrap().code, -28);
    assert_eq!(extension_calls(&node), 0);
}

#[tokio::test]
async fn masternode_count_error_surfaces_verbatim() {
    let node = healthy_node().with("getmasternodecount", Reply::Rpc(-1, "unavailable"));
    let (node, pivx) = connect(node).await;

    let err = pivx.chain_status().await.unwrap_err();

    let rpc = err.rpc_error().expect("application error");
    assert_eq!(rpc.code, -1);
    assert_eq!(rpc.message, "unavailable");
    // sequential mode stops at the first failure
    assert!(!node.calls().contains(&"getnextsuperblock".to_string()));
}

#[tokio::test]
async fn any_extension_failure_yields_no_status() {
    for method in EXTENSION_CALLS {
        for reply in [Reply::Down, Reply::Rpc(-32601, "Method not found")] {
            let (_, pivx) = connect(healthy_node().with(method, reply)).await;
            assert!(pivx.chain_status().await.is_err(), "{method} failure produced a status");
        }
    }
}

#[tokio::test]
async fn malformed_extension_result_is_an_error() {
    let node = healthy_node().with("getnextsuperblock", Reply::Ok(json!("soon")));
    let (_, pivx) = connect(node).await;

    match pivx.chain_status().await.unwrap_err() {
        StatusError::Decode { method, .. } => assert_eq!(method, "getnextsuperblock"),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn concurrent_mode_matches_sequential_result() {
    let (_, seq) = connect(healthy_node()).await;
    let (node, conc) = connect(healthy_node()).await;
    let conc = conc.with_enrichment(EnrichmentMode::Concurrent);

    assert_eq!(conc.chain_status().await.unwrap(), seq.chain_status().await.unwrap());
    assert_eq!(extension_calls(&node), 3);
}

#[tokio::test]
async fn concurrent_mode_reports_first_error_by_call_order() {
    // getinfo fails last in wall-clock time but first in call order
    let node = healthy_node()
        .with(
            "getinfo",
            Reply::Slow(Duration::from_millis(50), Box::new(Reply::Rpc(-5, "getinfo broke"))),
        )
        .with("getnextsuperblock", Reply::Rpc(-6, "superblock broke"));
    let (node, pivx) = connect(node).await;
    let pivx = pivx.with_enrichment(EnrichmentMode::Concurrent);

    let err = pivx.chain_status().await.unwrap_err();

    assert_eq!(err.rpc_error().unwrap().code, -5);
    assert_eq!(extension_calls(&node), 3);
}

#[tokio::test]
async fn deadline_expiry_is_a_timeout() {
    let node = healthy_node().with(
        "getnextsuperblock",
        Reply::Slow(Duration::from_secs(5), Box::new(Reply::Ok(json!(150)))),
    );
    let (_, pivx) = connect(node).await;

    let err = pivx
        .chain_status_within(Duration::from_millis(20))
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, StatusError::Timeout { ms: 20 }));
}

#[tokio::test]
async fn generic_calls_pass_through_to_base() {
    let node = healthy_node().with("getbestblockhash", Reply::Ok(json!("00ab")));
    let (node, pivx) = connect(node).await;

    let hash = pivx.call_value("getbestblockhash", vec![]).await.unwrap();

    assert_eq!(hash, json!("00ab"));
    assert_eq!(node.calls(), vec!["getbestblockhash"]);
}

// ─── Initialization ───────────────────────────────────────────────────────────

#[tokio::test]
async fn mainnet_node_is_livenet() {
    let (_, pivx) = connect(healthy_node()).await;
    let net = pivx.network();
    assert_eq!(net.mode, NetworkMode { testnet: false, label: "livenet" });
    assert_eq!(net.params.name, "main");
}

#[tokio::test]
async fn testnet_node_is_testnet() {
    let node = healthy_node().with("getblockchaininfo", Reply::Ok(blockchain_info("test", 7)));
    let (_, pivx) = connect(node).await;
    assert_eq!(pivx.network().mode, NetworkMode { testnet: true, label: "testnet" });
}

#[tokio::test]
async fn custom_identity_maps_to_testnet_through_selector() {
    fn selector(chain: &str) -> &'static ChainParams {
        match chain {
            "test-chain-id" => &TESTNET_PARAMS,
            other => chainstatus_pivx::select_params(other),
        }
    }

    let node = Arc::new(
        healthy_node().with("getblockchaininfo", Reply::Ok(blockchain_info("test-chain-id", 1))),
    );
    let base = BitcoindRpc::new(node, "PIVX");

    let ctx = initialize_with(&base, selector).await.unwrap();

    assert_eq!(ctx.mode, NetworkMode { testnet: true, label: "testnet" });
    assert_eq!(ctx.params, &TESTNET_PARAMS);
}

#[tokio::test]
async fn fee_flags_are_fixed_for_every_network() {
    for chain in ["main", "test", "regtest"] {
        let node = healthy_node().with("getblockchaininfo", Reply::Ok(blockchain_info(chain, 1)));
        let (_, pivx) = connect(node).await;

        assert!(pivx.network().fees.estimate_fee);
        assert!(!pivx.network().fees.estimate_smart_fee);
        assert!(pivx.chain_config().fees.estimate_fee);
        assert!(!pivx.chain_config().fees.estimate_smart_fee);
        // the base keeps its own defaults
        assert!(pivx.base().chain_config().fees.estimate_smart_fee);
    }
}

#[tokio::test]
async fn identity_fetch_failure_is_fatal() {
    let node = Arc::new(ScriptedNode::default());
    let base = BitcoindRpc::new(node.clone(), "PIVX");

    let err = initialize(&base).await.unwrap_err();

    assert!(matches!(err, StatusError::Initialization(_)));
    assert_eq!(node.calls(), vec!["getblockchaininfo"]);
    assert!(PivxRpc::connect(base).await.is_err());
}
