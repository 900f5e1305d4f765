//! QC-Quorum: quorum set inspector
//!
//! Reads `{t, v}` quorum set documents and answers the questions federated
//! voting asks of them.
//!
//! ```text
//! qc-quorum inspect qset.json
//! qc-quorum check qset.json --nodes <key>,<key>
//! qc-quorum closest qset.json --pool <key>,<key>,<key> --exclude <key>
//! qc-quorum weight qset.json --node <key>
//! qc-quorum node --config node.json
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qc_scp_quorum::{
    find_closest_v_blocking, from_json_str, is_quorum_slice, is_v_blocking, node_weight,
    normalized, quorum_set_hash, to_compact_string, to_json_full, LocalNodeConfig, NodeId,
    QuorumSet, Sha256Driver,
};

/// QC-Quorum: SCP quorum set inspector
#[derive(Parser, Debug)]
#[command(name = "qc-quorum")]
#[command(about = "Normalize, hash and evaluate SCP quorum sets")]
struct Args {
    /// Log filter, overridden by RUST_LOG
    #[arg(long, env = "QC_LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the normalized document, hash and summary of a quorum set
    Inspect {
        /// Quorum set document (`-` for stdin)
        qset: PathBuf,
    },

    /// Check whether a node set is a quorum slice and/or v-blocking
    Check {
        qset: PathBuf,
        /// Comma-separated node keys
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,
    },

    /// Find the closest v-blocking set drawn from a pool of peers
    Closest {
        qset: PathBuf,
        /// Comma-separated node keys of live peers
        #[arg(long, value_delimiter = ',')]
        pool: Vec<String>,
        /// Node never picked (usually the local node)
        #[arg(long)]
        exclude: Option<String>,
    },

    /// Nomination weight of a node in a quorum set
    Weight {
        qset: PathBuf,
        #[arg(long)]
        node: String,
        /// Treat the node as the local node
        #[arg(long)]
        local: bool,
    },

    /// Build the local node from a config file and print its quorum state
    Node {
        #[arg(long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let report = match args.command {
        Command::Inspect { qset } => inspect(&read_qset(&qset)?)?,
        Command::Check { qset, nodes } => {
            let qset = read_qset(&qset)?;
            let nodes = parse_keys(&nodes)?;
            json!({
                "slice": is_quorum_slice(&qset, &nodes),
                "v_blocking": is_v_blocking(&qset, &nodes),
            })
        }
        Command::Closest {
            qset,
            pool,
            exclude,
        } => {
            let qset = read_qset(&qset)?;
            let pool = parse_keys(&pool)?;
            let exclude = exclude.as_deref().map(parse_key).transpose()?;
            let closest = find_closest_v_blocking(&qset, &pool, exclude.as_ref());
            json!({
                "closest": closest.iter().map(NodeId::to_str_key).collect::<Vec<_>>(),
            })
        }
        Command::Weight { qset, node, local } => {
            let qset = read_qset(&qset)?;
            let node = parse_key(&node)?;
            json!({ "weight": node_weight(&node, &qset, local) })
        }
        Command::Node { config } => {
            let config = LocalNodeConfig::load(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            let local = config.into_local_node(Arc::new(Sha256Driver::new()))?;
            let snapshot = local.snapshot();
            json!({
                "node_id": local.node_id().to_str_key(),
                "is_validator": local.is_validator(),
                "quorum_set": to_json_full(&snapshot.quorum_set)?,
                "quorum_set_hash": hex::encode(snapshot.quorum_set_hash),
                "singleton_quorum_set_hash": hex::encode(snapshot.singleton_quorum_set_hash),
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn inspect(qset: &QuorumSet) -> Result<serde_json::Value> {
    let normal = normalized(qset);
    let hash = quorum_set_hash(qset, &Sha256Driver::new())?;
    let nodes: BTreeSet<NodeId> = normal.all_nodes().into_iter().collect();

    Ok(json!({
        "normalized": to_json_full(&normal)?,
        "compact": to_compact_string(&normal)?,
        "hash": hex::encode(hash),
        "distinct_nodes": nodes.len(),
        "depth": normal.depth(),
    }))
}

fn read_qset(path: &Path) -> Result<QuorumSet> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
    };
    let qset = from_json_str(&text).with_context(|| format!("decoding {}", path.display()))?;
    debug!("[qc-quorum] Loaded quorum set with {} children", qset.child_count());
    Ok(qset)
}

fn parse_key(key: &str) -> Result<NodeId> {
    NodeId::from_str_key(key.trim()).with_context(|| format!("invalid node key {key:?}"))
}

fn parse_keys(keys: &[String]) -> Result<BTreeSet<NodeId>> {
    keys.iter()
        .filter(|key| !key.trim().is_empty())
        .map(|key| parse_key(key))
        .collect()
}
