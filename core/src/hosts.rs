//! # Host Files
//!
//! Loads probe targets from a file. `.json` files hold either an object
//! mapping labels to addresses or an array of entries; anything else is read
//! line by line.
//!
//! Line formats:
//! * `label,address`
//! * `label address`
//! * `address` (labeled `Host-<address>`)
//!
//! Blank lines and lines starting with `#` are skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use pingr_common::network::target::Target;
use serde_json::Value;
use tracing::debug;

pub fn load_hosts(path: &Path) -> anyhow::Result<Vec<Target>> {
    let content: String = fs::read_to_string(path)
        .with_context(|| format!("failed to read host file '{}'", path.display()))?;

    let targets: Vec<Target> = if crate::is_json(path) {
        parse_json_hosts(&content)
            .with_context(|| format!("failed to parse host file '{}'", path.display()))?
    } else {
        parse_text_hosts(&content)
    };

    debug!(file = %path.display(), hosts = targets.len(), "host file loaded");
    Ok(targets)
}

pub fn parse_text_hosts(content: &str) -> Vec<Target> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(parse_host_line)
        .collect()
}

fn parse_host_line(line: &str) -> Option<Target> {
    if line.contains(',') {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        return match parts.as_slice() {
            [label, address, ..] if !address.is_empty() => Some(Target::new(*label, *address)),
            _ => None,
        };
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [address] => Some(Target::unlabeled(*address)),
        [label, address, ..] => Some(Target::new(*label, *address)),
        [] => None,
    }
}

pub fn parse_json_hosts(content: &str) -> anyhow::Result<Vec<Target>> {
    let value: Value = serde_json::from_str(content)?;

    let targets: Vec<Target> = match value {
        Value::Object(map) => map
            .iter()
            .filter_map(|(label, address)| address.as_str().map(|a| Target::new(label.as_str(), a)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .filter_map(|(idx, item)| json_entry(idx, item))
            .collect(),
        _ => bail!("expected an object or an array of hosts"),
    };

    Ok(targets)
}

fn json_entry(idx: usize, item: &Value) -> Option<Target> {
    match item {
        Value::String(address) => Some(Target::unlabeled(address.as_str())),
        Value::Object(fields) => {
            let address: &str = fields
                .get("ip")
                .or_else(|| fields.get("address"))
                .and_then(Value::as_str)?;
            let label: String = fields
                .get("label")
                .or_else(|| fields.get("name"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Host-{idx}"));
            Some(Target::new(label, address))
        }
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
