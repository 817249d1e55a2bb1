//! # Probe Target Model
//!
//! A target is a labeled address handed to the prober. This module handles
//! parsing targets from the command line and extending a target list with the
//! default gateways of local adapters.
//!
//! Supported command line forms:
//! * `label:address` (e.g., `Router:192.168.1.1`).
//! * A bare address (e.g., `8.8.8.8`), labeled `Host-<address>`.
//! * A bare IPv6 literal (e.g., `::1`), which is never split on `:`.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::network::interface::NetworkAdapter;

/// A labeled host to be probed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    pub label: String,
    pub address: String,
}

impl Target {
    pub fn new(label: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            address: address.into(),
        }
    }

    /// Builds a target for an address that came without a label.
    pub fn unlabeled(address: impl Into<String>) -> Self {
        let address: String = address.into();
        Self {
            label: format!("Host-{address}"),
            address,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetParseError {
    #[error("target cannot be empty")]
    Empty,
    #[error("missing address in target '{0}'")]
    MissingAddress(String),
    #[error("missing label in target '{0}'")]
    MissingLabel(String),
}

impl FromStr for Target {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TargetParseError::Empty);
        }

        if s.parse::<IpAddr>().is_ok() {
            return Ok(Target::unlabeled(s));
        }

        let Some((label, address)) = s.split_once(':') else {
            return Ok(Target::unlabeled(s));
        };

        let (label, address) = (label.trim(), address.trim());
        if label.is_empty() {
            return Err(TargetParseError::MissingLabel(s.to_string()));
        }
        if address.is_empty() {
            return Err(TargetParseError::MissingAddress(s.to_string()));
        }

        Ok(Target::new(label, address))
    }
}

/// Appends `<adapter>-Gateway` targets for every adapter gateway that is not
/// already probed. Returns the targets that were added.
pub fn append_gateways(targets: &mut Vec<Target>, adapters: &[NetworkAdapter]) -> Vec<Target> {
    let mut added: Vec<Target> = Vec::new();

    for adapter in adapters {
        let Some(gateway) = adapter.gateway else {
            continue;
        };
        let address: String = gateway.to_string();

        if targets.iter().any(|target| target.address == address) {
            continue;
        }

        let target = Target::new(format!("{}-Gateway", adapter.name), address);
        targets.push(target.clone());
        added.push(target);
    }

    added
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
