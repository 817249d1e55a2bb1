//! Domain models shared by the `pingr` crates.
//!
//! Nothing in here touches the network or the terminal: targets, outcomes and
//! adapter records are plain data, and the route-table parsers are pure
//! functions over text that callers read elsewhere.

pub mod config;
pub mod network;
pub mod outcome;
pub mod system;
pub mod utils;
